use tokenlist_publisher::domain::error::ListError;
use tokenlist_publisher::infrastructure::blockchain::ChainClient;
use tokenlist_publisher::infrastructure::config::Config;
use tokenlist_publisher::infrastructure::ipfs::IpfsUploader;
use tokenlist_publisher::infrastructure::logger::Logger;
use tokenlist_publisher::infrastructure::storage;
use tokenlist_publisher::validators::token_validator;

#[tokio::main]
async fn main() {
    Logger::init("info");

    if let Err(e) = run().await {
        log::error!("❌ Token list build failed: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ListError> {
    log::info!("🚀 Building validated token list...");

    let config = Config::new()?;
    let validation_errors = config.validate();
    if !validation_errors.is_empty() {
        return Err(ListError::Config(validation_errors.join(", ")));
    }
    log::info!("✅ Configuration loaded successfully");

    let abi = storage::load_abi(&config.abi_path)?;
    let token_list = storage::load_token_list(&config.token_list_path)?;
    log::info!(
        "✅ Loaded {} group(s) from {}",
        token_list.len(),
        config.token_list_path
    );

    let chain_client = ChainClient::new(&config.rpc_url, abi)?;

    log::info!("🔍 Validating token metadata against on-chain state...");
    let validated = token_validator::validate(token_list, &chain_client).await;
    let surviving: usize = validated.iter().map(|group| group.tokens.len()).sum();
    log::info!(
        "✅ {} token(s) in {} group(s) passed validation",
        surviving,
        validated.len()
    );

    log::info!("📦 Uploading validated token list to IPFS...");
    let uploader = IpfsUploader::new(&config.ipfs_api_url, &config.api_key);
    let cid = uploader.publish(&validated).await?;

    log::info!("✅ Token list pinned with CID {cid}");
    println!("Token list is available at: {}/{}", config.ipfs_gateway, cid);

    Ok(())
}
