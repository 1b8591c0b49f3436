use crate::domain::error::ListError;
use serde::{Deserialize, Serialize};
use std::env;

pub const DEFAULT_IPFS_API_URL: &str = "https://api.quicknode.com/ipfs/rest/v1/s3/put-object";
pub const DEFAULT_IPFS_GATEWAY: &str = "https://yourid.quicknode-ipfs.com/ipfs";

/// Runtime configuration, read from the environment once at startup and
/// passed explicitly into the pipeline stages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// QuickNode API key, shared by the RPC endpoint and the IPFS gateway
    pub api_key: String,
    pub rpc_url: String,
    /// Gateway upload endpoint (s3 put-object)
    pub ipfs_api_url: String,
    /// Base path used only to build the final retrieval link
    pub ipfs_gateway: String,
    pub abi_path: String,
    pub token_list_path: String,
}

impl Config {
    pub fn new() -> Result<Self, ListError> {
        dotenv::dotenv().ok();

        let api_key = env::var("QUICKNODE_API_KEY")
            .map_err(|_| ListError::Config("QUICKNODE_API_KEY is required".to_string()))?;

        Ok(Self {
            rpc_url: env::var("RPC_URL")
                .unwrap_or_else(|_| format!("https://api.quicknode.com/v1/eth/mainnet/{api_key}")),
            ipfs_api_url: env::var("IPFS_API_URL")
                .unwrap_or_else(|_| DEFAULT_IPFS_API_URL.to_string()),
            ipfs_gateway: env::var("IPFS_GATEWAY")
                .unwrap_or_else(|_| DEFAULT_IPFS_GATEWAY.to_string()),
            abi_path: env::var("ABI_PATH").unwrap_or_else(|_| "./abi/erc20.json".to_string()),
            token_list_path: env::var("TOKEN_LIST_PATH")
                .unwrap_or_else(|_| "./tokenlist.json".to_string()),
            api_key,
        })
    }

    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.api_key.trim().is_empty() {
            errors.push("QUICKNODE_API_KEY must not be empty".to_string());
        }
        if !self.rpc_url.starts_with("http") {
            errors.push(format!("RPC_URL is not an HTTP endpoint: {}", self.rpc_url));
        }
        if !self.ipfs_api_url.starts_with("http") {
            errors.push(format!(
                "IPFS_API_URL is not an HTTP endpoint: {}",
                self.ipfs_api_url
            ));
        }

        errors
    }
}
