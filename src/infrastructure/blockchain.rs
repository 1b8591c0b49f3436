use crate::domain::{error::ListError, token::OnChainMetadata};
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use ethers::{
    abi::Abi,
    contract::Contract,
    core::types::Address,
    providers::{Http, Provider},
};
use std::sync::Arc;

/// Read-only source of reported token metadata. The chain-backed client
/// implements this; tests substitute an in-memory fake.
#[async_trait]
pub trait TokenMetadataSource: Send + Sync {
    async fn token_metadata(&self, address: Address) -> Result<OnChainMetadata>;
}

/// Chain-data client: one HTTP provider plus the shared ERC-20 interface,
/// bound per token address at query time. Stateless across calls.
#[derive(Debug)]
pub struct ChainClient {
    provider: Arc<Provider<Http>>,
    abi: Abi,
}

impl ChainClient {
    pub fn new(rpc_url: &str, abi: Abi) -> Result<Self, ListError> {
        let provider = Provider::<Http>::try_from(rpc_url)
            .map_err(|e| ListError::Chain(format!("Failed to create HTTP provider: {e}")))?;

        Ok(Self {
            provider: Arc::new(provider),
            abi,
        })
    }
}

#[async_trait]
impl TokenMetadataSource for ChainClient {
    async fn token_metadata(&self, address: Address) -> Result<OnChainMetadata> {
        let contract = Contract::new(address, self.abi.clone(), Arc::clone(&self.provider));

        // The three reads are independent; issue them concurrently and
        // fail the whole triple on the first error.
        let (name, symbol, decimals) = tokio::try_join!(
            async {
                contract
                    .method::<_, String>("name", ())?
                    .call()
                    .await
                    .map_err(|e| anyhow!("name() call failed: {e}"))
            },
            async {
                contract
                    .method::<_, String>("symbol", ())?
                    .call()
                    .await
                    .map_err(|e| anyhow!("symbol() call failed: {e}"))
            },
            async {
                contract
                    .method::<_, u8>("decimals", ())?
                    .call()
                    .await
                    .map_err(|e| anyhow!("decimals() call failed: {e}"))
            },
        )?;

        Ok(OnChainMetadata {
            name,
            symbol,
            decimals,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_invalid_rpc_url() {
        let abi: Abi = serde_json::from_str("[]").unwrap();
        let err = ChainClient::new("not a url", abi).unwrap_err();
        assert!(matches!(err, ListError::Chain(_)));
    }
}
