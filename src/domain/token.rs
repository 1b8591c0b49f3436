//! Token list entities

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One token entry as claimed by the curated list. Entries are read
/// verbatim from the list file and never mutated; validation either keeps
/// or drops them. Fields beyond the checked ones pass through untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// A named collection of tokens. The descriptive fields around `tokens`
/// (group name, chain id, logo, ...) are opaque to the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenGroup {
    pub tokens: Vec<Token>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// The top-level document: an ordered sequence of groups.
pub type TokenList = Vec<TokenGroup>;

/// The metadata triple reported by a token contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnChainMetadata {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

impl Token {
    /// Strict equality against the reported values: strings compared
    /// byte-for-byte, decimals as integers.
    pub fn matches(&self, reported: &OnChainMetadata) -> bool {
        self.name == reported.name
            && self.symbol == reported.symbol
            && self.decimals == reported.decimals
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_token() -> Token {
        serde_json::from_value(serde_json::json!({
            "address": "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48",
            "name": "USD Coin",
            "symbol": "USDC",
            "decimals": 6,
            "logoURI": "https://example.com/usdc.png"
        }))
        .unwrap()
    }

    #[test]
    fn test_token_matches_exact_metadata() {
        let token = sample_token();
        let reported = OnChainMetadata {
            name: "USD Coin".to_string(),
            symbol: "USDC".to_string(),
            decimals: 6,
        };
        assert!(token.matches(&reported));
    }

    #[test]
    fn test_token_rejects_any_field_difference() {
        let token = sample_token();
        let mut reported = OnChainMetadata {
            name: "USD Coin".to_string(),
            symbol: "USDC".to_string(),
            decimals: 6,
        };

        reported.name = "USD coin".to_string();
        assert!(!token.matches(&reported));

        reported.name = "USD Coin".to_string();
        reported.symbol = "USDC.e".to_string();
        assert!(!token.matches(&reported));

        reported.symbol = "USDC".to_string();
        reported.decimals = 18;
        assert!(!token.matches(&reported));
    }

    #[test]
    fn test_unknown_fields_survive_round_trip() {
        let token = sample_token();
        assert_eq!(
            token.extra.get("logoURI").and_then(|v| v.as_str()),
            Some("https://example.com/usdc.png")
        );

        let serialized = serde_json::to_value(&token).unwrap();
        assert_eq!(serialized["logoURI"], "https://example.com/usdc.png");
        assert_eq!(serialized["decimals"], 6);
    }

    #[test]
    fn test_missing_address_deserializes_to_none() {
        let token: Token = serde_json::from_value(serde_json::json!({
            "name": "Mystery",
            "symbol": "MYST",
            "decimals": 18
        }))
        .unwrap();
        assert!(token.address.is_none());

        // And the absent field is not re-emitted on serialization.
        let serialized = serde_json::to_value(&token).unwrap();
        assert!(serialized.get("address").is_none());
    }

    #[test]
    fn test_group_passthrough_fields() {
        let group: TokenGroup = serde_json::from_value(serde_json::json!({
            "name": "Stablecoins",
            "chainId": 1,
            "tokens": []
        }))
        .unwrap();
        assert!(group.tokens.is_empty());
        assert_eq!(group.extra.get("chainId").and_then(|v| v.as_u64()), Some(1));
    }
}
