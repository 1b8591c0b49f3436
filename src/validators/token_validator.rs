use crate::domain::token::{Token, TokenGroup, TokenList};
use crate::infrastructure::blockchain::TokenMetadataSource;
use ethers::core::types::Address;
use futures::future::join_all;

/// Outcome of one token check. Only `Verified` keeps the token; every
/// other outcome fails closed and excludes it from the published list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Verified,
    /// Triple fetched, at least one field differs from the claim
    Mismatch,
    /// Entry has no contract address; no remote call attempted
    MissingAddress,
    /// Address present but not parseable; no remote call attempted
    InvalidAddress,
    /// One of the three reads failed (network, revert, missing contract)
    Unreachable(String),
}

/// Check one token's claimed metadata against what its contract reports.
/// Never raises; remote failures become `Unreachable` and a log line.
pub async fn check_token<S: TokenMetadataSource>(token: &Token, source: &S) -> Verdict {
    let raw_address = match token.address.as_deref() {
        Some(a) => a,
        None => {
            log::warn!("Token {} has no contract address, dropping it", token.symbol);
            return Verdict::MissingAddress;
        }
    };

    let address: Address = match raw_address.parse() {
        Ok(a) => a,
        Err(e) => {
            log::warn!(
                "Token {} has an invalid contract address {raw_address}: {e}",
                token.symbol
            );
            return Verdict::InvalidAddress;
        }
    };

    match source.token_metadata(address).await {
        Ok(reported) => {
            if token.matches(&reported) {
                Verdict::Verified
            } else {
                log::warn!(
                    "Token {} metadata mismatch: list has ({}, {}, {}), chain reports ({}, {}, {})",
                    token.symbol,
                    token.name,
                    token.symbol,
                    token.decimals,
                    reported.name,
                    reported.symbol,
                    reported.decimals
                );
                Verdict::Mismatch
            }
        }
        Err(e) => {
            log::error!("Error validating token {}: {e}", token.symbol);
            Verdict::Unreachable(e.to_string())
        }
    }
}

/// Keep the subsequence of tokens that verified, in original order.
pub async fn validate_group<S: TokenMetadataSource>(group: TokenGroup, source: &S) -> TokenGroup {
    let TokenGroup { tokens, extra } = group;

    let verdicts = join_all(tokens.iter().map(|token| check_token(token, source))).await;

    let tokens = tokens
        .into_iter()
        .zip(verdicts)
        .filter(|(_, verdict)| *verdict == Verdict::Verified)
        .map(|(token, _)| token)
        .collect();

    TokenGroup { tokens, extra }
}

/// Validate every group concurrently, then drop the groups left with no
/// surviving tokens, preserving group order.
pub async fn validate<S: TokenMetadataSource>(list: TokenList, source: &S) -> TokenList {
    let groups = join_all(list.into_iter().map(|group| validate_group(group, source))).await;

    groups
        .into_iter()
        .filter(|group| !group.tokens.is_empty())
        .collect()
}
