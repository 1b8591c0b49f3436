use crate::domain::{error::ListError, token::TokenList};
use ethers::abi::Abi;
use serde_json::Value;
use std::fs;

/// Read a file and parse it as JSON.
pub fn read_json(path: &str) -> Result<Value, ListError> {
    let data =
        fs::read_to_string(path).map_err(|e| ListError::Io(format!("Failed to read {path}: {e}")))?;
    serde_json::from_str(&data)
        .map_err(|e| ListError::Parse(format!("Malformed JSON in {path}: {e}")))
}

/// Load the contract interface from a compiler artifact. The artifact
/// wraps the interface itself in an `abi` field.
pub fn load_abi(path: &str) -> Result<Abi, ListError> {
    let artifact = read_json(path)?;
    let abi_value = artifact
        .get("abi")
        .cloned()
        .ok_or_else(|| ListError::Parse(format!("No `abi` field in {path}")))?;
    serde_json::from_value(abi_value)
        .map_err(|e| ListError::Parse(format!("Invalid ABI in {path}: {e}")))
}

/// Load the nested group/token document.
pub fn load_token_list(path: &str) -> Result<TokenList, ListError> {
    let value = read_json(path)?;
    serde_json::from_value(value)
        .map_err(|e| ListError::Parse(format!("Invalid token list in {path}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(name: &str, contents: &str) -> String {
        let path = std::env::temp_dir().join(format!("{}_{name}", uuid::Uuid::new_v4().simple()));
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_read_json_missing_file_is_io_error() {
        let err = read_json("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ListError::Io(_)));
    }

    #[test]
    fn test_read_json_malformed_is_parse_error() {
        let path = write_temp("bad.json", "{ not json");
        let err = read_json(&path).unwrap_err();
        assert!(matches!(err, ListError::Parse(_)));
        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_load_abi_unwraps_nested_field() {
        let path = write_temp(
            "erc20.json",
            r#"{
                "contractName": "ERC20",
                "abi": [
                    {
                        "constant": true,
                        "inputs": [],
                        "name": "symbol",
                        "outputs": [{"name": "", "type": "string"}],
                        "stateMutability": "view",
                        "type": "function"
                    }
                ]
            }"#,
        );
        let abi = load_abi(&path).unwrap();
        assert!(abi.function("symbol").is_ok());
        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_load_abi_without_abi_field_is_parse_error() {
        let path = write_temp("noabi.json", r#"{"contractName": "ERC20"}"#);
        let err = load_abi(&path).unwrap_err();
        assert!(matches!(err, ListError::Parse(_)));
        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_load_token_list() {
        let path = write_temp(
            "list.json",
            r#"[
                {
                    "name": "Majors",
                    "tokens": [
                        {
                            "address": "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2",
                            "name": "Wrapped Ether",
                            "symbol": "WETH",
                            "decimals": 18
                        }
                    ]
                }
            ]"#,
        );
        let list = load_token_list(&path).unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].tokens[0].symbol, "WETH");
        fs::remove_file(&path).ok();
    }
}
