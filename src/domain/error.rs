use std::fmt;

/// Main error type for the token list pipeline.
///
/// Per-token check failures are not represented here: they are converted
/// into verdicts inside the validator and never abort the run. Everything
/// below is fatal and handled once, in `main`.
#[derive(Debug, Clone)]
pub enum ListError {
    /// Input file missing or unreadable
    Io(String),

    /// Malformed JSON or malformed ABI
    Parse(String),

    /// Missing or invalid environment configuration
    Config(String),

    /// Chain client could not be constructed
    Chain(String),

    /// IPFS gateway rejected the upload or was unreachable
    Publish(String),
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListError::Io(e) => write!(f, "File error: {e}"),
            ListError::Parse(e) => write!(f, "Parse error: {e}"),
            ListError::Config(e) => write!(f, "Configuration error: {e}"),
            ListError::Chain(e) => write!(f, "Blockchain error: {e}"),
            ListError::Publish(e) => write!(f, "Publish error: {e}"),
        }
    }
}

impl std::error::Error for ListError {}

impl From<std::io::Error> for ListError {
    fn from(err: std::io::Error) -> Self {
        ListError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ListError {
    fn from(err: serde_json::Error) -> Self {
        ListError::Parse(err.to_string())
    }
}

impl From<reqwest::Error> for ListError {
    fn from(err: reqwest::Error) -> Self {
        ListError::Publish(err.to_string())
    }
}
