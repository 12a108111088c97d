use thiserror::Error;

#[derive(Error, Debug)]
pub enum DiscForgeError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    /// Malformed disc data (flight numbers out of range, duplicate ids).
    #[error("Disc Validation Error: {0}")]
    Validation(String),

    /// Malformed shot inputs (distance, wind, sample count, hole layout).
    #[error("Invalid Input: {0}")]
    InvalidInput(String),

    #[error("Unknown Disc: '{0}'")]
    UnknownDisc(String),
}

pub type DfResult<T> = Result<T, DiscForgeError>;
