use thiserror::Error;

#[derive(Error, Debug)]
pub enum GlossaError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Model Load Error: {0}")]
    ModelLoad(String),

    #[error("Invalid Input: {0}")]
    InvalidInput(String),
}

pub type GlResult<T> = Result<T, GlossaError>;
