use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataError {
    #[error("dataset parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("dataset contains no records")]
    Empty,

    #[error("record {index} has a non-finite `{field}`")]
    NonFinite { index: usize, field: &'static str },
}

pub type Result<T> = std::result::Result<T, DataError>;
