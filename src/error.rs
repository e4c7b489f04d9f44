//! Error types for the pak-players library and CLI

use thiserror::Error;


pub type Result<T> = std::result::Result<T, PakError>;

#[derive(Error, Debug)]
pub enum PakError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("API base URL not provided and {env_var} environment variable not set")]
    MissingBaseUrl { env_var: String },

    #[error("Invalid API base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Cache error: {message}")]
    Cache { message: String },
}
