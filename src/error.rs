use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(String),
    #[error("names file not found: {}", .0.display())]
    NamesFileNotFound(PathBuf),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("auth error: {0}")]
    Auth(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("server error: {0}")]
    Server(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

impl AppError {
    /// Short tag used when an error is attributed to a single profile.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Config(_) => "config",
            AppError::NamesFileNotFound(_) => "file_not_found",
            AppError::Parse(_) => "parse",
            AppError::Auth(_) => "auth",
            AppError::Network(_) => "network",
            AppError::Server(_) => "server",
            AppError::NotFound(_) => "not_found",
            AppError::InvalidInput(_) => "invalid_input",
            AppError::Io(_) => "io",
            AppError::Json(_) => "json",
            AppError::Csv(_) => "csv",
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return AppError::Server(format!("unreadable response body: {err}"));
        }

        if err.is_timeout() {
            return AppError::Network(format!("request timed out: {err}"));
        }

        AppError::Network(err.to_string())
    }
}
