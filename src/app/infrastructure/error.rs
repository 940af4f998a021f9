use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Failed to load syntax module '{module}' (status {status})")]
    ModeLoad { module: String, status: i32 },

    #[error("Syntax error: {0}")]
    Syntax(String),

    #[error("Settings error: {0}")]
    Settings(String),
}

impl From<minreq::Error> for AppError {
    fn from(err: minreq::Error) -> Self {
        AppError::Http(err.to_string())
    }
}

/// Convenience type alias for Results with AppError
pub type Result<T> = std::result::Result<T, AppError>;
