use thiserror::Error;

pub use anyhow::Context;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
    #[error(transparent)]
    Join(#[from] tokio::task::JoinError),
    /// Non-2xx answer from the fixtures backend.
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("{0}")]
    Message(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AppError {
    pub fn message<T: Into<String>>(msg: T) -> Self {
        AppError::Message(msg.into())
    }

    pub fn status<T: Into<String>>(status: u16, message: T) -> Self {
        AppError::Status {
            status,
            message: message.into(),
        }
    }

    /// HTTP status carried by the error, if it came from a non-2xx response.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            AppError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
