use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// Non-success HTTP status from the workouts endpoint.
    #[error("Transport error: HTTP status {0}")]
    Transport(u16),

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
