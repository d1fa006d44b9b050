use thiserror::Error;

#[derive(Error, Debug)]
pub enum VacancyError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // Network errors
    #[error("HTTP request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Authorization rejected by {platform}: {message}")]
    Auth { platform: String, message: String },

    // Parsing errors
    #[error("Unexpected response shape: {0}")]
    DataShape(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // User input errors
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type VacancyResult<T> = Result<T, VacancyError>;
