use thiserror::Error;

use crate::modules::chat::{ApplicationError, QueryError};
use crate::modules::config::ConfigError;
use crate::modules::speech::SpeechError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("Remote service error: {0}")]
    QueryError(#[from] QueryError),

    #[error("Speech error: {0}")]
    SpeechError(#[from] SpeechError),

    #[error(transparent)]
    ApplicationError(#[from] ApplicationError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl serde::Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion_keeps_message() {
        let error: AppError = QueryError::Status {
            code: 500,
            body: "boom".to_string(),
        }
        .into();
        assert_eq!(error.to_string(), "Remote service error: API error: 500 - boom");

        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("500"));
    }

    #[test]
    fn test_application_error_is_transparent() {
        let error: AppError = ApplicationError::ValidationError("empty".to_string()).into();
        assert_eq!(error.to_string(), "Validation error: empty");
    }
}
