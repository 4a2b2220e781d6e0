//! Error handling for VidTik

use thiserror::Error;

/// User-facing message shown when a pasted link is not a TikTok URL
pub const INVALID_URL_MESSAGE: &str = "Por favor, insira um link válido do TikTok.";

/// Main error type for VidTik
#[derive(Debug, Error)]
pub enum VidtikError {
    #[error("{}", INVALID_URL_MESSAGE)]
    InvalidUrl(String),

    #[error("Storage error: {0}")]
    StorageError(#[from] sqlx::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Quality option not found: {0}")]
    QualityNotFound(String),

    #[error("History entry not found: {0}")]
    HistoryItemNotFound(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),
}

impl VidtikError {
    /// Whether this error should be shown to the user as-is
    pub fn is_user_facing(&self) -> bool {
        matches!(self, VidtikError::InvalidUrl(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_url_displays_localized_message() {
        let err = VidtikError::InvalidUrl("https://youtube.com/x".to_string());
        assert_eq!(err.to_string(), INVALID_URL_MESSAGE);
        assert!(err.is_user_facing());
    }

    #[test]
    fn internal_errors_are_not_user_facing() {
        let err = VidtikError::QualityNotFound("4k".to_string());
        assert_eq!(err.to_string(), "Quality option not found: 4k");
        assert!(!err.is_user_facing());
    }
}
