pub mod generation;
pub mod reply;
pub mod server;
pub mod ui;

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum RedraftError {
    #[error("Endpoint error: {0}")]
    EndpointError(String),

    #[error("Decode error: {0}")]
    DecodeError(String),

    #[error("Upstream error: {0}")]
    UpstreamError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Channel error: {0}")]
    ChannelError(String),
}

impl From<reqwest::Error> for RedraftError {
    fn from(e: reqwest::Error) -> Self {
        RedraftError::EndpointError(e.to_string())
    }
}

impl RedraftError {
    /// Get a user-friendly description
    pub fn user_message(&self) -> String {
        match self {
            RedraftError::EndpointError(_) | RedraftError::DecodeError(_) => {
                "❌ Failed to generate reply. Please try again.".to_string()
            }
            RedraftError::UpstreamError(_) => {
                "The generation service is unavailable. Please try again.".to_string()
            }
            RedraftError::ConfigError(_) => {
                "Configuration error. Please check settings.".to_string()
            }
            RedraftError::ChannelError(_) => {
                "Internal communication error. Please restart the application.".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, RedraftError>;
