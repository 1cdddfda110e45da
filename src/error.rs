//! Unified error type for imgstudio.

use thiserror::Error;

/// Errors that can occur in the studio.
#[derive(Debug, Error)]
pub enum StudioError {
    /// The API returned an error response.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message from the API.
        message: String,
    },

    /// The call succeeded but carried no inline image payload.
    #[error("No image in response: {0}")]
    NoImage(String),

    /// A network error occurred.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("Config error: {0}")]
    Config(String),

    /// Invalid argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The credit balance cannot cover the cost of a submission.
    #[error("Insufficient credits: balance is {balance}, cost is {cost}. Please purchase more.")]
    InsufficientCredits {
        /// Current balance.
        balance: u32,
        /// Cost of one image.
        cost: u32,
    },

    /// Image format conversion error.
    #[error("Image conversion error: {0}")]
    ImageConversion(String),

    /// No API key configured.
    #[error("No API key for Gemini. Set {env_var} or add it to config file.")]
    MissingApiKey {
        /// The environment variable name.
        env_var: String,
    },
}
