use std::io;
use thiserror::Error;

/// Failures of a single weather lookup
#[derive(Error, Debug)]
pub enum LookupError {
    /// The request never reached the service, or the body could not be received
    #[error("Weather service unreachable: {0}")]
    Transport(#[source] reqwest::Error),

    /// The service answered with a non-success status
    #[error("Weather service returned HTTP {status_code}")]
    Service { status_code: u16 },

    /// A success status arrived but the payload did not match the expected shape
    #[error("Malformed weather response: {0}")]
    MalformedResponse(String),
}

impl LookupError {
    /// HTTP status reported by the service, if it answered at all.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            LookupError::Service { status_code } => Some(*status_code),
            _ => None,
        }
    }
}

// the request URL carries the API key, so it is dropped before the error travels anywhere
impl From<reqwest::Error> for LookupError {
    fn from(e: reqwest::Error) -> Self {
        LookupError::Transport(e.without_url())
    }
}

/// Custom error types for the weather-lookup application
#[derive(Error, Debug)]
pub enum AppError {
    /// Error when environment variable is not set
    #[error("Environment variable not set: {0}")]
    EnvVarNotSet(String),

    /// Error when a configuration value is present but unusable
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Wrapper for I/O errors
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_error_carries_status() {
        let err = LookupError::Service { status_code: 404 };
        assert_eq!(err.status_code(), Some(404));
        assert_eq!(err.to_string(), "Weather service returned HTTP 404");
    }

    #[test]
    fn malformed_has_no_status() {
        let err = LookupError::MalformedResponse("empty weather list".to_string());
        assert_eq!(err.status_code(), None);
        assert!(err.to_string().contains("empty weather list"));
    }

    #[test]
    fn io_error_converts() {
        let err: AppError = io::Error::new(io::ErrorKind::BrokenPipe, "stdout closed").into();
        assert!(err.to_string().contains("stdout closed"));
    }
}
