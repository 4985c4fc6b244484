//! Failure modes surfaced by the endpoint debugger.

use thiserror::Error;

/// What went wrong with a debugger request.
///
/// Transport failures never produced an HTTP response and are reported with
/// the sentinel status `0`. A body that fails JSON parsing is a separate
/// variant so the two do not blur together in the response panel.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("request failed: {message}")]
    Transport { message: String },

    #[error("response body is not valid JSON: {message}")]
    InvalidBody { message: String },
}

impl RequestError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    pub fn invalid_body(message: impl Into<String>) -> Self {
        Self::InvalidBody {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = RequestError::transport("connection refused");
        assert_eq!(err.to_string(), "request failed: connection refused");

        let err = RequestError::invalid_body("expected value at line 1 column 1");
        assert!(err.to_string().contains("not valid JSON"));
    }
}
