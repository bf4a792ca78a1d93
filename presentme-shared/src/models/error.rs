use thiserror::Error;

/// Errors surfaced by the admin API client.
///
/// A 401 is its own variant so callers can redirect to sign-in without
/// string-matching status codes; everything else folds into the server,
/// transport, or schema buckets.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The session cookie is missing or expired.
    #[error("not authenticated")]
    Unauthorized,

    /// The server answered with a non-success status and a message.
    #[error("{message}")]
    Server {
        /// HTTP status code of the response.
        status: u16,
        /// Message extracted from the response body, or a fallback.
        message: String,
    },

    /// The request never produced a response.
    #[error("request failed: {0}")]
    Network(String),

    /// The response body did not match the expected schema.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Whether this error should send the admin back to the sign-in page.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_error_displays_its_message() {
        let err = ApiError::Server {
            status: 400,
            message: "Invalid credentials. Please try again.".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid credentials. Please try again.");
    }

    #[test]
    fn only_unauthorized_redirects() {
        assert!(ApiError::Unauthorized.is_unauthorized());
        assert!(!ApiError::Network("offline".to_string()).is_unauthorized());
        assert!(
            !ApiError::Server {
                status: 500,
                message: "boom".to_string()
            }
            .is_unauthorized()
        );
    }
}
