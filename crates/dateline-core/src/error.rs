use thiserror::Error;

/// Errors surfaced by the relay pipeline.
///
/// Every variant produced during a dispatch maps to exactly one chat-visible
/// reply via [`DatelineError::user_message`]; nothing propagates far enough to
/// crash the process.
#[derive(Debug, Error)]
pub enum DatelineError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// Non-200 from the formatting API — carries the `detail` field from the
    /// JSON error body, or the raw body text when it isn't JSON.
    #[error("{0}")]
    Api(String),

    /// Non-200 while fetching a user-supplied image URL.
    #[error("Failed to download image: HTTP {status}")]
    Download { status: u16 },

    /// An outbound call exceeded its timeout bound.
    #[error("Request timed out. Please try again.")]
    Timeout,

    /// Any other transport-level failure.
    #[error("{0}")]
    Http(reqwest::Error),
}

impl From<reqwest::Error> for DatelineError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Http(err)
        }
    }
}

impl DatelineError {
    /// Text relayed back to the user when a dispatch fails.
    pub fn user_message(&self) -> String {
        format!("Error: {self}")
    }
}

pub type Result<T> = std::result::Result<T, DatelineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_user_message_is_fixed() {
        assert_eq!(
            DatelineError::Timeout.user_message(),
            "Error: Request timed out. Please try again."
        );
    }

    #[test]
    fn api_detail_is_relayed_verbatim() {
        assert_eq!(
            DatelineError::Api("bad input".into()).user_message(),
            "Error: bad input"
        );
    }

    #[test]
    fn download_message_names_the_status() {
        assert_eq!(
            DatelineError::Download { status: 404 }.user_message(),
            "Error: Failed to download image: HTTP 404"
        );
    }
}
