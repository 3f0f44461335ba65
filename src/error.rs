//! Error taxonomy for recipe searches.
//!
//! Every variant's `Display` text is the message shown to the user. None of
//! these errors escape the search controller; they are converted into state.

use reqwest::StatusCode;
use thiserror::Error;

/// Shown when a failure carries no message of its own.
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The query was empty after trimming. No request is made.
    #[error("Please enter a valid search term.")]
    EmptyQuery,

    /// The API rejected the credentials (HTTP 401).
    #[error("Unauthorized: Check your API ID and Key.")]
    Unauthorized,

    /// Any other non-2xx status.
    #[error("Failed with status {0}")]
    Status(u16),

    /// The request never produced a response.
    #[error("{0}")]
    Transport(String),

    /// The response body could not be parsed.
    #[error("{0}")]
    Decode(String),
}

impl SearchError {
    /// Maps a response status to an error, or `Ok` for 2xx.
    ///
    /// 401 always maps to [`SearchError::Unauthorized`], regardless of body.
    pub fn check_status(status: StatusCode) -> Result<(), SearchError> {
        if status.is_success() {
            return Ok(());
        }
        match status.as_u16() {
            401 => Err(SearchError::Unauthorized),
            code => Err(SearchError::Status(code)),
        }
    }

    /// Message for the error line, with the generic fallback for blank messages.
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            UNKNOWN_ERROR_MESSAGE.to_string()
        } else {
            message
        }
    }
}
