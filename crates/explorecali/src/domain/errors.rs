//! Domain Errors
//!
//! Error types for domain operations.

use thiserror::Error;

/// Domain layer errors
///
/// The two not-found variants are the only errors produced by the rating
/// use cases themselves. Their messages are returned verbatim to HTTP clients.
#[derive(Debug, Error, PartialEq)]
pub enum DomainError {
    #[error("tourId is not found.")]
    TourNotFound,

    #[error("The TourRating is not found.")]
    TourRatingNotFound,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Repository error: {0}")]
    Repository(String),
}

impl DomainError {
    pub fn validation<T: Into<String>>(msg: T) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_messages() {
        assert_eq!(DomainError::TourNotFound.to_string(), "tourId is not found.");
        assert_eq!(
            DomainError::TourRatingNotFound.to_string(),
            "The TourRating is not found."
        );
    }
}
