//! Explore California API Routes
//!
//! - /tours/:tour_id/ratings - Rating CRUD and paged listing
//! - /tours/:tour_id/ratings/average - Average score of a tour
//! - /tours/:tour_id/ratings/:customer_id - Rating removal

pub mod swagger;
pub mod tour_rating;

use axum::http::StatusCode;
use explorecali::DomainError;

/// Error half of every handler result: status and plain-text body
pub type ApiError = (StatusCode, String);

/// Map a domain error to its fixed HTTP status, with the message as body
pub fn error_response(e: DomainError) -> ApiError {
    let status = match &e {
        DomainError::TourNotFound | DomainError::TourRatingNotFound => StatusCode::NOT_FOUND,
        DomainError::Validation(_) => StatusCode::BAD_REQUEST,
        DomainError::Conflict(_) => StatusCode::CONFLICT,
        DomainError::Repository(_) => {
            tracing::error!("Repository failure: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    (status, e.to_string())
}
