//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates between repositories.

mod tour_rating_service;

pub use tour_rating_service::TourRatingService;
