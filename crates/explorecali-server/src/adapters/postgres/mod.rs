//! PostgreSQL Repository Implementations

mod tour_rating_repository;
mod tour_repository;

pub use tour_rating_repository::PgTourRatingRepository;
pub use tour_repository::PgTourRepository;
