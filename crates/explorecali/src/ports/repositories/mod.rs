//! Repository Ports
//!
//! Abstract interfaces for data persistence operations.

mod tour_rating_repository;
mod tour_repository;

pub use tour_rating_repository::*;
pub use tour_repository::*;
