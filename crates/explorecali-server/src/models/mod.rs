//! Explore California API Models
//!
//! - RatingDto: Wire shape of a tour rating
//! - AverageResponse: Average score of a tour
//! - PageQuery: Pagination query parameters

mod rating;

pub use rating::*;
