//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - Tour: A tour package offered to customers
//! - Rating: One customer's review of one tour, keyed by RatingPk

mod rating;
mod tour;

pub use rating::*;
pub use tour::*;
