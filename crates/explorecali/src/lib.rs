//! Explore California Domain Library
//!
//! Core domain types and interfaces for customer ratings on tours.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (Tour, Rating, RatingPk)
//!   - `value_objects/`: Immutable value types (PageRequest, Sort)
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Data access interfaces
//!
//! # Usage
//!
//! ```rust,ignore
//! use explorecali::domain::{Rating, RatingPk};
//! use explorecali::ports::{TourRatingRepository, TourRepository};
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    average_score, DomainError, PageDefaults, PageRequest, Rating, RatingPk, RatingSortField,
    Sort, SortDirection, Tour,
};
pub use ports::{TourRatingRepository, TourRepository};
