//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod page_request;
mod sort;

pub use page_request::*;
pub use sort::*;
