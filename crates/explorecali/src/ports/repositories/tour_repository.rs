//! Tour Repository Port
//!
//! Lookup of tours by ID. Ratings only need to know whether a tour exists.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, Tour};

/// Repository interface for Tour entities
#[async_trait]
pub trait TourRepository: Send + Sync {
    /// Find a Tour by ID
    async fn find_by_id(&self, id: i32) -> Result<Option<Tour>, DomainError>;
}
