//! Tour Rating Repository Port
//!
//! Abstract interface for Rating persistence operations.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, PageRequest, Rating, RatingPk};

/// Repository interface for Rating entities, keyed by (tour, customer)
#[async_trait]
pub trait TourRatingRepository: Send + Sync {
    /// Find all ratings of a tour
    async fn find_by_tour_id(&self, tour_id: i32) -> Result<Vec<Rating>, DomainError>;

    /// Find one page of a tour's ratings
    async fn find_by_tour_id_paged(
        &self,
        tour_id: i32,
        page: &PageRequest,
    ) -> Result<Vec<Rating>, DomainError>;

    /// Find a rating by its composite key
    async fn find_by_tour_id_and_customer_id(
        &self,
        tour_id: i32,
        customer_id: i32,
    ) -> Result<Option<Rating>, DomainError>;

    /// Insert a new rating. Fails with `Conflict` if the key is taken.
    async fn insert(&self, rating: &Rating) -> Result<Rating, DomainError>;

    /// Save a rating (insert or update)
    async fn save(&self, rating: &Rating) -> Result<Rating, DomainError>;

    /// Delete a rating by key
    async fn delete(&self, pk: RatingPk) -> Result<bool, DomainError>;
}
