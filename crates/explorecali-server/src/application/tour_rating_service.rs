//! Tour Rating Application Service (Use Case)
//!
//! Orchestrates rating operations for a tour: verifies the tour or the
//! rating exists, then reads or writes the rating store.

use std::sync::Arc;

use explorecali::{
    average_score, DomainError, PageRequest, Rating, Tour, TourRatingRepository, TourRepository,
};

/// Application service for Rating operations
pub struct TourRatingService<R, T>
where
    R: TourRatingRepository + ?Sized,
    T: TourRepository + ?Sized,
{
    ratings: Arc<R>,
    tours: Arc<T>,
}

impl<R, T> TourRatingService<R, T>
where
    R: TourRatingRepository + ?Sized,
    T: TourRepository + ?Sized,
{
    pub fn new(ratings: Arc<R>, tours: Arc<T>) -> Self {
        Self { ratings, tours }
    }

    /// Create a rating for an existing tour
    pub async fn create(
        &self,
        tour_id: i32,
        customer_id: i32,
        score: i32,
        comment: Option<String>,
    ) -> Result<Rating, DomainError> {
        let tour = self.verify_tour(tour_id).await?;

        let rating = Rating::new(tour.id, customer_id, score, comment);
        let saved = self.ratings.insert(&rating).await?;

        tracing::info!("Created rating: {} (score {})", saved.pk, score);

        Ok(saved)
    }

    /// Get one page of a tour's ratings
    pub async fn list_by_tour(
        &self,
        tour_id: i32,
        page: &PageRequest,
    ) -> Result<Vec<Rating>, DomainError> {
        self.verify_tour(tour_id).await?;
        self.ratings.find_by_tour_id_paged(tour_id, page).await
    }

    /// Mean score of a tour's ratings, `None` when there is nothing to average.
    ///
    /// The tour itself is not verified; an unknown tour has no ratings.
    pub async fn average_score(&self, tour_id: i32) -> Result<Option<f64>, DomainError> {
        let ratings = self.ratings.find_by_tour_id(tour_id).await?;
        Ok(average_score(&ratings))
    }

    /// Overwrite the score and comment that were supplied, keep the rest (PUT)
    pub async fn replace_full(
        &self,
        tour_id: i32,
        customer_id: i32,
        score: Option<i32>,
        comment: Option<String>,
    ) -> Result<Rating, DomainError> {
        let mut rating = self.verify_rating(tour_id, customer_id).await?;
        rating.overwrite_present(score, comment);

        let saved = self.ratings.save(&rating).await?;
        tracing::info!("Updated rating: {}", saved.pk);

        Ok(saved)
    }

    /// Overwrite score and comment unconditionally, absent values included (PATCH)
    pub async fn update_partial(
        &self,
        tour_id: i32,
        customer_id: i32,
        score: Option<i32>,
        comment: Option<String>,
    ) -> Result<Rating, DomainError> {
        let mut rating = self.verify_rating(tour_id, customer_id).await?;
        rating.overwrite_all(score, comment);

        let saved = self.ratings.save(&rating).await?;
        tracing::info!("Patched rating: {}", saved.pk);

        Ok(saved)
    }

    /// Delete a rating
    pub async fn delete(&self, tour_id: i32, customer_id: i32) -> Result<(), DomainError> {
        let rating = self.verify_rating(tour_id, customer_id).await?;

        if !self.ratings.delete(rating.pk).await? {
            // Removed by a concurrent request between lookup and delete
            return Err(DomainError::TourRatingNotFound);
        }

        tracing::info!("Deleted rating: {}", rating.pk);
        Ok(())
    }

    async fn verify_tour(&self, tour_id: i32) -> Result<Tour, DomainError> {
        self.tours.find_by_id(tour_id).await?.ok_or_else(|| {
            tracing::debug!("Tour {} not found", tour_id);
            DomainError::TourNotFound
        })
    }

    async fn verify_rating(&self, tour_id: i32, customer_id: i32) -> Result<Rating, DomainError> {
        self.ratings
            .find_by_tour_id_and_customer_id(tour_id, customer_id)
            .await?
            .ok_or_else(|| {
                tracing::debug!(
                    "Rating not found: tour {} / customer {}",
                    tour_id,
                    customer_id
                );
                DomainError::TourRatingNotFound
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryTourRatingRepository, InMemoryTourRepository};
    use explorecali::{RatingSortField, Sort};

    const TOUR: i32 = 1;
    const MISSING_TOUR: i32 = 99;

    fn service() -> (
        TourRatingService<InMemoryTourRatingRepository, InMemoryTourRepository>,
        Arc<InMemoryTourRatingRepository>,
    ) {
        let ratings = Arc::new(InMemoryTourRatingRepository::default());
        let tours = Arc::new(InMemoryTourRepository::with_tours([
            Tour::new(TOUR, "Big Sur Retreat"),
            Tour::new(2, "Channel Islands Excursion"),
        ]));
        (TourRatingService::new(ratings.clone(), tours), ratings)
    }

    #[tokio::test]
    async fn test_unknown_tour_is_rejected() {
        let (service, ratings) = service();

        let created = service.create(MISSING_TOUR, 1, 5, None).await;
        assert_eq!(created, Err(DomainError::TourNotFound));
        assert_eq!(ratings.count().await, 0);

        let listed = service
            .list_by_tour(MISSING_TOUR, &PageRequest::default())
            .await;
        assert_eq!(listed, Err(DomainError::TourNotFound));
    }

    #[tokio::test]
    async fn test_average_does_not_verify_tour() {
        let (service, _) = service();
        assert_eq!(service.average_score(MISSING_TOUR).await, Ok(None));
    }

    #[tokio::test]
    async fn test_create_then_list_contains_rating_once() {
        let (service, _) = service();
        service
            .create(TOUR, 7, 4, Some("lovely".into()))
            .await
            .unwrap();
        service.create(2, 7, 1, None).await.unwrap();

        let page = service
            .list_by_tour(TOUR, &PageRequest::default())
            .await
            .unwrap();

        assert_eq!(page.len(), 1);
        assert_eq!(page[0], Rating::new(TOUR, 7, 4, Some("lovely".into())));
    }

    #[tokio::test]
    async fn test_duplicate_create_is_conflict() {
        let (service, ratings) = service();
        service.create(TOUR, 7, 4, None).await.unwrap();

        let second = service.create(TOUR, 7, 2, None).await;
        assert!(matches!(second, Err(DomainError::Conflict(_))));
        assert_eq!(ratings.count().await, 1);

        let stored = service.list_by_tour(TOUR, &PageRequest::default()).await;
        assert_eq!(stored.unwrap()[0].score, Some(4));
    }

    #[tokio::test]
    async fn test_list_is_paged_and_sorted() {
        let (service, _) = service();
        for (customer, score) in [(1, 3), (2, 5), (3, 1), (4, 4), (5, 2)] {
            service.create(TOUR, customer, score, None).await.unwrap();
        }

        let page = PageRequest::new(1, 2, Some(Sort::desc(RatingSortField::Score)));
        let scores: Vec<_> = service
            .list_by_tour(TOUR, &page)
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.score)
            .collect();
        assert_eq!(scores, vec![Some(3), Some(2)]);

        let beyond = PageRequest::new(3, 2, None);
        assert!(service.list_by_tour(TOUR, &beyond).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_average_score() {
        let (service, _) = service();
        assert_eq!(service.average_score(TOUR).await, Ok(None));

        for (customer, score) in [(1, 3), (2, 4), (3, 5)] {
            service.create(TOUR, customer, score, None).await.unwrap();
        }
        assert_eq!(service.average_score(TOUR).await, Ok(Some(4.0)));
    }

    #[tokio::test]
    async fn test_replace_full_keeps_absent_fields() {
        let (service, _) = service();
        service
            .create(TOUR, 7, 5, Some("great".into()))
            .await
            .unwrap();

        let updated = service
            .replace_full(TOUR, 7, None, Some("x".into()))
            .await
            .unwrap();

        assert_eq!(updated.score, Some(5));
        assert_eq!(updated.comment.as_deref(), Some("x"));
    }

    #[tokio::test]
    async fn test_update_partial_clears_absent_fields() {
        let (service, _) = service();
        service
            .create(TOUR, 7, 5, Some("great".into()))
            .await
            .unwrap();

        let updated = service
            .update_partial(TOUR, 7, None, Some("x".into()))
            .await
            .unwrap();

        assert_eq!(updated.score, None);
        assert_eq!(updated.comment.as_deref(), Some("x"));

        // Cleared scores drop out of the average
        assert_eq!(service.average_score(TOUR).await, Ok(None));
    }

    #[tokio::test]
    async fn test_updates_require_existing_rating() {
        let (service, _) = service();

        let put = service.replace_full(TOUR, 7, Some(3), None).await;
        assert_eq!(put, Err(DomainError::TourRatingNotFound));

        let patch = service.update_partial(TOUR, 7, Some(3), None).await;
        assert_eq!(patch, Err(DomainError::TourRatingNotFound));
    }

    #[tokio::test]
    async fn test_delete() {
        let (service, ratings) = service();

        assert_eq!(
            service.delete(TOUR, 7).await,
            Err(DomainError::TourRatingNotFound)
        );

        service.create(TOUR, 7, 5, None).await.unwrap();
        assert_eq!(service.delete(TOUR, 7).await, Ok(()));
        assert_eq!(ratings.count().await, 0);

        assert_eq!(
            service.delete(TOUR, 7).await,
            Err(DomainError::TourRatingNotFound)
        );
        assert_eq!(
            service.replace_full(TOUR, 7, Some(1), None).await,
            Err(DomainError::TourRatingNotFound)
        );
    }
}
