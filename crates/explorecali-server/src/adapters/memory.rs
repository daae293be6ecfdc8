//! In-memory repository implementations used by tests
//!
//! Follows the PostgreSQL adapters on key uniqueness and NULL ordering.
//! Comments compare bytewise rather than by database collation.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use tokio::sync::RwLock;

use explorecali::{
    DomainError, PageRequest, Rating, RatingPk, RatingSortField, SortDirection, Tour,
    TourRatingRepository, TourRepository,
};

#[derive(Default)]
pub struct InMemoryTourRepository {
    tours: RwLock<HashMap<i32, Tour>>,
}

impl InMemoryTourRepository {
    pub fn with_tours<I: IntoIterator<Item = Tour>>(tours: I) -> Self {
        Self {
            tours: RwLock::new(tours.into_iter().map(|t| (t.id, t)).collect()),
        }
    }
}

#[async_trait]
impl TourRepository for InMemoryTourRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Tour>, DomainError> {
        Ok(self.tours.read().await.get(&id).cloned())
    }
}

#[derive(Default)]
pub struct InMemoryTourRatingRepository {
    ratings: RwLock<BTreeMap<RatingPk, Rating>>,
}

impl InMemoryTourRatingRepository {
    pub async fn count(&self) -> usize {
        self.ratings.read().await.len()
    }
}

/// NULLs compare greater than any value, as in PostgreSQL
fn cmp_nulls_last<T: Ord>(a: &Option<T>, b: &Option<T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
    }
}

fn compare(a: &Rating, b: &Rating, field: RatingSortField) -> Ordering {
    match field {
        RatingSortField::Score => cmp_nulls_last(&a.score, &b.score),
        RatingSortField::Comment => cmp_nulls_last(&a.comment, &b.comment),
        RatingSortField::CustomerId => a.customer_id().cmp(&b.customer_id()),
    }
}

#[async_trait]
impl TourRatingRepository for InMemoryTourRatingRepository {
    async fn find_by_tour_id(&self, tour_id: i32) -> Result<Vec<Rating>, DomainError> {
        Ok(self
            .ratings
            .read()
            .await
            .values()
            .filter(|r| r.tour_id() == tour_id)
            .cloned()
            .collect())
    }

    async fn find_by_tour_id_paged(
        &self,
        tour_id: i32,
        page: &PageRequest,
    ) -> Result<Vec<Rating>, DomainError> {
        let mut ratings = self.find_by_tour_id(tour_id).await?;

        if let Some(sort) = page.sort {
            // Stable sort keeps the customer order as tiebreak
            ratings.sort_by(|a, b| match sort.direction {
                SortDirection::Asc => compare(a, b, sort.field),
                SortDirection::Desc => compare(b, a, sort.field),
            });
        }

        let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
        let limit = usize::try_from(page.limit()).unwrap_or(usize::MAX);

        Ok(ratings.into_iter().skip(offset).take(limit).collect())
    }

    async fn find_by_tour_id_and_customer_id(
        &self,
        tour_id: i32,
        customer_id: i32,
    ) -> Result<Option<Rating>, DomainError> {
        Ok(self
            .ratings
            .read()
            .await
            .get(&RatingPk::new(tour_id, customer_id))
            .cloned())
    }

    async fn insert(&self, rating: &Rating) -> Result<Rating, DomainError> {
        let mut ratings = self.ratings.write().await;
        if ratings.contains_key(&rating.pk) {
            return Err(DomainError::Conflict(format!(
                "rating already exists for {}",
                rating.pk
            )));
        }
        ratings.insert(rating.pk, rating.clone());
        Ok(rating.clone())
    }

    async fn save(&self, rating: &Rating) -> Result<Rating, DomainError> {
        self.ratings.write().await.insert(rating.pk, rating.clone());
        Ok(rating.clone())
    }

    async fn delete(&self, pk: RatingPk) -> Result<bool, DomainError> {
        Ok(self.ratings.write().await.remove(&pk).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use explorecali::Sort;

    #[tokio::test]
    async fn test_comment_sort_is_bytewise_with_nulls_last() {
        let repo = InMemoryTourRatingRepository::default();
        for (customer, comment) in [(1, Some("apple")), (2, None), (3, Some("Zebra"))] {
            let rating = Rating::new(1, customer, 3, comment.map(String::from));
            repo.insert(&rating).await.unwrap();
        }

        let page = PageRequest::new(0, 10, Some(Sort::asc(RatingSortField::Comment)));
        let customers: Vec<i32> = repo
            .find_by_tour_id_paged(1, &page)
            .await
            .unwrap()
            .iter()
            .map(Rating::customer_id)
            .collect();

        assert_eq!(customers, vec![3, 1, 2]);
    }
}
