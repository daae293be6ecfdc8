//! Rating - One customer's review of one tour
//!
//! Pure domain entity without infrastructure dependencies.

use serde::{Deserialize, Serialize};

/// Composite key of a rating: (tour, customer)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RatingPk {
    pub tour_id: i32,
    pub customer_id: i32,
}

impl RatingPk {
    pub fn new(tour_id: i32, customer_id: i32) -> Self {
        Self {
            tour_id,
            customer_id,
        }
    }
}

impl std::fmt::Display for RatingPk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "tour {} / customer {}", self.tour_id, self.customer_id)
    }
}

/// Rating - A customer's score and comment for a tour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub pk: RatingPk,
    /// Required on creation; only a partial update can clear it
    pub score: Option<i32>,
    pub comment: Option<String>,
}

impl Rating {
    /// Create a new rating for a tour
    pub fn new(tour_id: i32, customer_id: i32, score: i32, comment: Option<String>) -> Self {
        Self {
            pk: RatingPk::new(tour_id, customer_id),
            score: Some(score),
            comment,
        }
    }

    pub fn tour_id(&self) -> i32 {
        self.pk.tour_id
    }

    pub fn customer_id(&self) -> i32 {
        self.pk.customer_id
    }

    /// Overwrite only the fields that carry a value (PUT semantics)
    pub fn overwrite_present(&mut self, score: Option<i32>, comment: Option<String>) {
        if let Some(score) = score {
            self.score = Some(score);
        }
        if let Some(comment) = comment {
            self.comment = Some(comment);
        }
    }

    /// Overwrite both fields, clearing them when the incoming value is absent
    /// (PATCH semantics)
    pub fn overwrite_all(&mut self, score: Option<i32>, comment: Option<String>) {
        self.score = score;
        self.comment = comment;
    }
}

/// Arithmetic mean of the scores of `ratings`.
///
/// Ratings without a score are skipped. Returns `None` when nothing is left
/// to average; an empty set has no mean, it is never reported as zero.
pub fn average_score<'a, I>(ratings: I) -> Option<f64>
where
    I: IntoIterator<Item = &'a Rating>,
{
    let (sum, count) = ratings
        .into_iter()
        .filter_map(|r| r.score)
        .fold((0i64, 0u64), |(sum, count), score| {
            (sum + i64::from(score), count + 1)
        });

    if count == 0 {
        None
    } else {
        Some(sum as f64 / count as f64)
    }
}
