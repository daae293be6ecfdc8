//! Rating wire models

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use explorecali::{DomainError, PageDefaults, PageRequest, Rating};

/// Lowest accepted score
pub const MIN_SCORE: i32 = 0;

/// Highest accepted score
pub const MAX_SCORE: i32 = 5;

/// Longest accepted comment, in characters
pub const MAX_COMMENT_LENGTH: usize = 255;

/// Rating as seen by clients. The tour ID comes from the URL path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RatingDto {
    #[schema(minimum = 0, maximum = 5)]
    pub score: Option<i32>,
    #[schema(max_length = 255)]
    pub comment: Option<String>,
    pub customer_id: i32,
}

impl RatingDto {
    /// Check the bounds of the fields that are present
    pub fn validate(&self) -> Result<(), DomainError> {
        if let Some(score) = self.score {
            if !(MIN_SCORE..=MAX_SCORE).contains(&score) {
                return Err(DomainError::validation(format!(
                    "score must be between {} and {}",
                    MIN_SCORE, MAX_SCORE
                )));
            }
        }

        if let Some(comment) = &self.comment {
            if comment.chars().count() > MAX_COMMENT_LENGTH {
                return Err(DomainError::validation(format!(
                    "comment must be at most {} characters",
                    MAX_COMMENT_LENGTH
                )));
            }
        }

        Ok(())
    }

    /// Score of a new rating, which must be given
    pub fn required_score(&self) -> Result<i32, DomainError> {
        self.score
            .ok_or_else(|| DomainError::validation("score is required"))
    }
}

impl From<Rating> for RatingDto {
    fn from(rating: Rating) -> Self {
        Self {
            score: rating.score,
            comment: rating.comment,
            customer_id: rating.pk.customer_id,
        }
    }
}

/// Average score of a tour, `null` when it has no ratings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AverageResponse {
    #[serde(rename = "average:")]
    pub average: Option<f64>,
}

/// Query parameters for listing ratings
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// Zero-based page index (default: 0)
    pub page: Option<i64>,
    /// Page length (default: 20)
    pub size: Option<i64>,
    /// `property` or `property,direction`, e.g. `score,desc`
    pub sort: Option<String>,
}

impl PageQuery {
    pub fn to_page_request(&self, defaults: &PageDefaults) -> Result<PageRequest, DomainError> {
        PageRequest::from_params(self.page, self.size, self.sort.as_deref(), defaults)
    }
}
