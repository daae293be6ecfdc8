//! Sort - Ordering of a rating page
//!
//! Parsed from the `field,direction` form used by the `sort` query parameter.

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Sort direction
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortDirection::Asc => write!(f, "asc"),
            SortDirection::Desc => write!(f, "desc"),
        }
    }
}

impl std::str::FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(format!("Unknown sort direction: {}", s)),
        }
    }
}

/// Rating attributes a page can be sorted by
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum RatingSortField {
    Score,
    Comment,
    CustomerId,
}

impl RatingSortField {
    /// Column name in the `tour_ratings` table
    pub fn column(&self) -> &'static str {
        match self {
            RatingSortField::Score => "score",
            RatingSortField::Comment => "comment",
            RatingSortField::CustomerId => "customer_id",
        }
    }
}

impl std::fmt::Display for RatingSortField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RatingSortField::Score => write!(f, "score"),
            RatingSortField::Comment => write!(f, "comment"),
            RatingSortField::CustomerId => write!(f, "customerId"),
        }
    }
}

impl std::str::FromStr for RatingSortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "score" => Ok(RatingSortField::Score),
            "comment" => Ok(RatingSortField::Comment),
            "customerId" | "customer_id" => Ok(RatingSortField::CustomerId),
            _ => Err(format!("Unknown sort property: {}", s)),
        }
    }
}

/// A single sort order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Sort {
    pub field: RatingSortField,
    pub direction: SortDirection,
}

impl Sort {
    pub fn new(field: RatingSortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    pub fn asc(field: RatingSortField) -> Self {
        Self::new(field, SortDirection::Asc)
    }

    pub fn desc(field: RatingSortField) -> Self {
        Self::new(field, SortDirection::Desc)
    }

    /// Parse `field` or `field,direction`
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let mut parts = raw.split(',').map(str::trim);

        let field = parts
            .next()
            .filter(|f| !f.is_empty())
            .ok_or_else(|| DomainError::validation("sort property is empty"))?
            .parse::<RatingSortField>()
            .map_err(DomainError::Validation)?;

        let direction = match parts.next() {
            Some(d) if !d.is_empty() => d
                .parse::<SortDirection>()
                .map_err(DomainError::Validation)?,
            _ => SortDirection::default(),
        };

        if parts.next().is_some() {
            return Err(DomainError::validation(format!(
                "sort must be 'property' or 'property,direction': {}",
                raw
            )));
        }

        Ok(Self { field, direction })
    }
}

impl std::fmt::Display for Sort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.field, self.direction)
    }
}
