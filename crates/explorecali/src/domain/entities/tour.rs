//! Tour - A tour package offered to customers

use serde::{Deserialize, Serialize};

/// Tour entity. Ratings only rely on its existence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tour {
    pub id: i32,
    pub title: String,
}

impl Tour {
    pub fn new(id: i32, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }
}
