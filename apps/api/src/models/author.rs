//! Author model for Bookshelf

use serde::{Deserialize, Serialize};

/// Author record held by the author store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Unique author identifier
    pub id: i32,

    /// Author name
    pub name: String,
}

/// Author creation input
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAuthor {
    pub name: String,
}

impl CreateAuthor {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
