//! Book model for Bookshelf
//!
//! A book references its author through `author_id`. The reference is not
//! checked: a book may point at an author that does not exist.

use serde::{Deserialize, Serialize};

/// Book record held by the book store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Unique book identifier
    pub id: i32,

    /// Book title
    pub name: String,

    /// Identifier of the author who wrote the book
    pub author_id: i32,
}

/// Book creation input
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBook {
    pub name: String,
    pub author_id: i32,
}

impl CreateBook {
    pub fn new(name: impl Into<String>, author_id: i32) -> Self {
        Self {
            name: name.into(),
            author_id,
        }
    }
}
