//! Seed data for the in-memory stores
//!
//! The stores start either from the built-in library below or from a JSON
//! document of the same shape:
//!
//! ```json
//! {
//!   "authors": [{ "id": 1, "name": "J.K.Rowling" }],
//!   "books": [{ "id": 1, "name": "Harry Potter", "authorId": 1 }]
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ApiResult;
use crate::models::{Author, Book};

/// Initial contents of both stores
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibrarySeed {
    #[serde(default)]
    pub authors: Vec<Author>,
    #[serde(default)]
    pub books: Vec<Book>,
}

impl LibrarySeed {
    /// The library every fresh process starts with
    pub fn builtin() -> Self {
        let authors = [(1, "J.K.Rowling"), (2, "J.R.R.Tolkien")]
            .into_iter()
            .map(|(id, name)| Author {
                id,
                name: name.to_string(),
            })
            .collect();

        let books = [
            (1, "Harry Potter", 1),
            (2, "Harry Potter and the Chamber of Secrets", 1),
            (3, "The Fellowship of the Ring", 2),
            (4, "The Two Towers", 2),
        ]
        .into_iter()
        .map(|(id, name, author_id)| Book {
            id,
            name: name.to_string(),
            author_id,
        })
        .collect();

        Self { authors, books }
    }

    /// Parse a seed document from JSON text
    pub fn from_json(json: &str) -> ApiResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a seed document from disk
    pub fn from_path(path: impl AsRef<Path>) -> ApiResult<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use assert_matches::assert_matches;
    use std::io::Write;

    #[test]
    fn test_builtin_seed_contents() {
        let seed = LibrarySeed::builtin();
        assert_eq!(seed.authors.len(), 2);
        assert_eq!(seed.books.len(), 4);
        assert_eq!(seed.authors[0].name, "J.K.Rowling");
        assert_eq!(seed.books[0].name, "Harry Potter");
        assert_eq!(seed.books[0].author_id, 1);
    }

    #[test]
    fn test_from_json_defaults_missing_collections() {
        let seed = LibrarySeed::from_json(r#"{"authors": [{"id": 5, "name": "Ursula K. Le Guin"}]}"#)
            .unwrap();
        assert_eq!(seed.authors.len(), 1);
        assert!(seed.books.is_empty());
    }

    #[test]
    fn test_from_json_rejects_malformed_document() {
        let result = LibrarySeed::from_json(r#"{"books": [{"id": "one"}]}"#);
        assert_matches!(result, Err(ApiError::Serialization(_)));
    }

    #[test]
    fn test_from_path_round_trips_builtin() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let json = serde_json::to_string(&LibrarySeed::builtin()).unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let seed = LibrarySeed::from_path(file.path()).unwrap();
        assert_eq!(seed, LibrarySeed::builtin());
    }

    #[test]
    fn test_from_path_missing_file() {
        let result = LibrarySeed::from_path("/definitely/not/here/seed.json");
        assert_matches!(result, Err(ApiError::Io(_)));
    }
}
