//! Ordered in-memory table with store-owned id assignment

use crate::error::{ApiError, ApiResult};

/// A row that carries its own integer identifier
pub trait Record: Clone + Send + Sync + 'static {
    /// Resource name used in error messages ("book", "author")
    const RESOURCE: &'static str;

    fn id(&self) -> i32;
}

/// Rows in insertion order plus the next id to hand out.
///
/// `next_id` only ever grows, so ids stay unique even if rows were
/// removed or two writers raced; callers hold the write lock while
/// inserting.
#[derive(Debug)]
pub(crate) struct Table<T> {
    rows: Vec<T>,
    next_id: i32,
}

impl<T: Record> Table<T> {
    /// Build a table from seed rows, rejecting non-positive or repeated ids
    pub(crate) fn seeded(rows: Vec<T>) -> ApiResult<Self> {
        let mut max_id: i32 = 0;
        let mut seen = std::collections::HashSet::with_capacity(rows.len());

        for row in &rows {
            let id = row.id();
            if id <= 0 {
                return Err(ApiError::ValidationError(format!(
                    "{} id must be positive, got {}",
                    T::RESOURCE,
                    id
                )));
            }
            if !seen.insert(id) {
                return Err(ApiError::conflict(T::RESOURCE, id.to_string()));
            }
            max_id = max_id.max(id);
        }

        let next_id = max_id.checked_add(1).ok_or_else(|| {
            ApiError::ValidationError(format!(
                "{} id {} leaves no room for new ids",
                T::RESOURCE,
                max_id
            ))
        })?;

        Ok(Self { rows, next_id })
    }

    pub(crate) fn get(&self, id: i32) -> Option<&T> {
        self.rows.iter().find(|row| row.id() == id)
    }

    pub(crate) fn rows(&self) -> &[T] {
        &self.rows
    }

    pub(crate) fn len(&self) -> usize {
        self.rows.len()
    }

    /// Append a row built from the next id and return a copy of it
    ///
    /// Fails without touching the table once the id space is used up.
    pub(crate) fn insert_with(&mut self, build: impl FnOnce(i32) -> T) -> ApiResult<T> {
        let id = self.next_id;
        self.next_id = id.checked_add(1).ok_or_else(|| {
            ApiError::ValidationError(format!("no {} ids left to assign", T::RESOURCE))
        })?;

        let row = build(id);
        self.rows.push(row.clone());
        Ok(row)
    }
}

impl<T: Record> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            next_id: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[derive(Debug, Clone, PartialEq)]
    struct Row(i32);

    impl Record for Row {
        const RESOURCE: &'static str = "row";

        fn id(&self) -> i32 {
            self.0
        }
    }

    #[test]
    fn test_empty_table_starts_at_one() {
        let mut table = Table::<Row>::default();
        assert_eq!(table.insert_with(Row).unwrap(), Row(1));
        assert_eq!(table.insert_with(Row).unwrap(), Row(2));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_next_id_follows_highest_seed_id() {
        let mut table = Table::seeded(vec![Row(4), Row(2)]).unwrap();
        assert_eq!(table.insert_with(Row).unwrap(), Row(5));
        assert_eq!(table.rows(), &[Row(4), Row(2), Row(5)]);
    }

    #[test]
    fn test_duplicate_seed_ids_rejected() {
        let result = Table::seeded(vec![Row(1), Row(1)]);
        assert_matches!(result, Err(ApiError::Conflict { resource_type: "row", .. }));
    }

    #[test]
    fn test_non_positive_seed_ids_rejected() {
        let result = Table::seeded(vec![Row(0)]);
        assert_matches!(result, Err(ApiError::ValidationError(_)));
    }

    #[test]
    fn test_max_seed_id_rejected() {
        let result = Table::seeded(vec![Row(1), Row(i32::MAX)]);
        assert_matches!(result, Err(ApiError::ValidationError(_)));
    }

    #[test]
    fn test_insert_fails_when_ids_run_out() {
        let mut table = Table::seeded(vec![Row(i32::MAX - 1)]).unwrap();

        let result = table.insert_with(Row);

        assert_matches!(result, Err(ApiError::ValidationError(_)));
        assert_eq!(table.len(), 1);
        assert_matches!(table.insert_with(Row), Err(ApiError::ValidationError(_)));
    }

    #[test]
    fn test_get_returns_first_match() {
        let table = Table::seeded(vec![Row(3), Row(1)]).unwrap();
        assert_eq!(table.get(1), Some(&Row(1)));
        assert_eq!(table.get(2), None);
    }
}
