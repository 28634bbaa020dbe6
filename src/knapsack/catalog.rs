//! Item definitions and the ordered catalog they live in.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::ops::Index;
use std::path::Path;

/// A single candidate for the knapsack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Display name.
    pub name: String,

    /// Non-negative weight counted against the cap.
    pub weight: f64,

    /// Value gained when the item is packed.
    pub value: u64,
}

impl Item {
    pub fn new(name: impl Into<String>, weight: f64, value: u64) -> Self {
        Self {
            name: name.into(),
            weight,
            value,
        }
    }
}

/// An ordered, immutable sequence of items.
///
/// Indices are stable for the lifetime of the catalog; solutions refer to
/// items by position only.
///
/// # Examples
///
/// ```
/// use u_knapsack::{Catalog, Item};
///
/// let catalog = Catalog::new(vec![
///     Item::new("A", 2.0, 3),
///     Item::new("B", 3.0, 4),
/// ])
/// .unwrap();
/// assert_eq!(catalog.len(), 2);
/// assert_eq!(catalog[1].name, "B");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Builds a catalog, rejecting negative or non-finite weights.
    pub fn new(items: Vec<Item>) -> Result<Self> {
        for (i, item) in items.iter().enumerate() {
            if !item.weight.is_finite() || item.weight < 0.0 {
                return Err(Error::InvalidProblem(format!(
                    "item {i} ({:?}) has invalid weight {}",
                    item.name, item.weight
                )));
            }
        }
        Ok(Self { items })
    }

    /// Parses a JSON array of `{"name", "weight", "value"}` records.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let items: Vec<Item> =
            serde_json::from_str(json).map_err(|source| Error::Parse { path: None, source })?;
        Self::new(items)
    }

    /// Reads and parses a JSON catalog file.
    pub fn from_json_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let items: Vec<Item> = serde_json::from_str(&data).map_err(|source| Error::Parse {
            path: Some(path.to_path_buf()),
            source,
        })?;
        let catalog = Self::new(items)?;
        tracing::debug!(path = %path.display(), items = catalog.len(), "loaded catalog");
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    /// Sum of all item weights.
    pub fn total_weight(&self) -> f64 {
        self.items.iter().map(|item| item.weight).sum()
    }
}

impl Index<usize> for Catalog {
    type Output = Item;

    fn index(&self, index: usize) -> &Item {
        &self.items[index]
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_str() {
        let json = r#"[
            {"name": "A", "weight": 2, "value": 3},
            {"name": "B", "weight": 3.5, "value": 4}
        ]"#;
        let catalog = Catalog::from_json_str(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog[0], Item::new("A", 2.0, 3));
        assert!((catalog[1].weight - 3.5).abs() < 1e-12);
    }

    #[test]
    fn test_negative_value_rejected_by_parser() {
        let json = r#"[{"name": "A", "weight": 2, "value": -3}]"#;
        assert!(matches!(
            Catalog::from_json_str(json),
            Err(Error::Parse { path: None, .. })
        ));
    }

    #[test]
    fn test_malformed_file_reports_path() {
        let path = std::env::temp_dir().join(format!("u-knapsack-bad-{}.json", std::process::id()));
        std::fs::write(&path, "{\"name\": \"not an array\"}").unwrap();

        let result = Catalog::from_json_path(&path);
        std::fs::remove_file(&path).unwrap();

        match result {
            Err(err @ Error::Parse { path: Some(_), .. }) => {
                assert!(err.to_string().contains("u-knapsack-bad-"), "{err}");
            }
            other => panic!("expected a parse error with a path, got {other:?}"),
        }
    }

    #[test]
    fn test_in_memory_parse_error_message() {
        let err = Catalog::from_json_str("not json").unwrap_err();
        assert_eq!(err.to_string(), "failed to parse catalog");
    }

    #[test]
    fn test_negative_weight_rejected() {
        let result = Catalog::new(vec![Item::new("A", -1.0, 3)]);
        assert!(matches!(result, Err(Error::InvalidProblem(_))));
    }

    #[test]
    fn test_nan_weight_rejected() {
        let result = Catalog::new(vec![Item::new("A", f64::NAN, 3)]);
        assert!(matches!(result, Err(Error::InvalidProblem(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = Catalog::from_json_path("does/not/exist.json");
        assert!(matches!(result, Err(Error::Io { .. })));
    }

    #[test]
    fn test_total_weight() {
        let catalog = Catalog::new(vec![Item::new("A", 2.0, 3), Item::new("B", 3.0, 4)]).unwrap();
        assert!((catalog.total_weight() - 5.0).abs() < 1e-12);
    }
}
