use std::cmp::Ordering;
use std::fmt;

use crate::department::Department;
use crate::filter::{self, FilterKey, Query};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    Parse(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for CatalogError {}

/// Loaded department list, sorted by name. Read-only after construction.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    departments: Vec<Department>,
}

impl Catalog {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_departments(departments: Vec<Department>) -> Self {
        Self::from_departments_with(departments, compare_names)
    }

    /// Build with a caller-supplied name collation (the browser passes
    /// `String.prototype.localeCompare`). The sort is stable.
    pub fn from_departments_with<F>(mut departments: Vec<Department>, mut cmp: F) -> Self
    where
        F: FnMut(&str, &str) -> Ordering,
    {
        departments.sort_by(|a, b| cmp(&a.name, &b.name));
        Self { departments }
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let departments: Vec<Department> =
            serde_json::from_str(json).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Ok(Self::from_departments(departments))
    }

    pub fn departments(&self) -> &[Department] {
        &self.departments
    }

    pub fn len(&self) -> usize {
        self.departments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.departments.is_empty()
    }

    pub fn live_count(&self) -> usize {
        self.departments.iter().filter(|d| d.live).count()
    }

    pub fn soon_count(&self) -> usize {
        self.len() - self.live_count()
    }

    /// Look up a department by its name, which is unique within the catalog.
    pub fn find(&self, name: &str) -> Option<&Department> {
        self.departments.iter().find(|d| d.name == name)
    }

    pub fn visible(&self, key: FilterKey, query: &Query) -> Vec<&Department> {
        filter::visible(&self.departments, key, query)
    }
}

/// Host-side name collation: case-insensitive, lowercase before uppercase on
/// ties. Matches `localeCompare` for plain ASCII names.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}
