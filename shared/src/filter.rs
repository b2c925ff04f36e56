use crate::department::Department;

/// Tag partition of the catalog selected by the filter tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FilterKey {
    #[default]
    All,
    Live,
    Soon,
}

impl FilterKey {
    /// Tab order.
    pub const ALL: [FilterKey; 3] = [FilterKey::All, FilterKey::Live, FilterKey::Soon];

    /// Unrecognized keys behave as `All`.
    pub fn parse(key: &str) -> Self {
        match key.trim() {
            "live" => Self::Live,
            "soon" => Self::Soon,
            _ => Self::All,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Live => "live",
            Self::Soon => "soon",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Live => "Live",
            Self::Soon => "Coming Soon",
        }
    }

    pub fn admits(self, department: &Department) -> bool {
        match self {
            Self::All => true,
            Self::Live => department.live,
            Self::Soon => !department.live,
        }
    }
}

/// Free-text search query, trimmed on construction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Query {
    display: String,
    needle: String,
}

impl Query {
    pub fn new(raw: &str) -> Self {
        let display = raw.trim().to_string();
        let needle = display.to_lowercase();
        Self { display, needle }
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// Trimmed query as the user typed it.
    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn matches(&self, department: &Department) -> bool {
        self.is_empty()
            || department.name.to_lowercase().contains(&self.needle)
            || department.faculty.to_lowercase().contains(&self.needle)
    }
}

/// Visible subset of `list`: tag filter, then name/faculty substring filter.
/// Keeps the input order.
pub fn visible<'a>(list: &'a [Department], key: FilterKey, query: &Query) -> Vec<&'a Department> {
    list.iter()
        .filter(|department| key.admits(department))
        .filter(|department| query.matches(department))
        .collect()
}
