use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::colors::{hex_css, name_color};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub faculty: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub icon: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub color: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub live: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub levels: Vec<Level>,
}

/// Treat an explicit `null` like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Department {
    /// Color used for icon decoration. Falls back to a hash of the name when
    /// the record carries no color.
    pub fn accent(&self) -> Cow<'_, str> {
        let color = self.color.trim();
        if color.is_empty() {
            let (r, g, b) = name_color(&self.name);
            Cow::Owned(hex_css(r, g, b))
        } else {
            Cow::Borrowed(color)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub level: LevelId,
    #[serde(default)]
    pub url: Option<String>,
}

impl Level {
    /// The link target, if this level has been published.
    pub fn published_url(&self) -> Option<&str> {
        self.url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

/// Academic level identifier. The data file writes these as numbers
/// (`100`) or strings (`"100"`, `"PG"`); both display as written.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawLevelId", into = "String")]
pub struct LevelId(String);

impl LevelId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LevelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<LevelId> for String {
    fn from(id: LevelId) -> Self {
        id.0
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawLevelId {
    Number(serde_json::Number),
    Text(String),
}

impl From<RawLevelId> for LevelId {
    fn from(raw: RawLevelId) -> Self {
        match raw {
            RawLevelId::Number(n) => Self(n.to_string()),
            RawLevelId::Text(s) => Self(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_full_record() {
        let dept: Department = serde_json::from_value(json!({
            "name": "Zoology",
            "faculty": "Science",
            "icon": "Z",
            "color": "#1a73e8",
            "live": true,
            "levels": [
                { "level": 100, "url": "https://drive.example/zoo-100" },
                { "level": "200", "url": "" },
                { "level": 300 }
            ]
        }))
        .expect("record should parse");

        assert_eq!(dept.name, "Zoology");
        assert!(dept.live);
        let ids: Vec<&str> = dept.levels.iter().map(|l| l.level.as_str()).collect();
        assert_eq!(ids, vec!["100", "200", "300"]);
        assert_eq!(
            dept.levels[0].published_url(),
            Some("https://drive.example/zoo-100")
        );
        assert_eq!(dept.levels[1].published_url(), None);
        assert_eq!(dept.levels[2].published_url(), None);
    }

    #[test]
    fn missing_optional_fields_default() {
        let dept: Department =
            serde_json::from_value(json!({ "name": "Agronomy" })).expect("record should parse");
        assert_eq!(dept.faculty, "");
        assert!(!dept.live);
        assert!(dept.levels.is_empty());
    }

    #[test]
    fn null_fields_default_instead_of_failing() {
        let dept: Department = serde_json::from_value(json!({
            "name": "Agronomy",
            "faculty": null,
            "icon": null,
            "color": null,
            "live": null,
            "levels": null
        }))
        .expect("record should parse");
        assert_eq!(dept.faculty, "");
        assert_eq!(dept.icon, "");
        assert!(!dept.live);
        assert!(dept.levels.is_empty());
        let (r, g, b) = name_color("Agronomy");
        assert_eq!(dept.accent(), hex_css(r, g, b));
    }

    #[test]
    fn whitespace_url_is_unpublished() {
        let level = Level {
            level: LevelId::new("400"),
            url: Some("   ".into()),
        };
        assert_eq!(level.published_url(), None);
    }

    #[test]
    fn accent_prefers_record_color() {
        let dept: Department = serde_json::from_value(json!({
            "name": "Zoology",
            "color": " #22aa55 "
        }))
        .expect("record should parse");
        assert_eq!(dept.accent(), "#22aa55");
    }

    #[test]
    fn accent_falls_back_to_name_hash() {
        let dept: Department =
            serde_json::from_value(json!({ "name": "Zoology" })).expect("record should parse");
        let accent = dept.accent();
        assert_eq!(accent.len(), 7);
        assert!(accent.starts_with('#'));
        assert_eq!(accent, dept.accent());
    }

    #[test]
    fn level_id_serializes_as_string() {
        let level = Level {
            level: LevelId::new("500"),
            url: None,
        };
        let value = serde_json::to_value(&level).expect("level should serialize");
        assert_eq!(value, json!({ "level": "500", "url": null }));
    }
}
