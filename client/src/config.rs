pub const DEFAULT_DATA_URL: &str = "data/departments.json";

/// Delay before moving focus into a freshly opened view, so the open
/// transition starts first.
pub const FOCUS_DELAY_MS: u32 = 100;

/// Elements that open the contribute modal.
pub const CONTRIBUTE_TRIGGER_SELECTOR: &str = ".open-modal-btn, a[href=\"#contribute\"]";

pub const LEVEL_MODAL_ID: &str = "level-modal";
pub const CONTRIBUTE_MODAL_ID: &str = "contribute";
pub const LEVEL_CLOSE_SELECTOR: &str = "#level-modal .modal-close";
pub const BACK_BUTTON_SELECTOR: &str = "#coming-soon-page .back-btn";

/// Settings read from `data-*` attributes on the mount element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub data_url: String,
    pub contact_url: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            data_url: DEFAULT_DATA_URL.to_string(),
            contact_url: None,
        }
    }
}

impl ClientConfig {
    pub fn from_attrs(catalog_src: Option<String>, contact_url: Option<String>) -> Self {
        Self {
            data_url: non_empty_attr(catalog_src).unwrap_or_else(|| DEFAULT_DATA_URL.to_string()),
            contact_url: non_empty_attr(contact_url),
        }
    }

    /// `<div id="app" data-catalog-src="..." data-contact-url="...">`
    pub fn from_mount(mount: &web_sys::HtmlElement) -> Self {
        let dataset = mount.dataset();
        Self::from_attrs(dataset.get("catalogSrc"), dataset.get("contactUrl"))
    }
}

fn non_empty_attr(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_attributes() {
        assert_eq!(ClientConfig::from_attrs(None, None), ClientConfig::default());
    }

    #[test]
    fn blank_attributes_fall_back() {
        let config = ClientConfig::from_attrs(Some("  ".into()), Some(String::new()));
        assert_eq!(config.data_url, DEFAULT_DATA_URL);
        assert_eq!(config.contact_url, None);
    }

    #[test]
    fn attributes_override_and_trim() {
        let config = ClientConfig::from_attrs(
            Some(" /static/departments.json ".into()),
            Some("https://wa.me/2348000000000".into()),
        );
        assert_eq!(config.data_url, "/static/departments.json");
        assert_eq!(
            config.contact_url.as_deref(),
            Some("https://wa.me/2348000000000")
        );
    }
}
