/// Alpha suffix appended to a department color for the icon fill.
pub const ICON_FILL_ALPHA: &str = "18";
/// Alpha suffix appended to a department color for the icon border.
pub const ICON_BORDER_ALPHA: &str = "30";

/// Deterministic accent color via CRC32 hash of a department name.
/// Returns (r, g, b) from first 3 bytes of hash.
pub fn name_color(name: &str) -> (u8, u8, u8) {
    let hash = crc32fast::hash(name.as_bytes());
    let bytes = hash.to_be_bytes();
    (bytes[0], bytes[1], bytes[2])
}

/// Format RGB as a 6-digit CSS hex color (`#rrggbb`).
pub fn hex_css(r: u8, g: u8, b: u8) -> String {
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// Append a two-digit hex alpha to a color string.
///
/// Only yields a valid color for `#rrggbb` inputs.
pub fn with_alpha(color: &str, alpha: &str) -> String {
    let mut out = String::with_capacity(color.len() + alpha.len());
    out.push_str(color);
    out.push_str(alpha);
    out
}

#[cfg(test)]
mod tests {
    use super::{hex_css, name_color, with_alpha};

    #[test]
    fn name_color_is_deterministic() {
        assert_eq!(name_color("Zoology"), name_color("Zoology"));
    }

    #[test]
    fn name_color_varies_for_different_names() {
        assert_ne!(name_color("Zoology"), name_color("Agronomy"));
    }

    #[test]
    fn hex_css_pads_each_channel() {
        assert_eq!(hex_css(0, 0, 0), "#000000");
        assert_eq!(hex_css(255, 10, 1), "#ff0a01");
    }

    #[test]
    fn with_alpha_concatenates_suffix() {
        assert_eq!(with_alpha("#1a73e8", "18"), "#1a73e818");
        assert_eq!(with_alpha("#1a73e8", "30"), "#1a73e830");
    }
}
