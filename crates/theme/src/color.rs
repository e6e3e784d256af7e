//! Color parsing and derived color tokens
//!
//! Themes author hex colors; some tokens are computed from them instead of
//! being written by hand. The only derived token today is `textMuted`, the
//! base text color at 60% opacity.

/// A color value as authored in a theme: `#RRGGBB` or an `rgba(...)` string
pub type Color = String;

/// Opacity applied to the text color to produce `textMuted`
pub const TEXT_MUTED_ALPHA: f32 = 0.6;

/// Parse a strict six-digit hex color, with or without a leading `#`
///
/// Shorthand (`#fff`) and eight-digit (`#RRGGBBAA`) forms are rejected.
pub fn parse_hex_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Re-encode a hex color as `rgba(r, g, b, alpha)`
///
/// Input that is not a six-digit hex color comes back unchanged.
pub fn hex_to_rgba(hex: &str, alpha: f32) -> Color {
    match parse_hex_rgb(hex) {
        Some((r, g, b)) => format!("rgba({}, {}, {}, {})", r, g, b, alpha),
        None => hex.to_string(),
    }
}

/// Derive the muted text color from a theme's base text color
pub fn derive_text_muted(text: &str) -> Color {
    hex_to_rgba(text, TEXT_MUTED_ALPHA)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_rgb() {
        assert_eq!(parse_hex_rgb("#111827"), Some((17, 24, 39)));
        assert_eq!(parse_hex_rgb("3F84E5"), Some((63, 132, 229)));
        assert_eq!(parse_hex_rgb("#ffffff"), Some((255, 255, 255)));
    }

    #[test]
    fn test_parse_hex_rgb_rejects_malformed() {
        assert_eq!(parse_hex_rgb("#fff"), None);
        assert_eq!(parse_hex_rgb("#a8121e82"), None);
        assert_eq!(parse_hex_rgb("#12345g"), None);
        assert_eq!(parse_hex_rgb("##111827"), None);
        assert_eq!(parse_hex_rgb(""), None);
        assert_eq!(parse_hex_rgb("rgba(0, 0, 0, 0.5)"), None);
    }

    #[test]
    fn test_parse_hex_rgb_multibyte_input() {
        // Six bytes but not six hex digits; must not slice mid-character.
        assert_eq!(parse_hex_rgb("ééé"), None);
    }

    #[test]
    fn test_derive_text_muted() {
        assert_eq!(derive_text_muted("#111827"), "rgba(17, 24, 39, 0.6)");
        assert_eq!(derive_text_muted("0C2F5A"), "rgba(12, 47, 90, 0.6)");
    }

    #[test]
    fn test_derive_text_muted_passthrough() {
        assert_eq!(derive_text_muted("not-a-hex-color"), "not-a-hex-color");
        assert_eq!(derive_text_muted("#abc"), "#abc");
    }

    #[test]
    fn test_hex_to_rgba_alpha() {
        assert_eq!(hex_to_rgba("#000000", 0.25), "rgba(0, 0, 0, 0.25)");
        assert_eq!(hex_to_rgba("#FFFFFF", 1.0), "rgba(255, 255, 255, 1)");
    }
}
