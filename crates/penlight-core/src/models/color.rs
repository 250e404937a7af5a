//! Color helpers for the display panel

use regex::Regex;

/// Foreground chosen to keep the label readable on a colored panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContrastColor {
    /// Dark text on a bright background
    Black,
    /// Light text on a dark background
    White,
}

/// Check for the canonical in-memory form: `#` followed by six hex digits.
pub fn is_valid_hex_color(value: &str) -> bool {
    let re = Regex::new(r"^#[0-9a-fA-F]{6}$").expect("Invalid regex");
    re.is_match(value)
}

/// Strip the leading `#` for the wire form.
pub fn wire_color(color: &str) -> &str {
    color.strip_prefix('#').unwrap_or(color)
}

/// Prefix the wire digits with `#` for the in-memory form.
pub fn display_color(wire: &str) -> String {
    format!("#{wire}")
}

/// Pick a readable label color for a `#rrggbb` background.
///
/// Uses the 0.299/0.587/0.114 luminance weights with a 0.6 cutoff.
/// Short or unparsable colors fall back to white.
pub fn contrast_color(hex: &str) -> ContrastColor {
    let channel = |range: std::ops::Range<usize>| {
        hex.get(range)
            .and_then(|digits| u8::from_str_radix(digits, 16).ok())
            .map(f64::from)
    };
    let (Some(r), Some(g), Some(b)) = (channel(1..3), channel(3..5), channel(5..7)) else {
        return ContrastColor::White;
    };

    let luminance = (0.299 * r + 0.587 * g + 0.114 * b) / 255.0;
    if luminance > 0.6 {
        ContrastColor::Black
    } else {
        ContrastColor::White
    }
}
