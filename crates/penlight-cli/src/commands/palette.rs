//! Template color palette from the original swatch grid.

use penlight_core::models::color::{contrast_color, ContrastColor};

/// Quick-select swatch colors, in display order.
pub const TEMPLATE_COLORS: &[&str] = &[
    "#ef4444", "#f97316", "#eab308", "#84cc16", "#22c55e", "#14b8a6", "#06b6d4", "#3b82f6",
    "#6366f1", "#8b5cf6", "#d946ef", "#ec4899", "#fca5a5", "#818cf8", "#ffffff", "#94a3b8",
];

pub fn run_palette() {
    for color in TEMPLATE_COLORS {
        let label = match contrast_color(color) {
            ContrastColor::Black => "black text",
            ContrastColor::White => "white text",
        };
        println!("{color}  ({label})");
    }
}
