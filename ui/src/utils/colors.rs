//! Shared color constants for the UI.

use backoffice_business::table::Tone;
use egui::Color32;

/// Forest green color for verified/paid/healthy values.
pub const COLOR_GREEN: Color32 = Color32::from_rgb(34, 139, 34);

/// Red color for overdue/suspended/failed values.
pub const COLOR_RED: Color32 = Color32::from_rgb(220, 53, 69);

/// Amber color for pending/unpaid values.
pub const COLOR_AMBER: Color32 = Color32::from_rgb(255, 193, 7);

/// Border color for the data table (subtle gray).
pub const TABLE_BORDER_COLOR: Color32 = Color32::from_rgb(200, 200, 200);

/// Text color for a cell tone. `None` keeps the theme's text color.
pub fn tone_color(tone: Tone) -> Option<Color32> {
    match tone {
        Tone::Default => None,
        Tone::Positive => Some(COLOR_GREEN),
        Tone::Warning => Some(COLOR_AMBER),
        Tone::Negative => Some(COLOR_RED),
        Tone::Muted => Some(Color32::GRAY),
    }
}
