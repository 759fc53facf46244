pub(crate) mod line;
pub(crate) mod pie;

// Shared chart palette and typography.
pub(crate) const GOLD: &str = "#F4B443";
pub(crate) const BLUE: &str = "#6491DE";
pub(crate) const NAVY: &str = "#073D7F";
pub(crate) const GRID_GRAY: &str = "#808080";

pub(crate) const TITLE_FONT_SIZE: u32 = 24;
pub(crate) const LABEL_FONT_SIZE: u32 = 18;

/// Point on a circle at `angle_deg`, measured counterclockwise from the
/// positive x-axis in screen coordinates (y grows downward, hence the
/// minus on the sine).
pub(crate) fn polar(cx: f64, cy: f64, r: f64, angle_deg: f64) -> (f64, f64) {
    let rad = angle_deg.to_radians();
    (cx + r * rad.cos(), cy - r * rad.sin())
}
