//! Fixed drawing constants for the chart surface.
//!
//! The chart renders on a square 500x500 viewBox and lets the host scale it;
//! all other constants derive their meaning from that coordinate space.

/// Side length of the square SVG viewBox.
pub const VIEW_BOX_SIZE: f64 = 500.0;

/// Center of the viewBox on both axes; the hub of every ring.
pub const CENTRAL_POINT: f64 = VIEW_BOX_SIZE / 2.0;

/// Radius of the outermost ring edge.
pub const OUTER_RADIUS: f64 = VIEW_BOX_SIZE / 2.0;

/// The center percentage label renders at this multiple of the group font
/// size.
pub const PERCENTAGE_FONT_SIZE_MULTIPLIER: f64 = 2.0;

/// Upward shift of the center category label, in multiples of its font size.
pub const CATEGORY_LINE_INTERVAL: f64 = 0.6;

/// Downward shift of the percentage label when it stands alone.
pub const DEFAULT_PERCENTAGE_LINE_INTERVAL: f64 = 0.25;

/// Downward shift of the percentage label when the category label shows
/// above it.
pub const MULTILINE_PERCENTAGE_LINE_INTERVAL: f64 = 0.6;

/// Horizontal padding subtracted on both sides when fitting label text.
pub const DATA_LABEL_PADDING: f64 = 5.0;

/// Baseline offset of curved slice labels below their outer edge.
pub const SLICE_LABEL_DY: f64 = 18.0;
