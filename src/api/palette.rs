//! The fixed panel palette.
//!
//! These literals are part of the visual contract; renders must reproduce
//! them exactly, so they live here as named constants instead of inline in
//! each panel builder.

use crate::render::Color;

/// Marker fill for points with positive sentiment.
pub const POSITIVE_MARKER: Color = Color::rgba(0.180, 0.455, 0.820, 0.55);
/// Marker fill for points with zero or negative sentiment.
pub const NEGATIVE_MARKER: Color = Color::rgba(0.855, 0.310, 0.235, 0.55);
/// Faint outline stroked around every marker.
pub const MARKER_OUTLINE: Color = Color::rgba(0.0, 0.0, 0.0, 0.25);

/// Verified-series bars in the overlay panel.
pub const VERIFIED_BAR: Color = Color::rgba(0.365, 0.647, 0.835, 0.75);
/// Unverified-series bars in the overlay panel.
pub const UNVERIFIED_BAR: Color = Color::rgba(1.0, 0.663, 0.302, 0.60);
/// Bars in the single-series distribution panel.
pub const DISTRIBUTION_BAR: Color = Color::rgba(0.498, 0.686, 0.820, 0.70);
/// Dashed mean marker line and its label.
pub const MEAN_LINE: Color = Color::rgba(0.804, 0.114, 0.114, 0.95);

/// Axis strokes.
pub const AXIS_STROKE: Color = Color::rgb(0.20, 0.20, 0.20);
/// Axis and tick label text.
pub const LABEL_TEXT: Color = Color::rgb(0.27, 0.27, 0.27);
