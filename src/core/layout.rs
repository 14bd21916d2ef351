use serde::{Deserialize, Serialize};

use crate::core::AxisScale;
use crate::error::VizResult;

/// Margins reserved around the plot area for axes and labels, in logical
/// pixels. Each panel bakes its own literal inset values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelInsets {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl PanelInsets {
    #[must_use]
    pub const fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }
}

/// Inner rectangle of a surface where data marks are drawn, in logical
/// pixels.
///
/// A plot area may be degenerate (zero or negative span) when the surface is
/// smaller than its insets; callers skip mark projection in that case and the
/// panel renders empty rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    #[must_use]
    pub fn from_logical(logical_width: f64, logical_height: f64, insets: PanelInsets) -> Self {
        Self {
            left: insets.left,
            top: insets.top,
            width: logical_width - insets.left - insets.right,
            height: logical_height - insets.top - insets.bottom,
        }
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    #[must_use]
    pub fn center_x(&self) -> f64 {
        self.left + self.width * 0.5
    }

    #[must_use]
    pub fn center_y(&self) -> f64 {
        self.top + self.height * 0.5
    }

    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Horizontal scale mapping `domain` onto the plot's left..right span.
    pub fn x_scale(&self, domain_start: f64, domain_end: f64) -> VizResult<AxisScale> {
        AxisScale::new(domain_start, domain_end, self.left, self.right())
    }

    /// Vertical scale mapping `domain` onto the plot's bottom..top span, so
    /// larger values land higher on the surface.
    pub fn y_scale(&self, domain_start: f64, domain_end: f64) -> VizResult<AxisScale> {
        AxisScale::new(domain_start, domain_end, self.bottom(), self.top)
    }
}
