//! Shared scaffolding for the three fixed panels.

use crate::core::PlotArea;
use crate::render::{LinePrimitive, TextHAlign, TextPrimitive};

use super::palette;

pub(crate) const AXIS_STROKE_WIDTH: f64 = 1.0;
pub(crate) const AXIS_LABEL_FONT_PX: f64 = 12.0;
pub(crate) const TICK_LABEL_FONT_PX: f64 = 10.0;

/// Distance from the plot bottom to the top of the x-axis label.
pub(crate) const X_LABEL_OFFSET_PX: f64 = 26.0;

/// Left edge plus bottom edge of the plot area (the "L" axis).
pub(crate) fn axis_lines(plot: &PlotArea) -> [LinePrimitive; 2] {
    [
        LinePrimitive::new(
            plot.left,
            plot.top,
            plot.left,
            plot.bottom(),
            AXIS_STROKE_WIDTH,
            palette::AXIS_STROKE,
        ),
        LinePrimitive::new(
            plot.left,
            plot.bottom(),
            plot.right(),
            plot.bottom(),
            AXIS_STROKE_WIDTH,
            palette::AXIS_STROKE,
        ),
    ]
}

/// X-axis label centered under the plot area.
pub(crate) fn x_axis_label(plot: &PlotArea, text: &str) -> TextPrimitive {
    TextPrimitive::new(
        text,
        plot.center_x(),
        plot.bottom() + X_LABEL_OFFSET_PX,
        AXIS_LABEL_FONT_PX,
        palette::LABEL_TEXT,
        TextHAlign::Center,
    )
}

/// Y-axis label rotated 90 degrees counter-clockwise, left of the plot area.
pub(crate) fn y_axis_label(plot: &PlotArea, text: &str, offset_px: f64) -> TextPrimitive {
    TextPrimitive::new(
        text,
        plot.left - offset_px,
        plot.center_y(),
        AXIS_LABEL_FONT_PX,
        palette::LABEL_TEXT,
        TextHAlign::Center,
    )
    .rotated_left()
}
