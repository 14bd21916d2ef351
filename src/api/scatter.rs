use ordered_float::OrderedFloat;
use smallvec::SmallVec;
use tracing::debug;

use crate::core::{PanelInsets, PlotArea, Polarity, ScatterPoint, project_markers};
use crate::error::{VizError, VizResult};
use crate::render::{
    CirclePrimitive, PreparedSurface, RenderFrame, Renderer, SurfaceSpec, TextHAlign,
    TextPrimitive,
};

use super::options::RenderOptions;
use super::{palette, panel};

const INSETS: PanelInsets = PanelInsets::new(60.0, 20.0, 20.0, 40.0);
const X_DOMAIN_START: f64 = -1.05;
const X_DOMAIN_END: f64 = 1.05;
const X_TICKS: [f64; 5] = [-1.0, -0.5, 0.0, 0.5, 1.0];
const TICK_LABEL_OFFSET_PX: f64 = 8.0;
const Y_LABEL_OFFSET_PX: f64 = 44.0;
const MARKER_OUTLINE_WIDTH: f64 = 1.0;
const X_LABEL: &str = "Sentiment Intensity";
const Y_LABEL: &str = "Total Engagement";

/// Builds the scatter panel scene: L-axes, axis labels, x-tick labels, and
/// one filled marker per point with the fill keyed on the sentiment sign.
///
/// The x-domain is fixed; the y-domain stretches to the largest engagement
/// value, floored at 1 so near-zero data keeps a usable scale. Empty input
/// still produces axes and labels.
pub fn build_scatter_frame(
    surface: PreparedSurface,
    points: &[ScatterPoint],
    options: &RenderOptions,
) -> VizResult<RenderFrame> {
    if options.bins.is_some() {
        debug!("bins option has no effect on the scatter panel");
    }

    for point in points {
        if !point.x.is_finite() || !point.y.is_finite() {
            return Err(VizError::InvalidData(
                "scatter coordinates must be finite".to_owned(),
            ));
        }
    }

    let mut frame = RenderFrame::new(surface);
    let plot = PlotArea::from_logical(surface.logical_width(), surface.logical_height(), INSETS);
    if plot.is_degenerate() {
        debug!("degenerate plot area, scatter panel renders empty");
        return Ok(frame);
    }

    let x_scale = plot.x_scale(X_DOMAIN_START, X_DOMAIN_END)?;
    let y_max = points
        .iter()
        .map(|point| OrderedFloat(point.y))
        .max()
        .map_or(0.0, OrderedFloat::into_inner);
    let y_scale = plot.y_scale(0.0, y_max.max(1.0))?;

    for line in panel::axis_lines(&plot) {
        frame.lines.push(line);
    }
    frame.texts.push(panel::x_axis_label(&plot, X_LABEL));
    frame
        .texts
        .push(panel::y_axis_label(&plot, Y_LABEL, Y_LABEL_OFFSET_PX));

    for marker in project_markers(points, x_scale, y_scale)? {
        let fill = match marker.polarity {
            Polarity::Positive => palette::POSITIVE_MARKER,
            Polarity::NonPositive => palette::NEGATIVE_MARKER,
        };
        frame.circles.push(CirclePrimitive::new(
            marker.x,
            marker.y,
            marker.radius,
            fill,
            MARKER_OUTLINE_WIDTH,
            palette::MARKER_OUTLINE,
        ));
    }

    let mut ticks: SmallVec<[TextPrimitive; 5]> = SmallVec::new();
    for tick in X_TICKS {
        ticks.push(TextPrimitive::new(
            format!("{tick:.1}"),
            x_scale.value_to_pixel(tick)?,
            plot.bottom() + TICK_LABEL_OFFSET_PX,
            panel::TICK_LABEL_FONT_PX,
            palette::LABEL_TEXT,
            TextHAlign::Center,
        ));
    }
    frame.texts.extend(ticks);

    debug!(
        points = points.len(),
        circles = frame.circles.len(),
        "built scatter frame"
    );
    Ok(frame)
}

/// Renders the scatter panel in one full repaint of the given surface.
pub fn render_scatter<R: Renderer>(
    renderer: &mut R,
    spec: SurfaceSpec,
    points: &[ScatterPoint],
    options: &RenderOptions,
) -> VizResult<()> {
    let prepared = spec.prepare()?;
    let frame = build_scatter_frame(prepared, points, options)?;
    renderer.render(&frame)
}
