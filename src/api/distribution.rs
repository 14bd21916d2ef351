use tracing::debug;

use crate::core::{
    PanelInsets, PlotArea, bin_series, project_distribution_bars, series_mean, shared_max_count,
};
use crate::error::VizResult;
use crate::render::{
    LinePrimitive, LineStrokeStyle, PreparedSurface, RectPrimitive, RenderFrame, Renderer,
    SurfaceSpec, TextHAlign, TextPrimitive,
};

use super::options::{DEFAULT_DISTRIBUTION_BINS, RenderOptions};
use super::{palette, panel};

const INSETS: PanelInsets = PanelInsets::new(50.0, 20.0, 30.0, 40.0);
const DOMAIN_START: f64 = -2.0;
const DOMAIN_END: f64 = 2.0;
const Y_LABEL_OFFSET_PX: f64 = 36.0;
const X_LABEL: &str = "Sentiment Intensity Score";
const Y_LABEL: &str = "Frequency";

const MEAN_LINE_WIDTH: f64 = 2.0;
const MEAN_DASH_PX: f64 = 6.0;
const MEAN_GAP_PX: f64 = 4.0;
const MEAN_LABEL_FONT_PX: f64 = 11.0;
const MEAN_LABEL_GAP_PX: f64 = 6.0;
const MEAN_LABEL_DROP_PX: f64 = 4.0;

/// Builds the single-series distribution scene: one bar per bucket over the
/// fixed domain, a dashed vertical line at the arithmetic mean with a numeric
/// label, plus axes and labels.
///
/// The mean of an empty series is defined as 0, so an empty render still
/// places the line at the domain's zero position.
pub fn build_distribution_frame(
    surface: PreparedSurface,
    scores: &[f64],
    options: &RenderOptions,
) -> VizResult<RenderFrame> {
    let bins = options.resolved_bins(DEFAULT_DISTRIBUTION_BINS);
    let binned = bin_series(scores, DOMAIN_START, DOMAIN_END, bins)?;
    if binned.dropped_below > 0 {
        debug!(
            dropped = binned.dropped_below,
            "values below the domain minimum were not counted"
        );
    }

    let mut frame = RenderFrame::new(surface);
    let plot = PlotArea::from_logical(surface.logical_width(), surface.logical_height(), INSETS);
    if plot.is_degenerate() {
        debug!("degenerate plot area, distribution panel renders empty");
        return Ok(frame);
    }

    for line in panel::axis_lines(&plot) {
        frame.lines.push(line);
    }

    let max_count = shared_max_count(&[&binned]);
    for rect in project_distribution_bars(&binned, max_count, &plot) {
        frame.rects.push(RectPrimitive::new(
            rect.x,
            rect.y,
            rect.width,
            rect.height,
            palette::DISTRIBUTION_BAR,
        ));
    }

    let mean = series_mean(scores);
    let x_scale = plot.x_scale(DOMAIN_START, DOMAIN_END)?;
    let mean_x = x_scale.value_to_pixel(mean)?;
    frame.lines.push(
        LinePrimitive::new(
            mean_x,
            plot.top,
            mean_x,
            plot.bottom(),
            MEAN_LINE_WIDTH,
            palette::MEAN_LINE,
        )
        .with_style(LineStrokeStyle::Dashed {
            dash_px: MEAN_DASH_PX,
            gap_px: MEAN_GAP_PX,
        }),
    );
    frame.texts.push(TextPrimitive::new(
        format!("Mean: {mean:.3}"),
        mean_x + MEAN_LABEL_GAP_PX,
        plot.top + MEAN_LABEL_DROP_PX,
        MEAN_LABEL_FONT_PX,
        palette::MEAN_LINE,
        TextHAlign::Left,
    ));

    frame.texts.push(panel::x_axis_label(&plot, X_LABEL));
    frame
        .texts
        .push(panel::y_axis_label(&plot, Y_LABEL, Y_LABEL_OFFSET_PX));

    debug!(
        scores = scores.len(),
        bins = bins.get(),
        rects = frame.rects.len(),
        mean,
        "built distribution frame"
    );
    Ok(frame)
}

/// Renders the distribution panel in one full repaint of the given surface.
pub fn render_distribution<R: Renderer>(
    renderer: &mut R,
    spec: SurfaceSpec,
    scores: &[f64],
    options: &RenderOptions,
) -> VizResult<()> {
    let prepared = spec.prepare()?;
    let frame = build_distribution_frame(prepared, scores, options)?;
    renderer.render(&frame)
}
