use tracing::debug;

use crate::core::{
    BarSeries, PanelInsets, PlotArea, bin_series, project_overlay_bars, shared_max_count,
};
use crate::error::VizResult;
use crate::render::{PreparedSurface, RectPrimitive, RenderFrame, Renderer, SurfaceSpec};

use super::options::{DEFAULT_OVERLAY_BINS, RenderOptions};
use super::{palette, panel};

const INSETS: PanelInsets = PanelInsets::new(50.0, 20.0, 30.0, 40.0);
const DOMAIN_START: f64 = -1.0;
const DOMAIN_END: f64 = 1.0;
const Y_LABEL_OFFSET_PX: f64 = 36.0;
const X_LABEL: &str = "Sentiment Intensity";
const Y_LABEL: &str = "Frequency";

/// Builds the verified/unverified overlay scene: both series binned over the
/// shared fixed domain, two side-by-side translucent bars per bucket, plus
/// axes and labels.
pub fn build_overlay_frame(
    surface: PreparedSurface,
    verified: &[f64],
    unverified: &[f64],
    options: &RenderOptions,
) -> VizResult<RenderFrame> {
    let bins = options.resolved_bins(DEFAULT_OVERLAY_BINS);
    let verified_bins = bin_series(verified, DOMAIN_START, DOMAIN_END, bins)?;
    let unverified_bins = bin_series(unverified, DOMAIN_START, DOMAIN_END, bins)?;

    let dropped = verified_bins.dropped_below + unverified_bins.dropped_below;
    if dropped > 0 {
        debug!(dropped, "values below the domain minimum were not counted");
    }

    let mut frame = RenderFrame::new(surface);
    let plot = PlotArea::from_logical(surface.logical_width(), surface.logical_height(), INSETS);
    if plot.is_degenerate() {
        debug!("degenerate plot area, overlay panel renders empty");
        return Ok(frame);
    }

    for line in panel::axis_lines(&plot) {
        frame.lines.push(line);
    }

    let max_count = shared_max_count(&[&verified_bins, &unverified_bins]);
    for bar in project_overlay_bars(&verified_bins, &unverified_bins, max_count, &plot)? {
        let fill = match bar.series {
            BarSeries::Verified => palette::VERIFIED_BAR,
            BarSeries::Unverified => palette::UNVERIFIED_BAR,
        };
        frame.rects.push(RectPrimitive::new(
            bar.rect.x,
            bar.rect.y,
            bar.rect.width,
            bar.rect.height,
            fill,
        ));
    }

    frame.texts.push(panel::x_axis_label(&plot, X_LABEL));
    frame
        .texts
        .push(panel::y_axis_label(&plot, Y_LABEL, Y_LABEL_OFFSET_PX));

    debug!(
        verified = verified.len(),
        unverified = unverified.len(),
        bins = bins.get(),
        rects = frame.rects.len(),
        "built overlay histogram frame"
    );
    Ok(frame)
}

/// Renders the overlay histogram in one full repaint of the given surface.
pub fn render_overlay_histogram<R: Renderer>(
    renderer: &mut R,
    spec: SurfaceSpec,
    verified: &[f64],
    unverified: &[f64],
    options: &RenderOptions,
) -> VizResult<()> {
    let prepared = spec.prepare()?;
    let frame = build_overlay_frame(prepared, verified, unverified, options)?;
    renderer.render(&frame)
}
