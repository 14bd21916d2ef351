use serde::{Deserialize, Serialize};

use crate::core::{BinnedSeries, PlotArea};
use crate::error::{VizError, VizResult};

/// Share of a bucket's pixel width occupied by its bar slot.
const SLOT_FILL_RATIO: f64 = 0.90;
/// Share of a bucket's pixel width occupied by each half of an overlay pair.
const OVERLAY_BAR_RATIO: f64 = 0.45;

/// Which of the two overlaid series a bar belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BarSeries {
    Verified,
    Unverified,
}

/// One bottom-anchored bar in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// A projected overlay bar tagged with its series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverlayBar {
    pub series: BarSeries,
    pub rect: BarRect,
}

/// Projects two binned series into side-by-side bar pairs.
///
/// Each bucket's slot spans 90% of its pixel width; the verified bar takes
/// the left 45%, the unverified bar the right 45%. Heights are proportional
/// to `count / max_count` of the plot height. Zero-count buckets emit no bar.
pub fn project_overlay_bars(
    verified: &BinnedSeries,
    unverified: &BinnedSeries,
    max_count: usize,
    plot: &PlotArea,
) -> VizResult<Vec<OverlayBar>> {
    if verified.counts.len() != unverified.counts.len() {
        return Err(VizError::InvalidData(
            "overlay series must share a bucket count".to_owned(),
        ));
    }

    if plot.is_degenerate() || verified.counts.is_empty() {
        return Ok(Vec::new());
    }

    let denominator = max_count.max(1) as f64;
    let bucket_width = plot.width / verified.counts.len() as f64;
    let slot_width = bucket_width * SLOT_FILL_RATIO;
    let bar_width = bucket_width * OVERLAY_BAR_RATIO;

    let mut bars = Vec::new();
    for (index, (&verified_count, &unverified_count)) in
        verified.counts.iter().zip(&unverified.counts).enumerate()
    {
        let slot_left =
            plot.left + index as f64 * bucket_width + (bucket_width - slot_width) * 0.5;

        if verified_count > 0 {
            let height = verified_count as f64 / denominator * plot.height;
            bars.push(OverlayBar {
                series: BarSeries::Verified,
                rect: BarRect {
                    x: slot_left,
                    y: plot.bottom() - height,
                    width: bar_width,
                    height,
                },
            });
        }

        if unverified_count > 0 {
            let height = unverified_count as f64 / denominator * plot.height;
            bars.push(OverlayBar {
                series: BarSeries::Unverified,
                rect: BarRect {
                    x: slot_left + bar_width,
                    y: plot.bottom() - height,
                    width: bar_width,
                    height,
                },
            });
        }
    }

    Ok(bars)
}

/// Projects one binned series into single bars, one per non-empty bucket,
/// each spanning 90% of its bucket's pixel width.
#[must_use]
pub fn project_distribution_bars(
    binned: &BinnedSeries,
    max_count: usize,
    plot: &PlotArea,
) -> Vec<BarRect> {
    if plot.is_degenerate() || binned.counts.is_empty() {
        return Vec::new();
    }

    let denominator = max_count.max(1) as f64;
    let bucket_width = plot.width / binned.counts.len() as f64;
    let bar_width = bucket_width * SLOT_FILL_RATIO;

    let mut bars = Vec::new();
    for (index, &count) in binned.counts.iter().enumerate() {
        if count == 0 {
            continue;
        }

        let height = count as f64 / denominator * plot.height;
        bars.push(BarRect {
            x: plot.left + index as f64 * bucket_width + (bucket_width - bar_width) * 0.5,
            y: plot.bottom() - height,
            width: bar_width,
            height,
        });
    }

    bars
}
