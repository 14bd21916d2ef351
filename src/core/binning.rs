use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::error::{VizError, VizResult};

/// Per-bucket counts for one value series over a fixed domain.
///
/// Values below the domain minimum are excluded from every bucket and only
/// tallied in `dropped_below`; values at or past the domain maximum clamp
/// into the last bucket. The asymmetry matches the published panels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinnedSeries {
    pub counts: Vec<usize>,
    pub dropped_below: usize,
}

impl BinnedSeries {
    #[must_use]
    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// Counts `values` into `bins` equal-width buckets over
/// `[domain_start, domain_end]`.
pub fn bin_series(
    values: &[f64],
    domain_start: f64,
    domain_end: f64,
    bins: NonZeroU32,
) -> VizResult<BinnedSeries> {
    if !domain_start.is_finite() || !domain_end.is_finite() || domain_start >= domain_end {
        return Err(VizError::InvalidData(
            "bin domain must be finite and non-empty".to_owned(),
        ));
    }

    let bin_count = bins.get() as usize;
    let bucket_width = (domain_end - domain_start) / bin_count as f64;

    let mut counts = vec![0usize; bin_count];
    let mut dropped_below = 0usize;
    for &value in values {
        if !value.is_finite() {
            return Err(VizError::InvalidData(
                "series values must be finite".to_owned(),
            ));
        }

        let index = ((value - domain_start) / bucket_width).floor();
        if index < 0.0 {
            dropped_below += 1;
            continue;
        }

        let index = (index as usize).min(bin_count - 1);
        counts[index] += 1;
    }

    Ok(BinnedSeries {
        counts,
        dropped_below,
    })
}

/// Arithmetic mean with an explicit zero fallback for the empty series.
#[must_use]
pub fn series_mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Shared bar-height denominator across one or more binned series, floored
/// at 1 so all-zero panels still divide safely.
#[must_use]
pub fn shared_max_count(series: &[&BinnedSeries]) -> usize {
    series
        .iter()
        .map(|binned| binned.max_count())
        .max()
        .unwrap_or(0)
        .max(1)
}
