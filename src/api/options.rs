use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::error::{VizError, VizResult};

/// Default bucket count for the verified/unverified overlay panel.
pub const DEFAULT_OVERLAY_BINS: NonZeroU32 = NonZeroU32::new(24).unwrap();

/// Default bucket count for the single-series distribution panel.
pub const DEFAULT_DISTRIBUTION_BINS: NonZeroU32 = NonZeroU32::new(30).unwrap();

/// Caller-facing knobs for one panel render.
///
/// Serializable so host applications can persist panel setup without
/// inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RenderOptions {
    /// Histogram bucket count. `None` applies the panel default (24 for the
    /// overlay, 30 for the distribution). The scatter panel ignores it.
    #[serde(default)]
    pub bins: Option<NonZeroU32>,
}

impl RenderOptions {
    #[must_use]
    pub const fn with_bins(bins: NonZeroU32) -> Self {
        Self { bins: Some(bins) }
    }

    /// Builds options from an untrusted integer, rejecting zero.
    pub fn try_with_bins(bins: u32) -> VizResult<Self> {
        NonZeroU32::new(bins)
            .map(|bins| Self { bins: Some(bins) })
            .ok_or_else(|| VizError::InvalidConfig("bins must be a positive integer".to_owned()))
    }

    #[must_use]
    pub fn resolved_bins(self, panel_default: NonZeroU32) -> NonZeroU32 {
        self.bins.unwrap_or(panel_default)
    }
}
