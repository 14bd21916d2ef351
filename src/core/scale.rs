use serde::{Deserialize, Serialize};

use crate::error::{VizError, VizResult};

/// Linear mapping from a data domain onto a pixel interval.
///
/// The pixel interval may run in either direction. Y-axes pass
/// `px_start` = plot bottom and `px_end` = plot top so larger values land
/// higher on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisScale {
    domain_start: f64,
    domain_end: f64,
    px_start: f64,
    px_end: f64,
}

impl AxisScale {
    pub fn new(domain_start: f64, domain_end: f64, px_start: f64, px_end: f64) -> VizResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(VizError::InvalidData(
                "scale domain must be finite and non-empty".to_owned(),
            ));
        }

        if !px_start.is_finite() || !px_end.is_finite() {
            return Err(VizError::InvalidData(
                "scale pixel range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            px_start,
            px_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn pixel_range(self) -> (f64, f64) {
        (self.px_start, self.px_end)
    }

    pub fn value_to_pixel(self, value: f64) -> VizResult<f64> {
        if !value.is_finite() {
            return Err(VizError::InvalidData("value must be finite".to_owned()));
        }

        let span = self.domain_end - self.domain_start;
        let normalized = (value - self.domain_start) / span;
        Ok(self.px_start + normalized * (self.px_end - self.px_start))
    }

    pub fn pixel_to_value(self, pixel: f64) -> VizResult<f64> {
        if !pixel.is_finite() {
            return Err(VizError::InvalidData("pixel must be finite".to_owned()));
        }

        let px_span = self.px_end - self.px_start;
        if px_span == 0.0 {
            return Err(VizError::InvalidData(
                "scale pixel range is empty".to_owned(),
            ));
        }

        let normalized = (pixel - self.px_start) / px_span;
        Ok(self.domain_start + normalized * (self.domain_end - self.domain_start))
    }
}
