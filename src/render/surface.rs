use serde::{Deserialize, Serialize};

use crate::error::{VizError, VizResult};

/// Density factor applied when the caller's environment reports none.
pub const DEFAULT_DENSITY: f64 = 1.0;

/// Logical size and display-density factor of a drawable surface.
///
/// The density is an injected configuration value, never an ambient global
/// read: callers look up their environment's device-pixel ratio (or keep the
/// default of 1.0) and pass it in, which keeps preparation deterministic and
/// testable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceSpec {
    pub logical_width: f64,
    pub logical_height: f64,
    #[serde(default = "default_density")]
    pub density: f64,
}

fn default_density() -> f64 {
    DEFAULT_DENSITY
}

impl SurfaceSpec {
    #[must_use]
    pub const fn new(logical_width: f64, logical_height: f64, density: f64) -> Self {
        Self {
            logical_width,
            logical_height,
            density,
        }
    }

    #[must_use]
    pub const fn with_default_density(logical_width: f64, logical_height: f64) -> Self {
        Self::new(logical_width, logical_height, DEFAULT_DENSITY)
    }

    /// Resolves the device-pixel backing resolution for this surface.
    ///
    /// Physical size is `round(logical x density)` per axis. A zero logical
    /// width or height is legal and yields a degenerate surface that renders
    /// empty; non-finite inputs and non-positive densities are rejected.
    pub fn prepare(self) -> VizResult<PreparedSurface> {
        if !self.logical_width.is_finite()
            || !self.logical_height.is_finite()
            || self.logical_width < 0.0
            || self.logical_height < 0.0
            || !self.density.is_finite()
            || self.density <= 0.0
        {
            return Err(VizError::InvalidSurface {
                width: self.logical_width,
                height: self.logical_height,
                density: self.density,
            });
        }

        Ok(PreparedSurface {
            spec: self,
            physical_width: (self.logical_width * self.density).round() as u32,
            physical_height: (self.logical_height * self.density).round() as u32,
        })
    }
}

/// A surface spec with its backing resolution resolved.
///
/// Draw commands are issued in logical units; backends scale by `density()`
/// so output stays crisp on high-density displays.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PreparedSurface {
    spec: SurfaceSpec,
    physical_width: u32,
    physical_height: u32,
}

impl PreparedSurface {
    #[must_use]
    pub fn spec(self) -> SurfaceSpec {
        self.spec
    }

    #[must_use]
    pub fn logical_width(self) -> f64 {
        self.spec.logical_width
    }

    #[must_use]
    pub fn logical_height(self) -> f64 {
        self.spec.logical_height
    }

    #[must_use]
    pub fn density(self) -> f64 {
        self.spec.density
    }

    #[must_use]
    pub fn physical_width(self) -> u32 {
        self.physical_width
    }

    #[must_use]
    pub fn physical_height(self) -> u32 {
        self.physical_height
    }

    /// True when the backing store has no pixels; renders complete but draw
    /// nothing.
    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.physical_width == 0 || self.physical_height == 0
    }
}
