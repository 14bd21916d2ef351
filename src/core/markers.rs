use serde::{Deserialize, Serialize};

use crate::core::{AxisScale, ScatterPoint};
use crate::error::{VizError, VizResult};

/// Marker radius in logical pixels when a point carries no size override.
pub const DEFAULT_MARKER_RADIUS: f64 = 8.0;

/// Fill bucket keyed on the sign of the sentiment value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Polarity {
    Positive,
    NonPositive,
}

impl Polarity {
    #[must_use]
    pub fn of(x: f64) -> Self {
        if x > 0.0 {
            Self::Positive
        } else {
            Self::NonPositive
        }
    }
}

/// Projected scatter marker in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerCircle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub polarity: Polarity,
}

/// Projects scatter points into marker circles.
///
/// Deterministic and side-effect free so rendering and tests consume the
/// exact same geometry output.
pub fn project_markers(
    points: &[ScatterPoint],
    x_scale: AxisScale,
    y_scale: AxisScale,
) -> VizResult<Vec<MarkerCircle>> {
    let mut markers = Vec::with_capacity(points.len());
    for point in points {
        let radius = point.size.unwrap_or(DEFAULT_MARKER_RADIUS);
        if !radius.is_finite() || radius <= 0.0 {
            return Err(VizError::InvalidData(
                "marker size must be finite and > 0".to_owned(),
            ));
        }

        markers.push(MarkerCircle {
            x: x_scale.value_to_pixel(point.x)?,
            y: y_scale.value_to_pixel(point.y)?,
            radius,
            polarity: Polarity::of(point.x),
        });
    }

    Ok(markers)
}
