use serde::{Deserialize, Serialize};

/// One scatter sample: sentiment score on x, engagement on y.
///
/// `size` is an optional marker radius override in logical pixels; when
/// absent the default radius applies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub size: Option<f64>,
}

impl ScatterPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y, size: None }
    }

    #[must_use]
    pub const fn with_size(x: f64, y: f64, size: f64) -> Self {
        Self {
            x,
            y,
            size: Some(size),
        }
    }
}
