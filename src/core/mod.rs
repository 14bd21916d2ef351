pub mod bars;
pub mod binning;
pub mod layout;
pub mod markers;
pub mod scale;
pub mod types;

pub use bars::{BarRect, BarSeries, OverlayBar, project_distribution_bars, project_overlay_bars};
pub use binning::{BinnedSeries, bin_series, series_mean, shared_max_count};
pub use layout::{PanelInsets, PlotArea};
pub use markers::{DEFAULT_MARKER_RADIUS, MarkerCircle, Polarity, project_markers};
pub use scale::AxisScale;
pub use types::ScatterPoint;
