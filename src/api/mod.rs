mod distribution;
mod options;
mod overlay;
pub mod palette;
mod panel;
mod scatter;
mod snapshot;

pub use distribution::{build_distribution_frame, render_distribution};
pub use options::{DEFAULT_DISTRIBUTION_BINS, DEFAULT_OVERLAY_BINS, RenderOptions};
pub use overlay::{build_overlay_frame, render_overlay_histogram};
pub use scatter::{build_scatter_frame, render_scatter};
pub use snapshot::{FRAME_JSON_SCHEMA_V1, FrameJsonContractV1};
