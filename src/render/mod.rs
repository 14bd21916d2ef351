mod frame;
mod null_renderer;
mod primitives;
mod surface;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{
    CirclePrimitive, Color, LinePrimitive, LineStrokeStyle, RectPrimitive, TextHAlign,
    TextOrientation, TextPrimitive,
};
pub use surface::{DEFAULT_DENSITY, PreparedSurface, SurfaceSpec};

use crate::error::VizResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame`, so
/// drawing code stays isolated from panel layout and binning logic.
pub trait Renderer {
    /// Wipes the backing store for `surface` to fully transparent.
    fn clear(&mut self, surface: &PreparedSurface) -> VizResult<()>;

    /// Clears and redraws the full frame. Every call is a complete repaint;
    /// no state survives between calls.
    fn render(&mut self, frame: &RenderFrame) -> VizResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoRenderStats, CairoRenderer};
