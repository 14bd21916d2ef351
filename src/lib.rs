//! sentiplot-rs: fixed-purpose statistical panel renderer.
//!
//! A fallback renderer for an embedded article page when a full charting
//! stack is unavailable: a sentiment scatter, an overlaid
//! verified/unverified histogram, and a sentiment distribution with a mean
//! marker. `core` holds the deterministic geometry (scales, layout, binning,
//! projection), `render` the backend-agnostic draw primitives and backends,
//! `api` the three public panel operations.
//!
//! Rendering is synchronous and stateless: every call prepares the surface,
//! clears it, and repaints from scratch. Calls targeting the same surface
//! must be serialized by the caller; calls on distinct surfaces are fully
//! independent.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{RenderOptions, render_distribution, render_overlay_histogram, render_scatter};
pub use error::{VizError, VizResult};
pub use render::{NullRenderer, Renderer, SurfaceSpec};
