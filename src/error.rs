use thiserror::Error;

pub type VizResult<T> = Result<T, VizError>;

#[derive(Debug, Error)]
pub enum VizError {
    #[error("invalid surface: logical size {width}x{height}, density {density}")]
    InvalidSurface {
        width: f64,
        height: f64,
        density: f64,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
