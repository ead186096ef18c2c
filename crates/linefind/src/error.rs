use thiserror::Error;

#[derive(Error, Debug)]
pub enum LineFindError {
    #[error("Invalid indices x={x}, y={y}")]
    InvalidIndex { x: i64, y: i64 },

    #[error("Position {index} out of range for {len} segments")]
    PositionOutOfRange { index: usize, len: usize },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("angle_epsilon not set")]
    MissingAngleEpsilon,

    #[error("Failed to load image: {0}")]
    ImageLoad(#[from] image::ImageError),

    #[error("No image loaded")]
    NoImageLoaded,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LineFindError {
    pub(crate) fn invalid_index(x: impl Into<i64>, y: impl Into<i64>) -> Self {
        Self::InvalidIndex { x: x.into(), y: y.into() }
    }
}

pub type Result<T> = std::result::Result<T, LineFindError>;
