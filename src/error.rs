use thiserror::Error;

/// Errors from the fallible edges of the sketchpad: export, configuration and file I/O.
///
/// Drawing, undo and redo never fail; they are no-ops when there is nothing to do.
#[derive(Debug, Error)]
pub enum SketchError {
    /// The configured canvas has a zero dimension, so there is nothing to rasterize
    #[error("canvas has no area ({width}x{height})")]
    EmptyCanvas { width: u32, height: u32 },

    /// Scaling the canvas for export overflows or exceeds the largest supported image
    #[error("export of a {width}x{height} canvas at {scale}x is too large")]
    CanvasTooLarge { width: u32, height: u32, scale: u32 },

    #[error("failed to encode image: {0}")]
    Encode(#[from] image::ImageError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// The browser refused one of the steps needed to download the export
    #[error("download failed: {0}")]
    Download(String),
}

pub type SketchResult<T> = Result<T, SketchError>;
