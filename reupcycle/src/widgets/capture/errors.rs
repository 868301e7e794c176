use thiserror::Error;

/// Errors emitted while storing or processing a captured image.
#[derive(Debug, Error)]
pub(crate) enum CaptureError {
    /// Filesystem or process spawn failed.
    #[error("capture IO failed: {0}")]
    Io(#[from] std::io::Error),
    /// Decoding or PNG encoding failed.
    #[error("image conversion failed: {0}")]
    Image(#[from] image::ImageError),
    /// No program was configured.
    #[error("image processor command is empty")]
    EmptyCommand,
    /// The configured command line could not be split.
    #[error("image processor command is invalid: {0}")]
    InvalidCommand(String),
    /// The processor ran but reported failure.
    #[error("image processor exited with {status}: {stderr}")]
    ProcessorFailed { status: String, stderr: String },
}
