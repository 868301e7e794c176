use std::path::Path;

/// File name used for the PNG copy of a captured image.
pub(crate) const CAPTURE_FILE_NAME: &str = "capture.png";

/// Text shown when the processor printed nothing.
pub(crate) const EMPTY_PROCESSOR_OUTPUT: &str = "No output";

/// Read-only view model for the captured image screen.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CaptureViewModel<'a> {
    pub(crate) image_path: Option<&'a Path>,
    pub(crate) output: Option<&'a str>,
    pub(crate) error: Option<&'a str>,
    pub(crate) is_busy: bool,
    pub(crate) can_analyze: bool,
}
