use std::path::PathBuf;

/// Intent events handled by the capture widget.
#[derive(Debug, Clone)]
pub(crate) enum CaptureIntent {
    /// Import an image file from outside the app.
    Open(PathBuf),
    /// The PNG copy was written (or failed with `None`).
    Loaded(Option<PathBuf>),
    /// Hand the saved image to the configured processor.
    Analyze,
    /// The processor finished with its stdout or an error message.
    Analyzed(Result<String, String>),
    /// Forget the captured image.
    Clear,
}

/// Effect events produced by the capture reducer.
#[derive(Debug, Clone)]
pub(crate) enum CaptureEffect {
    Loaded(Option<PathBuf>),
    Analyzed(Result<String, String>),
    /// Ask the app to show the captured image screen.
    Present,
}

/// Capture event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum CaptureEvent {
    Intent(CaptureIntent),
    Effect(CaptureEffect),
}
