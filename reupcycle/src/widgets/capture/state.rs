use std::path::{Path, PathBuf};

use super::model::EMPTY_PROCESSOR_OUTPUT;

/// Captured image location and the last processor outcome.
#[derive(Debug, Default)]
pub(super) struct CaptureState {
    image_path: Option<PathBuf>,
    output: Option<String>,
    error: Option<String>,
    busy: bool,
}

impl CaptureState {
    pub(super) fn image_path(&self) -> Option<&Path> {
        self.image_path.as_deref()
    }

    pub(super) fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    pub(super) fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub(super) fn is_busy(&self) -> bool {
        self.busy
    }

    pub(super) fn begin_work(&mut self) {
        self.busy = true;
        self.error = None;
    }

    /// Record the saved PNG location; `None` means the save failed.
    pub(super) fn set_image(&mut self, path: Option<PathBuf>) {
        self.busy = false;
        self.output = None;
        self.error = match path {
            Some(_) => None,
            None => Some(String::from("The image could not be saved.")),
        };
        self.image_path = path;
    }

    pub(super) fn set_output(&mut self, output: String) {
        self.busy = false;
        self.error = None;
        self.output = if output.trim().is_empty() {
            Some(String::from(EMPTY_PROCESSOR_OUTPUT))
        } else {
            Some(output)
        };
    }

    pub(super) fn set_error(&mut self, message: String) {
        self.busy = false;
        self.error = Some(message);
    }

    pub(super) fn clear(&mut self) {
        *self = Self::default();
    }
}
