use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use image::{DynamicImage, ImageFormat};

use super::errors::CaptureError;
use super::model::CAPTURE_FILE_NAME;

/// Write `image` as PNG to `dir/filename`.
///
/// Failures are logged and reported as `None`; callers never see an error.
pub(crate) fn save_image_to_disk(
    image: &DynamicImage,
    dir: &Path,
    filename: &str,
) -> Option<PathBuf> {
    match write_png(image, dir, filename) {
        Ok(path) => {
            log::info!("captured image saved to {}", path.display());
            Some(path)
        },
        Err(err) => {
            log::warn!("failed to save captured image: {err}");
            None
        },
    }
}

/// Decode `source` and store a PNG copy of it in `dir`.
pub(crate) fn load_capture(source: &Path, dir: &Path) -> Option<PathBuf> {
    let image = match image::open(source) {
        Ok(image) => image,
        Err(err) => {
            log::warn!("failed to read image {}: {err}", source.display());
            return None;
        },
    };

    save_image_to_disk(&image, dir, CAPTURE_FILE_NAME)
}

/// Run the configured processor on `image_path` and return its stdout.
///
/// `command` is a shell-style command line; the image path is appended as
/// the last argument.
pub(crate) fn run_image_processor(
    command: &str,
    image_path: &Path,
) -> Result<String, CaptureError> {
    let (program, args) = parse_command_line(command)?;
    log::info!("running image processor {program} on {}", image_path.display());

    let output = Command::new(&program).args(&args).arg(image_path).output()?;
    if !output.status.success() {
        return Err(CaptureError::ProcessorFailed {
            status: output.status.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim_end().to_string())
}

fn write_png(
    image: &DynamicImage,
    dir: &Path,
    filename: &str,
) -> Result<PathBuf, CaptureError> {
    fs::create_dir_all(dir)?;
    let path = dir.join(filename);
    image.save_with_format(&path, ImageFormat::Png)?;
    Ok(path)
}

fn parse_command_line(
    input: &str,
) -> Result<(String, Vec<String>), CaptureError> {
    let parts = shell_words::split(input)
        .map_err(|err| CaptureError::InvalidCommand(format!("{err}")))?;
    let Some((program, args)) = parts.split_first() else {
        return Err(CaptureError::EmptyCommand);
    };

    Ok((program.clone(), args.to_vec()))
}
