use std::path::{Path, PathBuf};

use iced::Task;

use super::event::{CaptureEffect, CaptureEvent, CaptureIntent};
use super::services::{load_capture, run_image_processor};
use super::state::CaptureState;

/// Read-only context for capture reduction.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CaptureCtx<'a> {
    pub(crate) captures_dir: &'a Path,
    pub(crate) image_processor: Option<&'a str>,
}

/// Reduce a capture intent into state updates and effect tasks.
pub(crate) fn reduce(
    state: &mut CaptureState,
    intent: CaptureIntent,
    ctx: &CaptureCtx<'_>,
) -> Task<CaptureEvent> {
    match intent {
        CaptureIntent::Open(source) => {
            state.begin_work();
            request_load(source, ctx.captures_dir.to_path_buf())
        },
        CaptureIntent::Loaded(path) => {
            state.set_image(path);
            Task::done(CaptureEvent::Effect(CaptureEffect::Present))
        },
        CaptureIntent::Analyze => request_analyze(state, ctx),
        CaptureIntent::Analyzed(Ok(output)) => {
            state.set_output(output);
            Task::none()
        },
        CaptureIntent::Analyzed(Err(message)) => {
            log::warn!("image processor failed: {message}");
            state.set_error(message);
            Task::none()
        },
        CaptureIntent::Clear => {
            state.clear();
            Task::none()
        },
    }
}

fn request_load(source: PathBuf, dir: PathBuf) -> Task<CaptureEvent> {
    Task::perform(async move { load_capture(&source, &dir) }, |path| {
        CaptureEvent::Effect(CaptureEffect::Loaded(path))
    })
}

fn request_analyze(
    state: &mut CaptureState,
    ctx: &CaptureCtx<'_>,
) -> Task<CaptureEvent> {
    if state.is_busy() {
        return Task::none();
    }
    let Some(image_path) = state.image_path().map(Path::to_path_buf) else {
        log::debug!("analyze requested without a captured image");
        return Task::none();
    };
    let Some(command) = ctx.image_processor.map(str::to_string) else {
        log::debug!("analyze requested without a configured processor");
        return Task::none();
    };

    state.begin_work();
    Task::perform(
        async move {
            run_image_processor(&command, &image_path)
                .map_err(|err| format!("{err}"))
        },
        |result| CaptureEvent::Effect(CaptureEffect::Analyzed(result)),
    )
}
