mod errors;
mod event;
mod model;
mod reducer;
mod services;
mod state;
pub(crate) mod view;

pub(crate) use event::{CaptureEffect, CaptureEvent, CaptureIntent};
use iced::Task;
pub(crate) use model::CaptureViewModel;
pub(crate) use reducer::CaptureCtx;
use state::CaptureState;

/// Capture widget: the image shown on the Recycle screen and the optional
/// external processor run against it.
pub(crate) struct CaptureWidget {
    state: CaptureState,
}

impl CaptureWidget {
    pub(crate) fn new() -> Self {
        Self {
            state: CaptureState::default(),
        }
    }

    /// Reduce an intent event into state updates and effect events.
    pub(crate) fn reduce(
        &mut self,
        intent: CaptureIntent,
        ctx: &CaptureCtx<'_>,
    ) -> Task<CaptureEvent> {
        reducer::reduce(&mut self.state, intent, ctx)
    }

    /// Build a read-only view model; `has_processor` enables analysis.
    pub(crate) fn vm(&self, has_processor: bool) -> CaptureViewModel<'_> {
        CaptureViewModel {
            image_path: self.state.image_path(),
            output: self.state.output(),
            error: self.state.error(),
            is_busy: self.state.is_busy(),
            can_analyze: has_processor
                && self.state.image_path().is_some()
                && !self.state.is_busy(),
        }
    }
}
