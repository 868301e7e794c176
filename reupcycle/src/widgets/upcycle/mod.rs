mod event;
mod model;
mod reducer;
mod services;
mod state;
pub(crate) mod view;

pub(crate) use event::{UpcycleEffect, UpcycleEvent, UpcycleIntent};
use iced::Task;
pub(crate) use model::{DEFAULT_SUGGESTION_DELAY, UpcycleViewModel};
pub(crate) use reducer::UpcycleCtx;
use state::UpcycleState;

/// Upcycle widget: a waste-type form backed by a delayed suggestion task.
pub(crate) struct UpcycleWidget {
    state: UpcycleState,
}

impl UpcycleWidget {
    pub(crate) fn new() -> Self {
        Self {
            state: UpcycleState::default(),
        }
    }

    /// Reduce an intent event into state updates and effect events.
    pub(crate) fn reduce(
        &mut self,
        intent: UpcycleIntent,
        ctx: &UpcycleCtx,
    ) -> Task<UpcycleEvent> {
        reducer::reduce(&mut self.state, intent, ctx)
    }

    /// Build a read-only view model for the suggestion form.
    pub(crate) fn vm(&self) -> UpcycleViewModel<'_> {
        UpcycleViewModel {
            waste_type: self.state.waste_type(),
            suggestion: self.state.suggestion(),
            is_loading: self.state.is_loading(),
        }
    }

    /// Return whether a suggestion request is in flight.
    #[cfg(test)]
    pub(crate) fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    /// Return the pending request id for tests.
    #[cfg(test)]
    pub(crate) fn pending_request_id(&self) -> Option<u64> {
        self.state.pending_request_id()
    }
}
