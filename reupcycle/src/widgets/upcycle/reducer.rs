use std::time::Duration;

use iced::Task;

use super::event::{UpcycleEffect, UpcycleEvent, UpcycleIntent};
use super::services::suggest;
use super::state::UpcycleState;

/// Read-only context for upcycle reduction.
#[derive(Debug, Clone, Copy)]
pub(crate) struct UpcycleCtx {
    pub(crate) suggestion_delay: Duration,
}

/// Reduce an upcycle intent into state updates and effect tasks.
pub(crate) fn reduce(
    state: &mut UpcycleState,
    intent: UpcycleIntent,
    ctx: &UpcycleCtx,
) -> Task<UpcycleEvent> {
    match intent {
        UpcycleIntent::WasteTypeChanged(value) => {
            state.set_waste_type(value);
            Task::none()
        },
        UpcycleIntent::Submit => request_suggestion(state, ctx),
        UpcycleIntent::SuggestionReady {
            request_id,
            suggestion,
        } => {
            if !state.complete(request_id, suggestion) {
                log::debug!("discarding stale suggestion {request_id}");
            }
            Task::none()
        },
        UpcycleIntent::Reset => {
            if state.is_loading() {
                log::debug!("pending suggestion canceled");
            }
            state.reset();
            Task::none()
        },
    }
}

fn request_suggestion(
    state: &mut UpcycleState,
    ctx: &UpcycleCtx,
) -> Task<UpcycleEvent> {
    let request_id = state.begin_request();
    let waste_type = state.waste_type().to_string();
    log::info!("requesting upcycle suggestions for {waste_type:?}");

    let (task, handle) = Task::perform(
        suggest(waste_type, ctx.suggestion_delay),
        move |suggestion| {
            UpcycleEvent::Effect(UpcycleEffect::SuggestionReady {
                request_id,
                suggestion,
            })
        },
    )
    .abortable();
    state.attach_handle(request_id, handle);

    task
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{UpcycleCtx, reduce};
    use crate::widgets::upcycle::event::UpcycleIntent;
    use crate::widgets::upcycle::model::suggestion_for;
    use crate::widgets::upcycle::state::UpcycleState;

    fn ctx() -> UpcycleCtx {
        UpcycleCtx {
            suggestion_delay: Duration::from_secs(2),
        }
    }

    fn submit(state: &mut UpcycleState, waste_type: &str) -> u64 {
        let _task = reduce(
            state,
            UpcycleIntent::WasteTypeChanged(String::from(waste_type)),
            &ctx(),
        );
        let _task = reduce(state, UpcycleIntent::Submit, &ctx());
        state
            .pending_request_id()
            .expect("submit should leave a pending request")
    }

    #[test]
    fn given_submit_when_reduced_then_form_is_loading() {
        let mut state = UpcycleState::default();

        let _request = submit(&mut state, "plastic bottle");

        assert!(state.is_loading());
        assert_eq!(state.suggestion(), "");
    }

    #[test]
    fn given_glass_then_paper_when_both_resolve_then_paper_wins() {
        let mut state = UpcycleState::default();
        let glass = submit(&mut state, "glass");
        let paper = submit(&mut state, "paper");

        let _task = reduce(
            &mut state,
            UpcycleIntent::SuggestionReady {
                request_id: paper,
                suggestion: suggestion_for("paper"),
            },
            &ctx(),
        );
        let _task = reduce(
            &mut state,
            UpcycleIntent::SuggestionReady {
                request_id: glass,
                suggestion: suggestion_for("glass"),
            },
            &ctx(),
        );

        assert_eq!(state.suggestion(), "Example suggestions for paper");
        assert!(!state.is_loading());
    }

    #[test]
    fn given_glass_resolving_before_paper_when_reduced_then_glass_is_ignored()
    {
        let mut state = UpcycleState::default();
        let glass = submit(&mut state, "glass");
        let paper = submit(&mut state, "paper");

        let _task = reduce(
            &mut state,
            UpcycleIntent::SuggestionReady {
                request_id: glass,
                suggestion: suggestion_for("glass"),
            },
            &ctx(),
        );
        assert_eq!(state.suggestion(), "");
        assert!(state.is_loading());

        let _task = reduce(
            &mut state,
            UpcycleIntent::SuggestionReady {
                request_id: paper,
                suggestion: suggestion_for("paper"),
            },
            &ctx(),
        );
        assert!(state.suggestion().contains("paper"));
        assert!(!state.suggestion().contains("glass"));
    }

    #[test]
    fn given_reset_when_result_arrives_then_slot_stays_empty() {
        let mut state = UpcycleState::default();
        let request = submit(&mut state, "cardboard");

        let _task = reduce(&mut state, UpcycleIntent::Reset, &ctx());
        let _task = reduce(
            &mut state,
            UpcycleIntent::SuggestionReady {
                request_id: request,
                suggestion: suggestion_for("cardboard"),
            },
            &ctx(),
        );

        assert_eq!(state.suggestion(), "");
        assert_eq!(state.waste_type(), "");
        assert!(!state.is_loading());
    }

    #[test]
    fn given_empty_waste_type_when_submitted_then_request_is_accepted() {
        let mut state = UpcycleState::default();
        let request = submit(&mut state, "");

        let _task = reduce(
            &mut state,
            UpcycleIntent::SuggestionReady {
                request_id: request,
                suggestion: suggestion_for(""),
            },
            &ctx(),
        );

        assert_eq!(state.suggestion(), "Example suggestions for ");
    }
}
