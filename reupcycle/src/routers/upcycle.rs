use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::upcycle::{
    UpcycleCtx, UpcycleEffect, UpcycleEvent, UpcycleIntent,
};

/// Route an upcycle event through widget reduction or app orchestration.
pub(crate) fn route(app: &mut App, event: UpcycleEvent) -> Task<AppEvent> {
    match event {
        UpcycleEvent::Intent(intent) => route_intent(app, intent),
        UpcycleEvent::Effect(effect) => route_effect(effect),
    }
}

fn route_intent(app: &mut App, intent: UpcycleIntent) -> Task<AppEvent> {
    let ctx = UpcycleCtx {
        suggestion_delay: app.config.suggestion_delay(),
    };

    app.widgets
        .upcycle
        .reduce(intent, &ctx)
        .map(AppEvent::Upcycle)
}

fn route_effect(effect: UpcycleEffect) -> Task<AppEvent> {
    match effect {
        UpcycleEffect::SuggestionReady {
            request_id,
            suggestion,
        } => Task::done(AppEvent::Upcycle(UpcycleEvent::Intent(
            UpcycleIntent::SuggestionReady {
                request_id,
                suggestion,
            },
        ))),
    }
}
