use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::navigation::{
    NavigationEffect, NavigationEvent, NavigationIntent, ScreenId,
};
use crate::widgets::upcycle::{UpcycleEvent, UpcycleIntent};

/// Route a navigation event through widget reduction or app orchestration.
pub(crate) fn route(app: &mut App, event: NavigationEvent) -> Task<AppEvent> {
    match event {
        NavigationEvent::Intent(intent) => route_intent(app, intent),
        NavigationEvent::Effect(effect) => route_effect(app, effect),
    }
}

fn route_intent(app: &mut App, intent: NavigationIntent) -> Task<AppEvent> {
    app.widgets
        .navigation
        .reduce(intent)
        .map(AppEvent::Navigation)
}

fn route_effect(app: &mut App, effect: NavigationEffect) -> Task<AppEvent> {
    use NavigationEffect as E;

    match effect {
        // The suggestion form is scoped to one visit of the screen.
        E::Presented(ScreenId::Upcycle) | E::Dismissed(ScreenId::Upcycle) => {
            super::upcycle::route(
                app,
                UpcycleEvent::Intent(UpcycleIntent::Reset),
            )
        },
        E::Presented(screen) => {
            log::debug!("presented {screen:?}");
            Task::none()
        },
        E::Dismissed(screen) => {
            log::debug!("dismissed {screen:?}");
            Task::none()
        },
    }
}
