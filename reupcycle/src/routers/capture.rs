use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::capture::{
    CaptureCtx, CaptureEffect, CaptureEvent, CaptureIntent,
};
use crate::widgets::navigation::{NavigationEvent, NavigationIntent, ScreenId};

/// Route a capture event through widget reduction or app orchestration.
pub(crate) fn route(app: &mut App, event: CaptureEvent) -> Task<AppEvent> {
    match event {
        CaptureEvent::Intent(intent) => route_intent(app, intent),
        CaptureEvent::Effect(effect) => route_effect(app, effect),
    }
}

fn route_intent(app: &mut App, intent: CaptureIntent) -> Task<AppEvent> {
    let captures_dir = app.config.captures_dir();
    let ctx = CaptureCtx {
        captures_dir: &captures_dir,
        image_processor: app.config.image_processor(),
    };

    app.widgets
        .capture
        .reduce(intent, &ctx)
        .map(AppEvent::Capture)
}

fn route_effect(app: &mut App, effect: CaptureEffect) -> Task<AppEvent> {
    use CaptureEffect as E;

    match effect {
        E::Loaded(path) => Task::done(AppEvent::Capture(CaptureEvent::Intent(
            CaptureIntent::Loaded(path),
        ))),
        E::Analyzed(result) => Task::done(AppEvent::Capture(
            CaptureEvent::Intent(CaptureIntent::Analyzed(result)),
        )),
        E::Present => match present_intent(app) {
            Some(intent) => Task::done(AppEvent::Navigation(
                NavigationEvent::Intent(intent),
            )),
            None => Task::none(),
        },
    }
}

/// Navigation needed to bring the Recycle screen into view, if any.
fn present_intent(app: &App) -> Option<NavigationIntent> {
    if app.widgets.navigation.current() == ScreenId::Recycle {
        return None;
    }
    Some(NavigationIntent::Push(ScreenId::Recycle))
}
