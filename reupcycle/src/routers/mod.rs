use iced::Task;
use iced::keyboard::{self, Key, key::Named};

use crate::app::{App, AppEvent};
use crate::widgets::navigation::{NavigationEvent, NavigationIntent};

pub(crate) mod capture;
pub(crate) mod navigation;
pub(crate) mod upcycle;

pub(crate) fn route(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    match event {
        AppEvent::Navigation(event) => navigation::route(app, event),
        AppEvent::Upcycle(event) => upcycle::route(app, event),
        AppEvent::Capture(event) => capture::route(app, event),
        AppEvent::Keyboard(event) => route_keyboard(app, event),
    }
}

fn route_keyboard(app: &mut App, event: keyboard::Event) -> Task<AppEvent> {
    let keyboard::Event::KeyPressed { key, .. } = event else {
        return Task::none();
    };

    match shortcut_intent(&key) {
        Some(intent) => {
            navigation::route(app, NavigationEvent::Intent(intent))
        },
        None => Task::none(),
    }
}

/// Map a pressed key to a navigation shortcut.
fn shortcut_intent(key: &Key) -> Option<NavigationIntent> {
    match key {
        Key::Named(Named::Escape) => Some(NavigationIntent::Pop),
        Key::Named(Named::Home) => Some(NavigationIntent::Reset),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use iced::keyboard::Key;
    use iced::keyboard::key::Named;

    use super::{route, shortcut_intent};
    use crate::app::{App, AppEvent};
    use crate::config::AppConfig;
    use crate::widgets::navigation::{
        NavigationEffect, NavigationEvent, NavigationIntent, ScreenId,
    };
    use crate::widgets::upcycle::{UpcycleEvent, UpcycleIntent};

    fn app() -> App {
        App::with_config(AppConfig::default())
    }

    fn navigate(app: &mut App, intent: NavigationIntent) {
        let _task = route(
            app,
            AppEvent::Navigation(NavigationEvent::Intent(intent)),
        );
    }

    fn navigation_effect(app: &mut App, effect: NavigationEffect) {
        let _task = route(
            app,
            AppEvent::Navigation(NavigationEvent::Effect(effect)),
        );
    }

    fn upcycle(app: &mut App, intent: UpcycleIntent) {
        let _task = route(app, AppEvent::Upcycle(UpcycleEvent::Intent(intent)));
    }

    #[test]
    fn given_get_started_then_upcycle_when_routed_then_upcycle_is_visible() {
        let mut app = app();

        navigate(&mut app, NavigationIntent::Push(ScreenId::Home));
        navigate(&mut app, NavigationIntent::Push(ScreenId::Upcycle));

        assert_eq!(app.widgets.navigation.current(), ScreenId::Upcycle);
        assert_eq!(
            app.widgets.navigation.entries(),
            &[ScreenId::Home, ScreenId::Upcycle]
        );
    }

    #[test]
    fn given_pending_suggestion_when_dismissed_then_late_result_is_dropped()
    {
        let mut app = app();
        navigate(&mut app, NavigationIntent::Push(ScreenId::Home));
        navigate(&mut app, NavigationIntent::Push(ScreenId::Upcycle));
        upcycle(
            &mut app,
            UpcycleIntent::WasteTypeChanged(String::from("glass")),
        );
        upcycle(&mut app, UpcycleIntent::Submit);
        let request_id = app
            .widgets
            .upcycle
            .pending_request_id()
            .expect("submit should be pending");

        navigate(&mut app, NavigationIntent::Pop);
        navigation_effect(
            &mut app,
            NavigationEffect::Dismissed(ScreenId::Upcycle),
        );
        upcycle(
            &mut app,
            UpcycleIntent::SuggestionReady {
                request_id,
                suggestion: String::from("Example suggestions for glass"),
            },
        );

        assert_eq!(app.widgets.navigation.current(), ScreenId::Home);
        assert!(!app.widgets.upcycle.is_loading());
        assert_eq!(app.widgets.upcycle.vm().suggestion, "");
    }

    #[test]
    fn given_upcycle_presented_again_then_form_starts_fresh() {
        let mut app = app();
        upcycle(
            &mut app,
            UpcycleIntent::WasteTypeChanged(String::from("paper")),
        );

        navigation_effect(
            &mut app,
            NavigationEffect::Presented(ScreenId::Upcycle),
        );

        assert_eq!(app.widgets.upcycle.vm().waste_type, "");
    }

    #[test]
    fn given_escape_key_when_mapped_then_pop_shortcut_is_returned() {
        let escape = Key::Named(Named::Escape);
        assert_eq!(shortcut_intent(&escape), Some(NavigationIntent::Pop));
    }

    #[test]
    fn given_home_key_when_mapped_then_reset_shortcut_is_returned() {
        let home = Key::Named(Named::Home);
        assert_eq!(shortcut_intent(&home), Some(NavigationIntent::Reset));
    }

    #[test]
    fn given_deep_path_when_reset_routed_then_welcome_is_visible() {
        let mut app = app();
        navigate(&mut app, NavigationIntent::Push(ScreenId::Home));
        navigate(&mut app, NavigationIntent::Push(ScreenId::Help));

        navigate(&mut app, NavigationIntent::Reset);

        assert_eq!(app.widgets.navigation.current(), ScreenId::Welcome);
        assert!(app.widgets.navigation.entries().is_empty());
    }

    #[test]
    fn given_character_key_when_mapped_then_no_shortcut_is_returned() {
        let key = Key::Character("b".into());
        assert_eq!(shortcut_intent(&key), None);
    }

    #[test]
    fn given_pop_shortcut_at_root_when_routed_then_welcome_stays_visible() {
        let mut app = app();

        navigate(&mut app, NavigationIntent::Pop);

        assert_eq!(app.widgets.navigation.current(), ScreenId::Welcome);
    }
}
