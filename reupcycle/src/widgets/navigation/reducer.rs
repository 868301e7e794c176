use iced::Task;

use super::event::{NavigationEffect, NavigationEvent, NavigationIntent};
use super::state::NavigationPath;

/// Reduce a navigation intent into path updates and effect events.
pub(crate) fn reduce(
    path: &mut NavigationPath,
    intent: NavigationIntent,
) -> Task<NavigationEvent> {
    let effects = apply(path, intent);
    if effects.is_empty() {
        return Task::none();
    }

    Task::batch(
        effects
            .into_iter()
            .map(|effect| Task::done(NavigationEvent::Effect(effect))),
    )
}

/// Apply an intent to the path and return the resulting effects in order.
pub(crate) fn apply(
    path: &mut NavigationPath,
    intent: NavigationIntent,
) -> Vec<NavigationEffect> {
    match intent {
        NavigationIntent::Push(screen) => {
            path.push(screen);
            log::debug!("navigation push {screen:?}, depth {}", path.len());
            vec![NavigationEffect::Presented(screen)]
        },
        NavigationIntent::Pop => match path.pop() {
            Some(screen) => {
                log::debug!("navigation pop {screen:?}, depth {}", path.len());
                dismissed(path, [screen])
            },
            None => Vec::new(),
        },
        NavigationIntent::Reset => {
            let removed = path.reset();
            if !removed.is_empty() {
                log::debug!(
                    "navigation reset, {} screens removed",
                    removed.len()
                );
            }
            dismissed(path, removed)
        },
    }
}

fn dismissed(
    path: &NavigationPath,
    removed: impl IntoIterator<Item = super::model::ScreenId>,
) -> Vec<NavigationEffect> {
    let mut effects: Vec<NavigationEffect> = Vec::new();
    for screen in removed {
        let effect = NavigationEffect::Dismissed(screen);
        if !path.contains(screen) && !effects.contains(&effect) {
            effects.push(effect);
        }
    }
    effects
}
