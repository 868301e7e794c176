mod event;
mod model;
mod reducer;
mod state;
pub(crate) mod view;

pub(crate) use event::{NavigationEffect, NavigationEvent, NavigationIntent};
use iced::Task;
pub(crate) use model::{NavigationViewModel, ScreenId};
pub(crate) use state::resolve;
use state::NavigationPath;

/// Navigation widget owning the path of drilled-into screens.
pub(crate) struct NavigationWidget {
    path: NavigationPath,
}

impl NavigationWidget {
    /// Construct with an empty path, showing the root screen.
    pub(crate) fn new() -> Self {
        Self {
            path: NavigationPath::new(),
        }
    }

    /// Reduce an intent event into path updates and effect events.
    pub(crate) fn reduce(
        &mut self,
        intent: NavigationIntent,
    ) -> Task<NavigationEvent> {
        reducer::reduce(&mut self.path, intent)
    }

    /// Return the currently visible screen.
    pub(crate) fn current(&self) -> ScreenId {
        resolve(self.path.entries())
    }

    /// Return the stored path entries, root excluded.
    #[cfg(test)]
    pub(crate) fn entries(&self) -> &[ScreenId] {
        self.path.entries()
    }

    /// Build a read-only view model for the header bar.
    pub(crate) fn vm(&self) -> NavigationViewModel {
        NavigationViewModel {
            current: self.path.current(),
            can_go_back: !self.path.is_empty(),
        }
    }
}
