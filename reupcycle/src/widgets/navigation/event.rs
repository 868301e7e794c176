use super::model::ScreenId;

/// Intent events emitted by menus, the header bar and keyboard shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NavigationIntent {
    /// Drill into a screen.
    Push(ScreenId),
    /// Go back one screen.
    Pop,
    /// Return to the root screen.
    Reset,
}

/// Effect events produced by the navigation reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NavigationEffect {
    /// A screen was pushed on top of the path.
    Presented(ScreenId),
    /// A screen left the path and no other instance of it remains.
    Dismissed(ScreenId),
}

/// Navigation event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum NavigationEvent {
    Intent(NavigationIntent),
    Effect(NavigationEffect),
}
