/// Identifier of a single screen, used as the routing key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum ScreenId {
    Welcome,
    Home,
    Recycle,
    LearnMore,
    Upcycle,
    Help,
}

impl ScreenId {
    /// Screen rendered while the navigation path is empty.
    pub(crate) const ROOT: ScreenId = ScreenId::Welcome;

    /// All screen identifiers in declaration order.
    #[cfg(test)]
    pub(crate) const ALL: [ScreenId; 6] = [
        ScreenId::Welcome,
        ScreenId::Home,
        ScreenId::Recycle,
        ScreenId::LearnMore,
        ScreenId::Upcycle,
        ScreenId::Help,
    ];

    /// Title shown in the header bar while this screen is visible.
    pub(crate) fn title(self) -> &'static str {
        match self {
            ScreenId::Welcome => "ReUpcycle Home",
            ScreenId::Home => "Home",
            ScreenId::Recycle => "Captured Image",
            ScreenId::LearnMore => "Learn More",
            ScreenId::Upcycle => "Upcycle Suggestions",
            ScreenId::Help => "Help",
        }
    }

    /// Screens offered as forward links from this screen's menu.
    ///
    /// `Recycle` is not listed anywhere: it is only presented by an external
    /// trigger (the `--image` command-line argument).
    pub(crate) fn destinations(self) -> &'static [ScreenId] {
        match self {
            ScreenId::Welcome => &[ScreenId::Home],
            ScreenId::Home => {
                &[ScreenId::Upcycle, ScreenId::LearnMore, ScreenId::Help]
            },
            ScreenId::Recycle
            | ScreenId::LearnMore
            | ScreenId::Upcycle
            | ScreenId::Help => &[],
        }
    }
}

/// Read-only view model for the header bar.
#[derive(Debug, Clone, Copy)]
pub(crate) struct NavigationViewModel {
    pub(crate) current: ScreenId,
    pub(crate) can_go_back: bool,
}
