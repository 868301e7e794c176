use super::model::ScreenId;

/// Return the visible screen for `path`: its last entry, or the root.
pub(crate) fn resolve(path: &[ScreenId]) -> ScreenId {
    path.last().copied().unwrap_or(ScreenId::ROOT)
}

/// Stack of screens drilled into from the root. The root itself is never
/// stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct NavigationPath {
    entries: Vec<ScreenId>,
}

impl NavigationPath {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn entries(&self) -> &[ScreenId] {
        &self.entries
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn current(&self) -> ScreenId {
        resolve(&self.entries)
    }

    pub(crate) fn contains(&self, screen: ScreenId) -> bool {
        self.entries.contains(&screen)
    }

    pub(crate) fn push(&mut self, screen: ScreenId) {
        self.entries.push(screen);
    }

    /// Remove the top entry. Popping an empty path is a no-op.
    pub(crate) fn pop(&mut self) -> Option<ScreenId> {
        self.entries.pop()
    }

    /// Clear back to the root, returning removed entries top first.
    pub(crate) fn reset(&mut self) -> Vec<ScreenId> {
        let mut removed = std::mem::take(&mut self.entries);
        removed.reverse();
        removed
    }
}
