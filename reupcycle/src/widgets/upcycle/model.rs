use std::time::Duration;

/// Delay before a canned suggestion is delivered.
pub(crate) const DEFAULT_SUGGESTION_DELAY: Duration = Duration::from_secs(2);

/// Build the canned suggestion text for a waste type.
pub(crate) fn suggestion_for(waste_type: &str) -> String {
    format!("Example suggestions for {waste_type}")
}

/// Read-only view model for the suggestion form.
#[derive(Debug, Clone, Copy)]
pub(crate) struct UpcycleViewModel<'a> {
    pub(crate) waste_type: &'a str,
    pub(crate) suggestion: &'a str,
    pub(crate) is_loading: bool,
}
