/// Intent events handled by the upcycle suggestion form.
#[derive(Debug, Clone)]
pub(crate) enum UpcycleIntent {
    /// The waste type text input changed.
    WasteTypeChanged(String),
    /// Request a suggestion for the current waste type.
    Submit,
    /// A suggestion task resolved.
    SuggestionReady { request_id: u64, suggestion: String },
    /// Cancel pending work and clear the form.
    Reset,
}

/// Effect events produced by the upcycle reducer.
#[derive(Debug, Clone)]
pub(crate) enum UpcycleEffect {
    /// The delayed suggestion task finished.
    SuggestionReady { request_id: u64, suggestion: String },
}

/// Upcycle event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum UpcycleEvent {
    Intent(UpcycleIntent),
    Effect(UpcycleEffect),
}
