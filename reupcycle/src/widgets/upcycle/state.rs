use iced::task::Handle;

/// A suggestion request that has not resolved yet.
struct PendingSuggestion {
    request_id: u64,
    handle: Option<Handle>,
}

/// Form input plus the single suggestion slot.
pub(super) struct UpcycleState {
    waste_type: String,
    suggestion: String,
    pending: Option<PendingSuggestion>,
    next_request_id: u64,
}

impl Default for UpcycleState {
    fn default() -> Self {
        Self {
            waste_type: String::new(),
            suggestion: String::new(),
            pending: None,
            next_request_id: 1,
        }
    }
}

impl UpcycleState {
    pub(super) fn waste_type(&self) -> &str {
        &self.waste_type
    }

    pub(super) fn suggestion(&self) -> &str {
        &self.suggestion
    }

    pub(super) fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    pub(super) fn pending_request_id(&self) -> Option<u64> {
        self.pending.as_ref().map(|pending| pending.request_id)
    }

    pub(super) fn set_waste_type(&mut self, value: String) {
        self.waste_type = value;
    }

    /// Start a new request, superseding any pending one.
    pub(super) fn begin_request(&mut self) -> u64 {
        self.cancel_pending();
        let request_id = self.next_request_id;
        self.next_request_id += 1;
        self.pending = Some(PendingSuggestion {
            request_id,
            handle: None,
        });
        request_id
    }

    /// Keep the abort handle of the task serving `request_id`.
    pub(super) fn attach_handle(&mut self, request_id: u64, handle: Handle) {
        match self.pending.as_mut() {
            Some(pending) if pending.request_id == request_id => {
                pending.handle = Some(handle);
            },
            _ => handle.abort(),
        }
    }

    /// Store `suggestion` if `request_id` is the latest request.
    ///
    /// Returns `false` when the result is stale and was discarded.
    pub(super) fn complete(
        &mut self,
        request_id: u64,
        suggestion: String,
    ) -> bool {
        if self.pending_request_id() != Some(request_id) {
            return false;
        }

        self.pending = None;
        self.suggestion = suggestion;
        true
    }

    /// Abort the pending request, if any. Returns whether one was pending.
    pub(super) fn cancel_pending(&mut self) -> bool {
        match self.pending.take() {
            Some(pending) => {
                if let Some(handle) = pending.handle {
                    handle.abort();
                }
                true
            },
            None => false,
        }
    }

    /// Cancel pending work and clear the form.
    pub(super) fn reset(&mut self) {
        self.cancel_pending();
        self.waste_type.clear();
        self.suggestion.clear();
    }
}
