//! Single-request guard for form submits.

#[cfg(test)]
#[path = "in_flight_test.rs"]
mod in_flight_test;

use leptos::prelude::*;

/// Tracks whether a form's request is pending. The submit button binds to
/// [`InFlight::is_busy`]; handlers call [`InFlight::try_begin`] and bail out
/// when it returns `false`.
#[derive(Clone, Copy, Debug)]
pub struct InFlight {
    busy: RwSignal<bool>,
}

impl InFlight {
    #[must_use]
    pub fn new() -> Self {
        Self { busy: RwSignal::new(false) }
    }

    /// Claim the guard. `false` when a request is already pending.
    pub fn try_begin(&self) -> bool {
        if self.busy.get_untracked() {
            return false;
        }
        self.busy.set(true);
        true
    }

    pub fn finish(&self) {
        self.busy.set(false);
    }

    /// Reactive read for `disabled=`.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy.get()
    }

    /// Release only on failure. A success navigates away, so the form stays
    /// disabled until the page unloads.
    pub fn release_on_error<T, E>(&self, result: &Result<T, E>) {
        if result.is_err() {
            self.finish();
        }
    }
}

impl Default for InFlight {
    fn default() -> Self {
        Self::new()
    }
}
