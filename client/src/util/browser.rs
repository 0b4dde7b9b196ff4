//! Browser implementations of the flow collaborators.
//!
//! TRADE-OFFS
//! ==========
//! Notices use the blocking `window.alert` the pages have always used.
//! Outside the browser (SSR, unit tests) notices go to the log and
//! navigation is a no-op.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

use leptos::prelude::*;

use crate::flows::{Shell, TaskListView};
use crate::net::types::Task;
use crate::pages::PageKind;
use crate::state::tasks::TaskListState;

/// [`Shell`] backed by `window.alert` and `window.location`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserShell;

impl Shell for BrowserShell {
    fn notify(&self, message: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(message);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            log::info!("notice: {message}");
        }
    }

    fn navigate(&self, page: PageKind) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(page.path());
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            log::debug!("navigate to {}", page.path());
        }
    }
}

/// [`TaskListView`] writing into the dashboard's signals.
#[derive(Clone, Copy, Debug)]
pub struct SignalTaskList {
    pub tasks: RwSignal<TaskListState>,
    pub draft: RwSignal<String>,
}

impl TaskListView for SignalTaskList {
    fn replace_tasks(&self, tasks: Vec<Task>) {
        self.tasks.update(|state| state.replace(tasks));
    }

    fn show_error(&self, message: &str) {
        self.tasks.update(|state| state.fail(message));
    }

    fn clear_draft(&self) {
        self.draft.set(String::new());
    }
}
