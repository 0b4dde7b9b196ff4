//! Form flows: read input, call the backend, update the page.
//!
//! ARCHITECTURE
//! ============
//! Every flow is a plain async function taking its collaborators as
//! arguments: a [`TaskApi`](crate::net::api::TaskApi), a
//! [`Session`](crate::state::session::Session), a [`Shell`] and, on the
//! dashboard, a [`TaskListView`]. Pages pass the browser implementations;
//! tests pass recording fakes.

pub mod dashboard;
pub mod login;
pub mod register;

#[cfg(test)]
pub(crate) mod test_support;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use crate::net::api::ApiError;
use crate::net::types::Task;
use crate::pages::PageKind;
use crate::state::session::{KeyValueStore, Session};

pub const REGISTER_SUCCEEDED: &str = "Registration successful! Please login.";
pub const REGISTER_FAILED: &str = "Registration failed. Please try a different username.";
pub const LOGIN_SUCCEEDED: &str = "Login successful! Redirecting to dashboard...";
pub const LOGIN_FAILED: &str = "Login failed. Please check your username and password.";
pub const NOT_LOGGED_IN: &str = "You are not logged in!";
pub const TASKS_UNAVAILABLE: &str = "Could not load tasks.";

/// Longest server-provided cause shown in a notice, in characters.
const MAX_CAUSE_CHARS: usize = 200;

/// Browser surface a flow reports to.
pub trait Shell {
    /// Show a blocking notice.
    fn notify(&self, message: &str);

    fn navigate(&self, page: PageKind);
}

/// Sink for the dashboard list and its input.
pub trait TaskListView {
    /// Replace everything currently rendered with `tasks`.
    fn replace_tasks(&self, tasks: Vec<Task>);

    fn show_error(&self, message: &str);

    /// Empty the new-task description field.
    fn clear_draft(&self);
}

/// `base` followed by a short cause derived from `err`.
pub fn failure_notice(base: &str, err: &ApiError) -> String {
    match err {
        ApiError::Status { status, .. } if *status >= 500 => {
            format!("{base} (server error {status})")
        }
        ApiError::Status { body, .. } => match short_cause(body) {
            Some(cause) => format!("{base} ({cause})"),
            None => base.to_owned(),
        },
        ApiError::Network(_) | ApiError::Unavailable => {
            format!("{base} (could not reach the server)")
        }
        ApiError::Decode(_) => format!("{base} (unexpected response)"),
    }
}

/// First non-empty line of a 4xx body, capped at [`MAX_CAUSE_CHARS`].
/// Markup (an HTML error page) yields nothing.
fn short_cause(body: &str) -> Option<String> {
    let line = body.lines().map(str::trim).find(|line| !line.is_empty())?;
    if line.starts_with('<') {
        return None;
    }
    if line.chars().count() <= MAX_CAUSE_CHARS {
        return Some(line.to_owned());
    }
    let mut cut: String = line.chars().take(MAX_CAUSE_CHARS).collect();
    cut.push('…');
    Some(cut)
}

/// Forget the stored user and go back to the login page.
pub fn log_out<K, S>(session: &Session<K>, shell: &S)
where
    K: KeyValueStore,
    S: Shell,
{
    session.forget();
    log::info!("logged out");
    shell.navigate(PageKind::Login);
}
