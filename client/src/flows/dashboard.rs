//! Dashboard flows: list the user's tasks and add new ones.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both flows need a logged-in user. Without one they notify, go to the
//! login page and never touch the network. The list is always re-fetched in
//! full; creating a task never edits the rendered list directly.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use super::{NOT_LOGGED_IN, Shell, TASKS_UNAVAILABLE, TaskListView};
use crate::net::api::{ApiError, TaskApi};
use crate::net::types::NewTask;
use crate::pages::PageKind;
use crate::state::session::{KeyValueStore, Session, SessionError};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DashboardError {
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

fn send_to_login<S: Shell + ?Sized>(shell: &S, err: SessionError) -> DashboardError {
    log::warn!("dashboard requires a session: {err}");
    shell.notify(NOT_LOGGED_IN);
    shell.navigate(PageKind::Login);
    DashboardError::Session(err)
}

/// Fetch the user's tasks and render them in server order.
///
/// Returns the number of rendered tasks.
///
/// # Errors
///
/// [`DashboardError::Session`] when no user is stored (the user has been sent
/// to the login page), [`DashboardError::Api`] when the fetch fails (the
/// previous list stays and the view shows an error line).
pub async fn refresh_tasks<A, K, S, V>(
    api: &A,
    session: &Session<K>,
    shell: &S,
    view: &V,
) -> Result<usize, DashboardError>
where
    A: TaskApi + ?Sized,
    K: KeyValueStore,
    S: Shell + ?Sized,
    V: TaskListView + ?Sized,
{
    let user_id = session.user_id().map_err(|e| send_to_login(shell, e))?;

    match api.list_tasks(&user_id).await {
        Ok(tasks) => {
            let count = tasks.len();
            log::debug!("rendering {count} tasks for user {user_id}");
            view.replace_tasks(tasks);
            Ok(count)
        }
        Err(e) => {
            log::warn!("task list fetch failed: {e}");
            view.show_error(TASKS_UNAVAILABLE);
            Err(e.into())
        }
    }
}

/// Create a task for the logged-in user, clear the input and re-fetch.
///
/// The create response is not inspected: a rejected or failed create is
/// logged and the list is refreshed anyway. The returned result is that of
/// the refresh.
///
/// # Errors
///
/// Same as [`refresh_tasks`]; a missing or non-numeric stored user id takes
/// the login redirect without any request.
pub async fn create_task<A, K, S, V>(
    api: &A,
    session: &Session<K>,
    shell: &S,
    view: &V,
    description: String,
) -> Result<usize, DashboardError>
where
    A: TaskApi + ?Sized,
    K: KeyValueStore,
    S: Shell + ?Sized,
    V: TaskListView + ?Sized,
{
    let user_id = session.numeric_user_id().map_err(|e| send_to_login(shell, e))?;

    let task = NewTask { task_description: description, user_id };
    if let Err(e) = api.create_task(&task).await {
        log::warn!("task create failed, refreshing anyway: {e}");
    }

    view.clear_draft();
    refresh_tasks(api, session, shell, view).await
}
