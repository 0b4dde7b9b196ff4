//! Login flow.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use super::{LOGIN_FAILED, LOGIN_SUCCEEDED, Shell, failure_notice};
use crate::net::api::{ApiError, TaskApi};
use crate::net::types::{Credentials, UserId};
use crate::pages::PageKind;
use crate::state::session::{KeyValueStore, Session, SessionError};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Session(#[from] SessionError),
}

impl LoginError {
    fn notice(&self) -> String {
        match self {
            Self::Api(e) => failure_notice(LOGIN_FAILED, e),
            Self::Session(_) => format!("{LOGIN_FAILED} (could not save session)"),
        }
    }
}

/// Authenticate, store the returned user id, then open the dashboard.
///
/// The id is written before navigation so the dashboard always finds it.
///
/// # Errors
///
/// Returns [`LoginError`] after notifying the user when the backend rejects
/// the credentials or the session cannot be stored. Nothing is persisted in
/// that case.
pub async fn submit_login<A, K, S>(
    api: &A,
    session: &Session<K>,
    shell: &S,
    credentials: Credentials,
) -> Result<UserId, LoginError>
where
    A: TaskApi + ?Sized,
    K: KeyValueStore,
    S: Shell + ?Sized,
{
    let outcome = match api.login(&credentials).await {
        Ok(resp) => session.remember(&resp.id).map(|()| resp.id).map_err(LoginError::from),
        Err(e) => Err(LoginError::from(e)),
    };

    match outcome {
        Ok(id) => {
            log::info!("logged in as user {id}");
            shell.notify(LOGIN_SUCCEEDED);
            shell.navigate(PageKind::Dashboard);
            Ok(id)
        }
        Err(e) => {
            log::warn!("login failed: {e}");
            shell.notify(&e.notice());
            Err(e)
        }
    }
}
