//! Registration flow.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use super::{REGISTER_FAILED, REGISTER_SUCCEEDED, Shell, failure_notice};
use crate::net::api::{ApiError, TaskApi};
use crate::net::types::Credentials;
use crate::pages::PageKind;

/// Create an account, then send the user to the login page.
///
/// # Errors
///
/// Returns the [`ApiError`] of a failed registration after notifying the user.
pub async fn submit_registration<A, S>(api: &A, shell: &S, credentials: Credentials) -> Result<(), ApiError>
where
    A: TaskApi + ?Sized,
    S: Shell + ?Sized,
{
    match api.register(&credentials).await {
        Ok(()) => {
            log::info!("registered user {}", credentials.username);
            shell.notify(REGISTER_SUCCEEDED);
            shell.navigate(PageKind::Login);
            Ok(())
        }
        Err(e) => {
            log::warn!("registration failed: {e}");
            shell.notify(&failure_notice(REGISTER_FAILED, &e));
            Err(e)
        }
    }
}
