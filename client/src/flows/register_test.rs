use futures::executor::block_on;

use super::*;
use crate::flows::test_support::{Call, FakeApi, RecordingShell, ShellEvent};

#[test]
fn success_posts_credentials_once_and_goes_to_login() {
    let api = FakeApi::default();
    api.push_register(Ok(()));
    let shell = RecordingShell::default();

    let result = block_on(submit_registration(&api, &shell, Credentials::new("alice", "pw")));

    assert_eq!(result, Ok(()));
    assert_eq!(api.calls(), [Call::Register(Credentials::new("alice", "pw"))]);
    assert_eq!(
        shell.events(),
        [ShellEvent::Notify(REGISTER_SUCCEEDED.to_owned()), ShellEvent::Navigate(PageKind::Login)]
    );
}

#[test]
fn rejected_registration_notifies_and_stays() {
    let api = FakeApi::default();
    api.push_register(Err(ApiError::Status { status: 500, body: "Error registering user.".to_owned() }));
    let shell = RecordingShell::default();

    let result = block_on(submit_registration(&api, &shell, Credentials::new("alice", "pw")));

    assert!(matches!(result, Err(ApiError::Status { status: 500, .. })));
    assert!(shell.navigations().is_empty());
    assert_eq!(
        shell.events(),
        [ShellEvent::Notify(format!("{REGISTER_FAILED} (server error 500)"))]
    );
}

#[test]
fn network_fault_is_a_failure_branch_not_a_panic() {
    let api = FakeApi::default();
    api.push_register(Err(ApiError::Network("connection refused".to_owned())));
    let shell = RecordingShell::default();

    let result = block_on(submit_registration(&api, &shell, Credentials::new("", "")));

    assert!(matches!(result, Err(ApiError::Network(_))));
    assert!(shell.navigations().is_empty());
}

#[test]
fn empty_fields_are_sent_as_is() {
    let api = FakeApi::default();
    api.push_register(Ok(()));
    let shell = RecordingShell::default();

    let _ = block_on(submit_registration(&api, &shell, Credentials::new("", "")));

    assert_eq!(api.calls(), [Call::Register(Credentials::new("", ""))]);
}
