use super::test_support::{RecordingShell, ShellEvent};
use super::*;
use crate::net::types::UserId;
use crate::state::session::MemoryStorage;

#[test]
fn failure_notice_reports_server_errors_by_status() {
    let err = ApiError::Status { status: 500, body: "Error during login.".to_owned() };
    assert_eq!(failure_notice(LOGIN_FAILED, &err), format!("{LOGIN_FAILED} (server error 500)"));
}

#[test]
fn failure_notice_surfaces_client_error_body() {
    let err = ApiError::Status { status: 401, body: " Invalid password.\n".to_owned() };
    assert_eq!(failure_notice(LOGIN_FAILED, &err), format!("{LOGIN_FAILED} (Invalid password.)"));
}

#[test]
fn failure_notice_without_body_is_the_plain_message() {
    let err = ApiError::Status { status: 409, body: String::new() };
    assert_eq!(failure_notice(REGISTER_FAILED, &err), REGISTER_FAILED);
}

#[test]
fn failure_notice_keeps_only_first_line_of_body() {
    let err = ApiError::Status { status: 400, body: "\nUsername taken.\nat users.insert (db.js:12)\n".to_owned() };
    assert_eq!(failure_notice(REGISTER_FAILED, &err), format!("{REGISTER_FAILED} (Username taken.)"));
}

#[test]
fn failure_notice_caps_long_body() {
    let err = ApiError::Status { status: 400, body: "é".repeat(5000) };
    let notice = failure_notice(REGISTER_FAILED, &err);
    let expected = format!("{REGISTER_FAILED} ({}…)", "é".repeat(200));
    assert_eq!(notice, expected);
}

#[test]
fn failure_notice_drops_html_error_pages() {
    let err = ApiError::Status { status: 404, body: "<!DOCTYPE html><html><body>Not Found</body></html>".to_owned() };
    assert_eq!(failure_notice(LOGIN_FAILED, &err), LOGIN_FAILED);
}

#[test]
fn failure_notice_names_network_and_decode_faults() {
    assert_eq!(
        failure_notice(REGISTER_FAILED, &ApiError::Network("offline".to_owned())),
        format!("{REGISTER_FAILED} (could not reach the server)")
    );
    assert_eq!(
        failure_notice(LOGIN_FAILED, &ApiError::Decode("eof".to_owned())),
        format!("{LOGIN_FAILED} (unexpected response)")
    );
}

#[test]
fn log_out_forgets_user_and_goes_to_login() {
    let session = Session::new(MemoryStorage::default());
    session.remember(&UserId::new("42")).unwrap();
    let shell = RecordingShell::default();

    log_out(&session, &shell);

    assert!(session.user_id().is_err());
    assert_eq!(shell.events(), [ShellEvent::Navigate(PageKind::Login)]);
}
