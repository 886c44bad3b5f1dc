//! Integration tests for the submission flow.

use backup_store::{BackupStore, Store, DEFAULT_CAPACITY};
use registration_core::Field;
use registration_form::form::{FormController, FormState, SubmitState};
use registration_form::status::MessageClass;
use sheets_client::SheetsClient;
use std::time::Duration;
use wiremock::matchers::{body_string_contains, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn controller(endpoint: &str) -> FormController {
    let client = SheetsClient::new(endpoint).unwrap();
    let store = BackupStore::new(Store::memory(), DEFAULT_CAPACITY);
    FormController::new(client, store)
}

fn filled_form() -> FormState {
    let mut form = FormState::new(Duration::from_secs(5));
    form.set_field(Field::Name, "Budi Santoso");
    form.set_field(Field::Program, "Video Editing");
    form.set_field(Field::NationalId, "1234567890123456");
    form.set_field(Field::Address, "Jl. Merdeka No. 17, Jakarta");
    form.set_field(Field::Phone, "08123456789");
    form
}

#[tokio::test]
async fn test_valid_submission_stores_one_record_and_succeeds() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_string_contains("Budi Santoso"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let controller = controller(&mock_server.uri());
    let mut form = filled_form();

    let state = controller.submit(&mut form).await;

    assert_eq!(state, SubmitState::Succeeded);
    assert_eq!(form.state(), SubmitState::Succeeded);

    // Exactly one record in the local backup, phone normalized.
    let records = controller.store().load().await;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].record.phone, "628123456789");

    // Success message shown; form cleared for the next registration.
    let message = form.status.current().unwrap();
    assert_eq!(message.class, MessageClass::Success);
    assert_eq!(form.input.get(Field::Name), "");
}

#[tokio::test]
async fn test_invalid_submission_blocks_and_stores_nothing() {
    let mock_server = MockServer::start().await;

    // The endpoint must never be hit when validation fails.
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let controller = controller(&mock_server.uri());
    let mut form = filled_form();
    form.set_field(Field::NationalId, "not-sixteen-digits");

    let state = controller.submit(&mut form).await;

    assert_eq!(state, SubmitState::Idle);
    assert_eq!(
        form.field_error(Field::NationalId),
        Some("National ID must be 16 digits")
    );
    assert_eq!(controller.store().count().await, 0);
    assert!(form.status.current().is_none());
}

#[tokio::test]
async fn test_revalidation_catches_stale_live_validation() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let controller = controller(&mock_server.uri());
    let mut form = filled_form();

    // Live validation passed earlier, then the field got edited to
    // something invalid. set_field clears the inline error.
    form.touch(Field::Name);
    form.set_field(Field::Name, "ab");
    assert!(form.field_error(Field::Name).is_none());

    let state = controller.submit(&mut form).await;

    assert_eq!(state, SubmitState::Idle);
    assert!(form.field_error(Field::Name).is_some());
}

#[tokio::test]
async fn test_server_error_still_counts_as_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let controller = controller(&mock_server.uri());
    let mut form = filled_form();

    // The endpoint's status is not inspected, so a 500 is
    // indistinguishable from acceptance.
    let state = controller.submit(&mut form).await;

    assert_eq!(state, SubmitState::Succeeded);
    assert_eq!(controller.store().count().await, 1);
}

#[tokio::test]
async fn test_transport_failure_falls_back_to_local() {
    // Unreachable endpoint: connection refused.
    let controller = controller("http://127.0.0.1:9/exec");
    let mut form = filled_form();

    let state = controller.submit(&mut form).await;

    assert_eq!(state, SubmitState::FailedLocalFallback);

    // The record still landed in the local backup.
    let records = controller.store().load().await;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].record.name, "Budi Santoso");

    // Fallback message is informational, not success.
    let message = form.status.current().unwrap();
    assert_eq!(message.class, MessageClass::Info);
    assert!(message.text.contains("try again"));

    // Input is not cleared; the user may retry manually.
    assert_eq!(form.input.get(Field::Name), "Budi Santoso");
}

#[tokio::test]
async fn test_fallback_message_auto_dismisses() {
    let controller = controller("http://127.0.0.1:9/exec");

    let mut form = FormState::new(Duration::from_millis(10));
    for (field, value) in [
        (Field::Name, "Budi Santoso"),
        (Field::Program, "Video Editing"),
        (Field::NationalId, "1234567890123456"),
        (Field::Address, "Jl. Merdeka No. 17, Jakarta"),
        (Field::Phone, "08123456789"),
    ] {
        form.set_field(field, value);
    }

    controller.submit(&mut form).await;
    assert!(form.status.current().is_some());

    tokio::time::sleep(Duration::from_millis(20)).await;
    assert!(form.status.current().is_none());
}

#[tokio::test]
async fn test_repeated_submissions_stay_bounded() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let client = SheetsClient::new(mock_server.uri()).unwrap();
    let store = BackupStore::new(Store::memory(), 3);
    let controller = FormController::new(client, store);

    for _ in 0..5 {
        let mut form = filled_form();
        controller.submit(&mut form).await;
    }

    assert_eq!(controller.store().count().await, 3);
}
