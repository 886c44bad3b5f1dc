//! Form state machine and submission flow.

use crate::status::{MessageClass, StatusSlot};
use backup_store::BackupStore;
use registration_core::{Field, FormInput};
use sheets_client::{Delivery, SheetsClient};
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::{info, instrument, warn};

/// Submission state.
///
/// `Idle -> Submitting -> {Succeeded, FailedLocalFallback}`; a validation
/// failure drops back to `Idle` with field errors set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitState {
    Idle,
    Submitting,
    Succeeded,
    FailedLocalFallback,
}

/// Explicit form state, decoupled from any rendering layer.
pub struct FormState {
    pub input: FormInput,
    field_errors: BTreeMap<Field, &'static str>,
    state: SubmitState,
    pub status: StatusSlot,
}

impl FormState {
    pub fn new(message_timeout: Duration) -> Self {
        Self {
            input: FormInput::default(),
            field_errors: BTreeMap::new(),
            state: SubmitState::Idle,
            status: StatusSlot::new(message_timeout),
        }
    }

    /// Update a field value. Editing a field clears its error, the way
    /// typing into an input dismisses its inline message.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.input.set(field, value);
        self.field_errors.remove(&field);
    }

    /// Live-validate a single field, as on leaving an input.
    ///
    /// An empty field is left alone: the user has not answered yet, and
    /// full validation at submit time still gates the record.
    pub fn touch(&mut self, field: Field) {
        let value = self.input.get(field).trim();
        if !value.is_empty() && !self.input.check(field) {
            self.field_errors.insert(field, field.error_message());
        } else {
            self.field_errors.remove(&field);
        }
    }

    /// The inline error for a field, if any.
    pub fn field_error(&self, field: Field) -> Option<&'static str> {
        self.field_errors.get(&field).copied()
    }

    /// All current field errors, in form order.
    pub fn field_errors(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.field_errors.iter().map(|(f, m)| (*f, *m))
    }

    /// Current submission state.
    pub fn state(&self) -> SubmitState {
        self.state
    }

    /// Clear all values and errors, back to `Idle`. The status slot is
    /// left alone so a success message survives the reset.
    pub fn reset(&mut self) {
        self.input = FormInput::default();
        self.field_errors.clear();
        self.state = SubmitState::Idle;
    }
}

/// Drives one submission at a time: validate, transmit, back up, report.
pub struct FormController {
    client: SheetsClient,
    store: BackupStore,
}

impl FormController {
    pub fn new(client: SheetsClient, store: BackupStore) -> Self {
        Self { client, store }
    }

    /// The local backup store.
    pub fn store(&self) -> &BackupStore {
        &self.store
    }

    /// Run the submission flow for the form's current input.
    ///
    /// All fields are re-validated even if live validation already ran.
    /// Whatever the transport does, a validated record always lands in the
    /// local backup; only the user-visible message differs.
    #[instrument(skip(self, form))]
    pub async fn submit(&self, form: &mut FormState) -> SubmitState {
        form.state = SubmitState::Submitting;

        let record = match form.input.validate() {
            Ok(record) => record,
            Err(errors) => {
                for (field, message) in errors.messages() {
                    form.field_errors.insert(field, message);
                }
                warn!("Submission blocked: {}", errors);
                form.state = SubmitState::Idle;
                return form.state;
            }
        };

        form.status.show(MessageClass::Info, "Submitting registration...");

        let delivery = self.client.submit(&record).await;

        // Local copy regardless of what the transport did.
        let stored = self.store.append(&record).await;

        form.state = match delivery {
            Ok(Delivery::Unconfirmed) => {
                info!(id = stored.id, "Registration sent, delivery unconfirmed");
                form.reset();
                form.status.show(
                    MessageClass::Success,
                    "Registration received. Your data has been saved.",
                );
                SubmitState::Succeeded
            }
            Err(e) => {
                warn!(id = stored.id, "Transport failed, kept local copy: {}", e);
                form.status.show(
                    MessageClass::Info,
                    "Your data was saved locally. Please try again later.",
                );
                SubmitState::FailedLocalFallback
            }
        };

        form.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> FormState {
        FormState::new(Duration::from_secs(5))
    }

    #[test]
    fn test_new_form_is_idle() {
        let form = form();
        assert_eq!(form.state(), SubmitState::Idle);
        assert_eq!(form.field_errors().count(), 0);
        assert!(form.status.current().is_none());
    }

    #[test]
    fn test_touch_flags_invalid_field() {
        let mut form = form();
        form.set_field(Field::NationalId, "123");
        form.touch(Field::NationalId);

        assert_eq!(
            form.field_error(Field::NationalId),
            Some("National ID must be 16 digits")
        );
    }

    #[test]
    fn test_touch_ignores_empty_field() {
        let mut form = form();
        form.touch(Field::Name);
        assert!(form.field_error(Field::Name).is_none());
    }

    #[test]
    fn test_touch_clears_error_once_valid() {
        let mut form = form();
        form.set_field(Field::Name, "ab");
        form.touch(Field::Name);
        assert!(form.field_error(Field::Name).is_some());

        form.set_field(Field::Name, "Budi Santoso");
        form.touch(Field::Name);
        assert!(form.field_error(Field::Name).is_none());
    }

    #[test]
    fn test_set_field_clears_error() {
        let mut form = form();
        form.set_field(Field::Phone, "123");
        form.touch(Field::Phone);
        assert!(form.field_error(Field::Phone).is_some());

        // Editing dismisses the inline error before re-validation.
        form.set_field(Field::Phone, "0812");
        assert!(form.field_error(Field::Phone).is_none());
    }

    #[test]
    fn test_reset_clears_input_and_errors() {
        let mut form = form();
        form.set_field(Field::Name, "ab");
        form.touch(Field::Name);
        form.status.show(MessageClass::Success, "Done");

        form.reset();

        assert_eq!(form.input.get(Field::Name), "");
        assert_eq!(form.field_errors().count(), 0);
        assert_eq!(form.state(), SubmitState::Idle);
        // Status survives the reset.
        assert!(form.status.current().is_some());
    }
}
