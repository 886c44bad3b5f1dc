//! HTTP client for the spreadsheet-backed registration endpoint.

use crate::error::SheetsError;
use registration_core::Registration;
use reqwest::multipart::Form;
use reqwest::Client;
use tracing::{debug, instrument};

/// What we know about a submission after the request completes.
///
/// The Apps Script endpoint never acknowledges receipt in a way this
/// client can trust, so a completed request means "probably delivered",
/// never "confirmed". Kept as its own type so callers cannot mistake it
/// for confirmed acceptance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// The request completed; acceptance is assumed, not confirmed.
    Unconfirmed,
}

/// Client for the registration spreadsheet endpoint.
#[derive(Clone)]
pub struct SheetsClient {
    client: Client,
    endpoint: String,
}

impl SheetsClient {
    /// Create a new client for the given endpoint URL.
    ///
    /// No request timeout is set: the endpoint can be slow and the flow
    /// has no retry, so the request is allowed to run to completion.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, SheetsError> {
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// The configured endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Submit one registration as a multipart POST.
    ///
    /// The response body and status are not inspected; any completed
    /// request yields [`Delivery::Unconfirmed`]. Only transport-level
    /// failures (unreachable host, DNS) return an error.
    #[instrument(skip(self, registration), fields(program = %registration.program))]
    pub async fn submit(&self, registration: &Registration) -> Result<Delivery, SheetsError> {
        let form = Form::new()
            .text("timestamp", registration.submitted_at.to_rfc3339())
            .text("nama", registration.name.clone())
            .text("program", registration.program.clone())
            .text("nik", registration.national_id.clone())
            .text("alamat", registration.address.clone())
            .text("whatsapp", registration.phone.clone());

        let response = self.client.post(&self.endpoint).multipart(form).send().await?;

        debug!(
            "Registration posted (status {} ignored by design)",
            response.status()
        );
        Ok(Delivery::Unconfirmed)
    }
}
