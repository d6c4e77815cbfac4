use chrono::{DateTime, Utc};
use studio_core::content::{CONTACT_ACK_BODY, CONTACT_ACK_TITLE};
use studio_core::model::{ContactError, ContactForm, ContactRequest};

use crate::Clock;

/// Confirmation shown after a contact request is accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acknowledgement {
    pub title: &'static str,
    pub body: &'static str,
    pub received_at: DateTime<Utc>,
}

/// Non-identifying shape of a request, safe for info-level logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RequestSummary {
    name_len: usize,
    has_phone: bool,
    message_len: usize,
}

impl From<&ContactRequest> for RequestSummary {
    fn from(request: &ContactRequest) -> Self {
        Self {
            name_len: request.name().chars().count(),
            has_phone: request.phone().is_some(),
            message_len: request.message().chars().count(),
        }
    }
}

/// Accepts contact requests. Requests are only logged, never delivered.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContactService {
    clock: Clock,
}

impl ContactService {
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self { clock }
    }

    /// Validate and accept a request.
    ///
    /// The caller clears the form on success.
    ///
    /// # Errors
    ///
    /// Returns the first `ContactError` found in the form.
    pub fn submit(&self, form: &ContactForm) -> Result<Acknowledgement, ContactError> {
        let request = match form.validate() {
            Ok(request) => request,
            Err(err) => {
                tracing::debug!(error = %err, "contact request rejected");
                return Err(err);
            }
        };

        let summary = RequestSummary::from(&request);
        tracing::info!(
            name_len = summary.name_len,
            has_phone = summary.has_phone,
            message_len = summary.message_len,
            "contact request received"
        );
        tracing::debug!(name = request.name(), email = request.email(), "contact details");

        Ok(Acknowledgement {
            title: CONTACT_ACK_TITLE,
            body: CONTACT_ACK_BODY,
            received_at: self.clock.now(),
        })
    }
}
