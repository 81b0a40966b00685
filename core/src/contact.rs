use std::fmt;

use crate::fields::{FormFields, ValidationError};
use crate::mailto::MailtoLink;
use crate::notification::Severity;

pub const CONTACT_RECIPIENT: &str = "skanda473@gmail.com";
pub const SENDING_LABEL: &str = "<span>Sending...</span>";

const MSG_SENT: &str = "Thank you for your message! I'll get back to you soon.";
const MSG_SEND_FAILED: &str = "Submission failed. Opening your mail client as fallback.";
const MSG_NO_ENDPOINT: &str = "Opening your mail client to send the message (fallback).";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    Status { status: u16, body: String },
    Network(String),
}

impl TransportError {
    pub fn check_status(status: u16, body: impl Into<String>) -> Result<(), Self> {
        if (200..300).contains(&status) {
            Ok(())
        } else {
            Err(TransportError::Status {
                status,
                body: body.into(),
            })
        }
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::Status { status, body } if body.is_empty() => {
                write!(f, "submission failed with status {status}")
            }
            TransportError::Status { status, body } => {
                write!(f, "submission failed with status {status}: {body}")
            }
            TransportError::Network(message) => write!(f, "network error: {message}"),
        }
    }
}

impl std::error::Error for TransportError {}

/// What the page does once a submission settles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub severity: Severity,
    pub message: &'static str,
    pub clear_form: bool,
    pub mailto: Option<MailtoLink>,
    pub failure: Option<TransportError>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitPlan {
    /// POST `payload` as JSON to `endpoint`, then call [`finish`].
    Post {
        endpoint: String,
        payload: FormFields,
    },
    /// No endpoint configured; settle immediately through the mail client.
    Fallback(Completion),
}

pub fn begin(fields: &FormFields, endpoint: &str) -> Result<SubmitPlan, ValidationError> {
    fields.validate()?;
    let endpoint = endpoint.trim();
    if endpoint.is_empty() {
        return Ok(SubmitPlan::Fallback(Completion {
            severity: Severity::Info,
            message: MSG_NO_ENDPOINT,
            clear_form: true,
            mailto: Some(MailtoLink::for_fields(CONTACT_RECIPIENT, fields)),
            failure: None,
        }));
    }
    Ok(SubmitPlan::Post {
        endpoint: endpoint.to_string(),
        payload: fields.clone(),
    })
}

pub fn finish(fields: &FormFields, response: Result<(), TransportError>) -> Completion {
    match response {
        Ok(()) => Completion {
            severity: Severity::Success,
            message: MSG_SENT,
            clear_form: true,
            mailto: None,
            failure: None,
        },
        Err(err) => Completion {
            severity: Severity::Error,
            message: MSG_SEND_FAILED,
            // Only the no-endpoint path clears the form.
            clear_form: false,
            mailto: Some(MailtoLink::for_fields(CONTACT_RECIPIENT, fields)),
            failure: Some(err),
        },
    }
}
