//! Error types for contact form submissions

use thiserror::Error;

use crate::domain::communication::mailer::MailerError;

/// Errors that end a contact form submission
#[derive(Debug, Error)]
pub enum ContactError {
    /// At least one required field is missing or empty
    #[error("one or more required fields are missing")]
    MissingFields,

    /// The mail transport did not accept the message
    #[error("could not dispatch contact email")]
    DispatchFailed(#[from] MailerError),
}
