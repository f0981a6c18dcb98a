//! Mailer errors

use std::time::Duration;

use thiserror::Error;

/// Mailer errors
#[derive(Debug, Error)]
pub enum MailerError {
    /// The message could not be turned into a valid email
    #[error("could not build email: {0}")]
    InvalidMessage(#[from] lettre::error::Error),

    /// The transport rejected the message or could not be reached
    #[error("could not send email: {0}")]
    SendError(#[source] anyhow::Error),

    /// The transport did not acknowledge the message in time
    #[error("no acknowledgment from the mail transport after {0:?}")]
    Timeout(Duration),
}

impl From<lettre::transport::smtp::Error> for MailerError {
    fn from(err: lettre::transport::smtp::Error) -> Self {
        MailerError::SendError(err.into())
    }
}

impl From<anyhow::Error> for MailerError {
    fn from(err: anyhow::Error) -> Self {
        MailerError::SendError(err)
    }
}
