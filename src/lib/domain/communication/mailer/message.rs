//! Email message

use lettre::message::Mailbox;

/// A fully composed email, ready to hand to a [`Mailer`](super::Mailer)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutboundMessage {
    /// The sender of the email
    pub from: Mailbox,

    /// The recipient of the email
    pub to: Mailbox,

    /// The subject of the email
    pub subject: String,

    /// The HTML body of the email
    pub html_body: String,

    /// The plain text body of the email
    pub plain_body: String,
}
