//! Contact query email

use std::{borrow::Cow, time::Duration};

use clap::ValueEnum;
use lettre::message::Mailbox;

use crate::domain::communication::mailer::OutboundMessage;

use super::form::ContactRequest;

/// How submitted values are treated when placed into the HTML body
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum HtmlEscaping {
    /// Replace HTML special characters with entities
    #[default]
    Escape,

    /// Insert values exactly as submitted
    Verbatim,
}

/// Fixed addressing and delivery settings for contact emails
#[derive(Clone, Debug)]
pub struct ContactConfig {
    /// Who the email is sent from
    pub sender: Mailbox,

    /// Where every contact email is delivered
    pub receiver: Mailbox,

    /// Escaping applied to submitted values in the HTML body
    pub html_escaping: HtmlEscaping,

    /// How long to wait for the transport before giving up
    pub send_timeout: Duration,
}

/// Builds the notification email for a validated submission.
///
/// The submitter's address only appears in the body; the envelope always uses the configured
/// sender and receiver.
pub fn compose(request: &ContactRequest, config: &ContactConfig) -> OutboundMessage {
    let html = |value: &str| match config.html_escaping {
        HtmlEscaping::Escape => escape_html(value),
        HtmlEscaping::Verbatim => value.to_string(),
    };

    let html_body = format!(
        r#"<p><strong>Name:</strong> {name}</p>
<p><strong>Email:</strong> {email}</p>
<p><strong>Subject:</strong> {subject}</p>
<p><strong>Message:</strong><br/> {message}</p>
"#,
        name = html(&request.name),
        email = html(&request.email),
        subject = html(&request.subject),
        message = line_breaks(&html(&request.message)),
    );

    let plain_body = format!(
        "Name: {name}\nEmail: {email}\nSubject: {subject}\nMessage:\n{message}\n",
        name = request.name,
        email = request.email,
        subject = request.subject,
        message = request.message,
    );

    OutboundMessage {
        from: config.sender.clone(),
        to: config.receiver.clone(),
        subject: format!(
            "New Client Query {subject} from {name}",
            subject = request.subject,
            name = request.name
        ),
        html_body,
        plain_body,
    }
}

/// Replaces `&`, `<`, `>`, `"` and `'` with HTML entities.
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());

    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }

    escaped
}

fn line_breaks(value: &str) -> Cow<'_, str> {
    if value.contains('\n') {
        Cow::Owned(value.replace("\r\n", "\n").replace('\n', "<br/>\n"))
    } else {
        Cow::Borrowed(value)
    }
}
