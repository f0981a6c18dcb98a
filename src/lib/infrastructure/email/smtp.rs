//! SMTP email service implementation

use std::{fmt, time::Duration};

use anyhow::Result;
use async_trait::async_trait;
use clap::Parser;
use lettre::{
    message::MultiPart,
    transport::smtp::{
        authentication::Credentials,
        client::{Tls, TlsParameters},
    },
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use tracing::debug;

use crate::domain::communication::mailer::{Mailer, MailerError, OutboundMessage};

/// SMTP configuration
#[derive(Clone, Parser)]
pub struct SmtpConfig {
    /// The SMTP host
    #[arg(id = "smtp_host", long = "smtp-host", env = "SMTP_HOST", default_value = "smtp.gmail.com")]
    pub host: String,

    /// The SMTP port
    #[arg(id = "smtp_port", long = "smtp-port", env = "SMTP_PORT", default_value = "465")]
    pub port: u16,

    /// The SMTP username
    #[arg(long = "email-user", env = "EMAIL_USER")]
    pub username: String,

    /// The SMTP password
    #[arg(long = "email-pass", env = "EMAIL_PASS", hide_env_values = true)]
    pub password: String,

    /// Verify the TLS certificate
    #[arg(id = "smtp_verify_tls", long = "smtp-verify-tls", env = "SMTP_VERIFY_TLS", default_value_t = true, action = clap::ArgAction::Set)]
    pub verify_tls: bool,

    /// Use STARTTLS on a plain connection instead of connecting over TLS
    #[arg(id = "smtp_starttls", long = "smtp-starttls", env = "SMTP_STARTTLS", default_value_t = false, action = clap::ArgAction::Set)]
    pub starttls: bool,
}

impl fmt::Debug for SmtpConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmtpConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"********")
            .field("verify_tls", &self.verify_tls)
            .field("starttls", &self.starttls)
            .finish()
    }
}

/// SMTP mailer
///
/// Holds one pooled transport for the life of the process; clones share it.
#[derive(Clone)]
pub struct SmtpMailer {
    host: String,
    port: u16,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    /// Builds the SMTP transport described by `config`.
    ///
    /// No connection is made until the first email is sent.
    pub fn new(config: &SmtpConfig, timeout: Duration) -> Result<Self> {
        let creds = Credentials::new(config.username.clone(), config.password.clone());

        let relay = if config.starttls {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)?
        };

        let tls_parameters = TlsParameters::builder(config.host.clone())
            .dangerous_accept_invalid_certs(!config.verify_tls)
            .build()?;

        let tls = if config.starttls {
            Tls::Required(tls_parameters)
        } else {
            Tls::Wrapper(tls_parameters)
        };

        let transport = relay
            .credentials(creds)
            .port(config.port)
            .tls(tls)
            .timeout(Some(timeout))
            .build();

        debug!(host = %config.host, port = config.port, "SMTP transport configured");

        Ok(Self {
            host: config.host.clone(),
            port: config.port,
            transport,
        })
    }
}

impl fmt::Debug for SmtpMailer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmtpMailer")
            .field("host", &self.host)
            .field("port", &self.port)
            .finish()
    }
}

/// Converts an [`OutboundMessage`] into a `multipart/alternative` email.
fn build_email(message: &OutboundMessage) -> Result<Message, MailerError> {
    let email = Message::builder()
        .from(message.from.clone())
        .to(message.to.clone())
        .subject(message.subject.clone())
        .multipart(MultiPart::alternative_plain_html(
            message.plain_body.clone(),
            message.html_body.clone(),
        ))?;

    Ok(email)
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send_email(&self, message: &OutboundMessage) -> Result<(), MailerError> {
        let email = build_email(message)?;

        self.transport.send(email).await?;

        Ok(())
    }
}
