//! Process configuration, read once at startup from arguments and the environment

use std::{sync::Arc, time::Duration};

use anyhow::Result;
use clap::Parser;
use lettre::{message::Mailbox, Address};

use crate::{
    domain::contact::{ContactConfig, ContactServiceImpl, HtmlEscaping},
    infrastructure::{
        email::smtp::{SmtpConfig, SmtpMailer},
        http::HttpServerConfig,
    },
};

/// Contact email addressing and delivery settings
#[derive(Debug, Clone, Parser)]
pub struct MailConfig {
    /// Display name used in the From header
    #[arg(long, env = "EMAIL_FROM_NAME")]
    pub from_name: String,

    /// Address used in the From header
    #[arg(long, env = "EMAIL_FROM_ADDRESS")]
    pub from_address: Address,

    /// Address every contact email is delivered to
    #[arg(long, env = "EMAIL_RECEIVER")]
    pub receiver: Address,

    /// Whether submitted values are HTML-escaped in the email body
    #[arg(long, env = "EMAIL_HTML_ESCAPING", value_enum, default_value_t = HtmlEscaping::Escape)]
    pub html_escaping: HtmlEscaping,

    /// Seconds to wait for the mail transport before reporting a failure
    #[arg(long, env = "EMAIL_SEND_TIMEOUT_SECS", default_value = "30")]
    pub send_timeout_secs: u64,
}

impl MailConfig {
    /// The dispatch deadline
    pub fn send_timeout(&self) -> Duration {
        Duration::from_secs(self.send_timeout_secs)
    }
}

impl From<&MailConfig> for ContactConfig {
    fn from(config: &MailConfig) -> Self {
        Self {
            sender: Mailbox::new(Some(config.from_name.clone()), config.from_address.clone()),
            receiver: Mailbox::new(None, config.receiver.clone()),
            html_escaping: config.html_escaping,
            send_timeout: config.send_timeout(),
        }
    }
}

/// Command-line arguments / environment variables
#[derive(Debug, Clone, Parser)]
#[command(version, about)]
pub struct AppConfig {
    /// The HTTP server configuration
    #[clap(flatten)]
    pub server: HttpServerConfig,

    /// The SMTP transport configuration
    #[clap(flatten)]
    pub smtp: SmtpConfig,

    /// The contact email configuration
    #[clap(flatten)]
    pub mail: MailConfig,
}

impl AppConfig {
    /// Creates the mail transport and the contact service that uses it.
    pub fn contact_service(&self) -> Result<ContactServiceImpl<SmtpMailer>> {
        let mailer = SmtpMailer::new(&self.smtp, self.mail.send_timeout())?;

        Ok(ContactServiceImpl::new(
            ContactConfig::from(&self.mail),
            Arc::new(mailer),
        ))
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    const REQUIRED: [&str; 11] = [
        "test",
        "--email-user",
        "user@example.com",
        "--email-pass",
        "secret",
        "--from-name",
        "Example Site",
        "--from-address",
        "noreply@example.com",
        "--receiver",
        "owner@example.com",
    ];

    #[test]
    fn test_app_config_defaults() -> TestResult {
        let config = AppConfig::try_parse_from(REQUIRED)?;

        assert_eq!(config.server.port, 3001);
        assert_eq!(config.server.contact_path, "/api/contact");
        assert!(config.server.allowed_origins.is_empty());
        assert_eq!(config.mail.html_escaping, HtmlEscaping::Escape);
        assert_eq!(config.mail.send_timeout(), Duration::from_secs(30));

        Ok(())
    }

    #[test]
    fn test_app_config_rejects_invalid_receiver() {
        let mut args = REQUIRED.to_vec();
        args[10] = "not an address";

        assert!(AppConfig::try_parse_from(args).is_err());
    }

    #[test]
    fn test_app_config_verbatim_escaping() -> TestResult {
        let mut args = REQUIRED.to_vec();
        args.extend(["--html-escaping", "verbatim"]);

        let config = AppConfig::try_parse_from(args)?;

        assert_eq!(config.mail.html_escaping, HtmlEscaping::Verbatim);

        Ok(())
    }

    #[test]
    fn test_contact_config_from_mail_config() -> TestResult {
        let config = AppConfig::try_parse_from(REQUIRED)?;

        let contact = ContactConfig::from(&config.mail);

        assert_eq!(contact.sender.name.as_deref(), Some("Example Site"));
        assert_eq!(contact.sender.email.to_string(), "noreply@example.com");
        assert_eq!(contact.receiver.to_string(), "owner@example.com");

        Ok(())
    }

    #[tokio::test]
    async fn test_app_config_builds_contact_service() -> TestResult {
        let config = AppConfig::try_parse_from(REQUIRED)?;

        config.contact_service()?;

        Ok(())
    }
}
