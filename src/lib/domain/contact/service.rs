//! Contact form service

use std::sync::Arc;

use async_trait::async_trait;
use tokio::time::timeout;
use tracing::{error, info};

#[cfg(test)]
use mockall::mock;

use crate::domain::communication::mailer::{Mailer, MailerError};

use super::{email::compose, errors::ContactError, form::ContactForm, ContactConfig};

/// Contact form service
#[async_trait]
pub trait ContactService: Clone + Send + Sync + 'static {
    /// Validates a submitted form, composes the notification email and sends it.
    ///
    /// # Arguments
    /// * `form` - The [`ContactForm`] as submitted.
    ///
    /// # Returns
    /// [`Ok`] once the mail transport has accepted the email, or an [`Err`] containing a
    /// [`ContactError`] that says which stage ended the submission.
    async fn submit(&self, form: &ContactForm) -> Result<(), ContactError>;
}

#[cfg(test)]
mock! {
    pub ContactService {}

    impl Clone for ContactService {
        fn clone(&self) -> Self;
    }

    #[async_trait]
    impl ContactService for ContactService {
        async fn submit(&self, form: &ContactForm) -> Result<(), ContactError>;
    }
}

/// Contact form service implementation
#[derive(Debug, Clone)]
pub struct ContactServiceImpl<M>
where
    M: Mailer,
{
    config: Arc<ContactConfig>,
    mailer: Arc<M>,
}

impl<M> ContactServiceImpl<M>
where
    M: Mailer,
{
    /// Creates a new contact service.
    pub fn new(config: ContactConfig, mailer: Arc<M>) -> Self {
        Self {
            config: Arc::new(config),
            mailer,
        }
    }
}

#[async_trait]
impl<M> ContactService for ContactServiceImpl<M>
where
    M: Mailer,
{
    async fn submit(&self, form: &ContactForm) -> Result<(), ContactError> {
        let request = form.validate()?;
        let message = compose(&request, &self.config);

        let send_timeout = self.config.send_timeout;

        let sent = timeout(send_timeout, self.mailer.send_email(&message))
            .await
            .unwrap_or(Err(MailerError::Timeout(send_timeout)));

        match sent {
            Ok(()) => {
                info!(from = %request.email, to = %message.to, "contact email sent");

                Ok(())
            }
            Err(err) => {
                error!(error = %err, to = %message.to, "failed to send contact email");

                Err(err.into())
            }
        }
    }
}
