//! Email service module

use async_trait::async_trait;

#[cfg(test)]
use mockall::mock;

mod errors;
mod message;

pub use errors::MailerError;
pub use message::OutboundMessage;

/// Mail transport capability
#[async_trait]
pub trait Mailer: Clone + Send + Sync + 'static {
    /// Submits a message for delivery and waits for the transport to acknowledge it.
    ///
    /// # Arguments
    /// * `message` - The composed [`OutboundMessage`].
    ///
    /// # Returns
    /// [`Ok`] once the transport has accepted the message, or an [`Err`] containing a
    /// [`MailerError`] describing why it was not.
    async fn send_email(&self, message: &OutboundMessage) -> Result<(), MailerError>;
}

#[cfg(test)]
mock! {
    pub Mailer {}

    impl Clone for Mailer {
        fn clone(&self) -> Self;
    }

    #[async_trait]
    impl Mailer for Mailer {
        async fn send_email(&self, message: &OutboundMessage) -> Result<(), MailerError>;
    }
}
