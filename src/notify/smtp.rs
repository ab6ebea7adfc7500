//! SMTP alert delivery via lettre.

use async_trait::async_trait;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::schema::SmtpConfig;
use crate::notify::message::Alert;
use crate::notify::notifier::{AlertTransport, NotifyError};

/// Delivers alerts through an authenticated STARTTLS SMTP session.
///
/// The configured account is both sender and sole recipient. One session
/// is opened per delivery; the process exits after the cycle, so there is
/// nothing to pool.
pub struct SmtpAlertTransport {
    config: SmtpConfig,
}

impl SmtpAlertTransport {
    pub fn new(config: SmtpConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl AlertTransport for SmtpAlertTransport {
    async fn deliver(&self, alert: &Alert) -> Result<(), NotifyError> {
        let mailbox: Mailbox = self.config.username.parse()?;

        let message = Message::builder()
            .from(mailbox.clone())
            .to(mailbox)
            .subject(alert.subject.clone())
            .body(alert.body.clone())?;

        let mailer = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.config.server)?
            .port(self.config.port)
            .credentials(Credentials::new(
                self.config.username.clone(),
                self.config.password.clone(),
            ))
            .build();

        mailer.send(message).await?;
        Ok(())
    }
}
