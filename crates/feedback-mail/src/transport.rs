use crate::error::MailError;
use async_trait::async_trait;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

/// Hands a finished message to a mail relay.
#[async_trait]
pub trait MailTransport: Send + Sync {
    async fn deliver(&self, message: Message) -> Result<(), MailError>;
}

/// STARTTLS SMTP relay with username/password authentication.
pub struct SmtpMailTransport {
    inner: AsyncSmtpTransport<Tokio1Executor>,
    host: String,
    port: u16,
}

impl SmtpMailTransport {
    pub fn new(host: &str, port: u16, username: &str, password: &str) -> Result<Self, MailError> {
        let credentials = Credentials::new(username.to_string(), password.to_string());
        let inner = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host)
            .map_err(|e| MailError::Smtp(format!("SMTP relay error: {e}")))?
            .port(port)
            .credentials(credentials)
            .build();

        Ok(Self {
            inner,
            host: host.to_string(),
            port,
        })
    }
}

#[async_trait]
impl MailTransport for SmtpMailTransport {
    async fn deliver(&self, message: Message) -> Result<(), MailError> {
        tracing::debug!("Connecting to {}:{}", self.host, self.port);
        self.inner
            .send(message)
            .await
            .map(|_| ())
            .map_err(|e| MailError::Smtp(e.to_string()))
    }
}

impl std::fmt::Debug for SmtpMailTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpMailTransport")
            .field("host", &self.host)
            .field("port", &self.port)
            .finish_non_exhaustive()
    }
}
