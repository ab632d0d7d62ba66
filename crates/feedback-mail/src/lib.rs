//! Delivery of filled feedback forms by email.
//!
//! A [`Dispatcher`] reads a filled document from disk, wraps it in a
//! single message addressed to the configured account and hands it to a
//! [`MailTransport`]. Production code uses [`SmtpMailTransport`]; tests
//! substitute their own transport.

pub mod dispatcher;
pub mod error;
pub mod message;
pub mod transport;

pub use dispatcher::{DispatchOutcome, Dispatcher};
pub use error::MailError;
pub use lettre::Message;
pub use message::{attachment_digest, build_message, DOCX_MEDIA_TYPE};
pub use transport::{MailTransport, SmtpMailTransport};
