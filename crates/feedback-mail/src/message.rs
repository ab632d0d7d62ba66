use crate::error::MailError;
use lettre::message::header::ContentType;
use lettre::message::{Attachment, Mailbox, MultiPart, SinglePart};
use lettre::Message;
use sha2::{Digest, Sha256};

/// Media type of a Word document attachment.
pub const DOCX_MEDIA_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

fn mailbox(address: &str) -> Result<Mailbox, MailError> {
    address.parse().map_err(|e: lettre::address::AddressError| MailError::Address {
        address: address.to_string(),
        reason: e.to_string(),
    })
}

/// Builds a message carrying a plain-text body and one `.docx` attachment.
pub fn build_message(
    from: &str,
    to: &str,
    subject: &str,
    body: &str,
    filename: &str,
    content: Vec<u8>,
) -> Result<Message, MailError> {
    let content_type =
        ContentType::parse(DOCX_MEDIA_TYPE).map_err(|e| MailError::Build(e.to_string()))?;
    let attachment = Attachment::new(filename.to_string()).body(content, content_type);

    Message::builder()
        .from(mailbox(from)?)
        .to(mailbox(to)?)
        .subject(subject)
        .multipart(
            MultiPart::mixed()
                .singlepart(SinglePart::plain(body.to_string()))
                .singlepart(attachment),
        )
        .map_err(|e| MailError::Build(e.to_string()))
}

/// SHA-256 hex of an attachment (logged in place of the content).
pub fn attachment_digest(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    hex::encode(hasher.finalize())
}
