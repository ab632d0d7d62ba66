use crate::error::{codes, CommandError};
use crate::form::FeedbackForm;
use crate::notice::Notice;
use crate::state::AppState;
use feedback_core::Timestamp;
use feedback_mail::DispatchOutcome;
use serde::Serialize;
use std::path::Path;
use tracing::{error, info, warn};

#[derive(Debug, Clone, Serialize)]
pub struct SubmissionReport {
    /// Identifier the document was named after, if one was produced
    pub submission_id: Option<String>,
    /// File name of the filled document
    pub document: Option<String>,
    pub sent: bool,
    pub notices: Vec<Notice>,
    pub submitted_at: Timestamp,
}

/// Validate, fill the template, then email the result.
///
/// Only validation is an `Err`; every later failure becomes a notice on an
/// `Ok` report so the user sees what happened to their submission.
pub async fn submit_feedback(
    state: &AppState,
    form: &FeedbackForm,
) -> Result<SubmissionReport, CommandError> {
    form.validate()?;

    let answers = form.to_answer_set();
    let submitted_at = Timestamp::now();
    let mut notices = Vec::new();

    let filled = match state.populator.populate(&answers, state.ids.as_ref()).await {
        Ok(filled) => filled,
        Err(e) => {
            error!("Document population failed: {}", e);
            notices.push(CommandError::from(e).into());
            return Ok(SubmissionReport {
                submission_id: None,
                document: None,
                sent: false,
                notices,
                submitted_at,
            });
        }
    };
    info!(
        "Submission {} received {} filled at {}",
        filled.id,
        submitted_at,
        filled.path.display()
    );

    if filled.id.is_fallback() {
        notices.push(Notice::warning(
            codes::ID_FALLBACK,
            "Error generating unique ID, using fallback.",
        ));
    }

    let sent = dispatch_document(state, &filled.path, &mut notices).await;

    Ok(SubmissionReport {
        submission_id: Some(filled.id.to_string()),
        document: filled
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned()),
        sent,
        notices,
        submitted_at,
    })
}

/// Email the document at `path`, recording the outcome. Returns whether it
/// was sent.
pub async fn dispatch_document(state: &AppState, path: &Path, notices: &mut Vec<Notice>) -> bool {
    let dispatcher = match &state.dispatcher {
        Ok(dispatcher) => dispatcher,
        Err(e) => {
            warn!("Not sending {}: {}", path.display(), e);
            notices.push(Notice::error(
                codes::SMTP_ERROR,
                format!("SMTP error occurred: {e}"),
            ));
            return false;
        }
    };

    match dispatcher.send(path).await {
        Ok(DispatchOutcome::Sent { recipient, .. }) => {
            notices.push(Notice::success(
                codes::FEEDBACK_SENT,
                format!("Feedback form submitted and sent to {recipient}."),
            ));
            true
        }
        Ok(DispatchOutcome::Skipped { .. }) => {
            notices.push(Notice::warning(
                codes::DISPATCH_SKIPPED,
                "File not found. Skipping email sending.",
            ));
            false
        }
        Err(e) => {
            error!("Sending {} failed: {}", path.display(), e);
            notices.push(CommandError::from(e).into());
            false
        }
    }
}
