//! Shared fixtures for server integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use docx_rs::{Docx, Paragraph, Run};
use feedback_core::{SmtpSettings, SubmissionId};
use feedback_mail::{Dispatcher, MailError, MailTransport, Message};
use feedback_server::state::AppState;
use feedback_template::{IdError, IdSource, TemplatePopulator};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

pub const ACCOUNT: &str = "feedback@example.edu";

/// Hands out `sub-1`, `sub-2`, ... and counts calls.
#[derive(Default)]
pub struct CountingIds {
    calls: AtomicUsize,
}

impl CountingIds {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IdSource for CountingIds {
    async fn generate_id(&self) -> Result<SubmissionId, IdError> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(SubmissionId::new(format!("sub-{n}")).expect("valid id"))
    }
}

pub struct DownIds;

#[async_trait]
impl IdSource for DownIds {
    async fn generate_id(&self) -> Result<SubmissionId, IdError> {
        Err(IdError::Status(503))
    }
}

/// Records the attachment file names of delivered messages.
#[derive(Default)]
pub struct RecordingTransport {
    delivered: Mutex<Vec<String>>,
}

impl RecordingTransport {
    pub fn delivered(&self) -> Vec<String> {
        self.delivered.lock().expect("lock").clone()
    }
}

#[async_trait]
impl MailTransport for RecordingTransport {
    async fn deliver(&self, message: Message) -> Result<(), MailError> {
        let raw = String::from_utf8_lossy(&message.formatted()).into_owned();
        self.delivered.lock().expect("lock").push(raw);
        Ok(())
    }
}

pub struct RefusingTransport;

#[async_trait]
impl MailTransport for RefusingTransport {
    async fn deliver(&self, _message: Message) -> Result<(), MailError> {
        Err(MailError::Smtp("Connection refused".to_string()))
    }
}

/// Template with every placeholder of the student feedback form.
pub fn write_template(dir: &Path) -> PathBuf {
    let lines = [
        "1. Course Name: [p1]",
        "2.1 [p2] Very Satisfied [p3] Satisfied [p4] Neutral [p5] Unsatisfied [p6] Very Unsatisfied",
        "2.2 [p7] Yes [p8] No [p9] Somewhat",
        "2.3 [p10]",
        "3.1 [p11] Excellent [p12] Good [p13] Fair [p14] Poor",
        "3.2 [p15] Very Satisfied [p16] Satisfied [p17] Neutral [p18] Unsatisfied [p19] Very Unsatisfied",
        "3.3 [p20] Highly Relevant [p21] Relevant [p22] Somewhat Relevant [p23] Not Relevant",
        "3.4 [p24]",
        "4.1 [p25] Very Satisfied [p26] Satisfied [p27] Neutral [p28] Unsatisfied [p29] Very Unsatisfied",
        "4.2 [p30] Extremely Helpful [p31] Very Helpful [p32] Moderately Helpful [p33] Slightly Helpful [p34] Not Helpful",
        "4.3 [p35] Yes [p36] No [p37] Somewhat",
        "4.4 [p38]",
        "5.1 [p39]",
        "5.2 [p40]",
        "5.3 [p41]",
    ];
    let docx = lines.iter().fold(Docx::new(), |docx, line| {
        docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(*line)))
    });
    let path = dir.join("ph_feedback_form.docx");
    let file = std::fs::File::create(&path).expect("create template");
    docx.build().pack(file).expect("pack template");
    path
}

pub struct Fixture {
    pub dir: TempDir,
    pub ids: Arc<CountingIds>,
    pub transport: Arc<RecordingTransport>,
    pub state: Arc<AppState>,
}

impl Fixture {
    pub fn output_dir(&self) -> PathBuf {
        self.dir.path().join("out")
    }

    pub fn output_files(&self) -> Vec<String> {
        match std::fs::read_dir(self.output_dir()) {
            Ok(entries) => entries
                .map(|e| e.expect("dir entry").file_name().to_string_lossy().into_owned())
                .collect(),
            Err(_) => Vec::new(),
        }
    }
}

fn populator(dir: &Path) -> TemplatePopulator {
    let template = write_template(dir);
    TemplatePopulator::new(template, dir.join("out"))
}

/// Working template, counting ID source, recording transport.
pub fn fixture() -> Fixture {
    let dir = TempDir::new().expect("temp dir");
    let ids = Arc::new(CountingIds::default());
    let transport = Arc::new(RecordingTransport::default());
    let dispatcher = Dispatcher::new(transport.clone(), ACCOUNT, &SmtpSettings::default());
    let state = AppState::new(populator(dir.path()), ids.clone(), Ok(dispatcher));
    Fixture {
        dir,
        ids,
        transport,
        state: Arc::new(state),
    }
}

/// State with custom parts around a working template in `dir`.
pub fn state_with(
    dir: &Path,
    ids: Arc<dyn IdSource>,
    dispatcher: Result<Dispatcher, MailError>,
) -> AppState {
    AppState::new(populator(dir), ids, dispatcher)
}
