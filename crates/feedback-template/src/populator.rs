use crate::document::TemplateDocument;
use crate::error::{Result, TemplateError};
use crate::id_source::{resolve_submission_id, IdSource};
use crate::layout::{Field, Selection, TemplateLayout};
use crate::placeholder::{mark_options, replace_placeholder, scan_tags};
use feedback_core::{AnswerSet, SubmissionId, TemplateConfig};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

/// File name prefix of every filled document.
pub const OUTPUT_FILE_PREFIX: &str = "Filled_Student_Feedback_Form_";

/// A populated document written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilledDocument {
    pub path: PathBuf,
    pub id: SubmissionId,
    /// Questions whose answer matched none of their options.
    pub unmatched_questions: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct TemplatePopulator {
    template_path: PathBuf,
    output_dir: PathBuf,
    layout: TemplateLayout,
}

impl TemplatePopulator {
    pub fn new(template_path: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            template_path: template_path.into(),
            output_dir: output_dir.into(),
            layout: TemplateLayout::student_feedback(),
        }
    }

    pub fn from_config(config: &TemplateConfig) -> Self {
        Self::new(config.template_path.clone(), config.output_dir.clone())
    }

    pub fn template_path(&self) -> &Path {
        &self.template_path
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn output_path(&self, id: &SubmissionId) -> PathBuf {
        self.output_dir
            .join(format!("{OUTPUT_FILE_PREFIX}{}.docx", id.as_str()))
    }

    /// Fill the template with `answers` and save it under a fresh ID.
    ///
    /// The ID source is asked exactly once; its failure is not an error here,
    /// the returned document then carries the fallback ID.
    pub async fn populate(&self, answers: &AnswerSet, ids: &dyn IdSource) -> Result<FilledDocument> {
        self.check_answers(answers)?;

        fs::create_dir_all(&self.output_dir).map_err(|source| TemplateError::OutputDir {
            path: self.output_dir.clone(),
            source,
        })?;

        let id = resolve_submission_id(ids).await;

        let populator = self.clone();
        let answers = answers.clone();
        tokio::task::spawn_blocking(move || populator.populate_with_id(&answers, id))
            .await
            .map_err(|e| TemplateError::Task(e.to_string()))?
    }

    /// Synchronous core of [`Self::populate`] with the ID already decided.
    pub fn populate_with_id(
        &self,
        answers: &AnswerSet,
        id: SubmissionId,
    ) -> Result<FilledDocument> {
        self.check_answers(answers)?;

        let mut document = TemplateDocument::open(&self.template_path)?;
        let present: BTreeSet<String> = document
            .paragraph_texts()
            .iter()
            .flat_map(|text| {
                scan_tags(text)
                    .into_iter()
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .collect();
        for tag in self.layout.tags() {
            if !present.contains(tag) {
                tracing::debug!("Template has no [{}] placeholder", tag);
            }
        }

        let unmatched_questions = self.apply(&mut document, answers);

        for text in document.paragraph_texts() {
            for tag in scan_tags(&text) {
                tracing::warn!("Placeholder [{}] left unfilled", tag);
            }
        }

        let path = self.output_path(&id);
        document.save(&path)?;
        tracing::info!("Filled document written to {}", path.display());

        Ok(FilledDocument {
            path,
            id,
            unmatched_questions,
        })
    }

    /// Apply every layout field in order. Returns keys of unmatched choices.
    fn apply(&self, document: &mut TemplateDocument, answers: &AnswerSet) -> Vec<String> {
        let mut unmatched = Vec::new();

        for field in self.layout.fields() {
            let Some(answer) = answers.get(field.key()) else {
                continue;
            };
            match field {
                Field::Text { tag, .. } => {
                    let changed =
                        replace_placeholder(document.paragraphs_mut(), tag, answer.as_str());
                    tracing::debug!("[{}] replaced in {} paragraph(s)", tag, changed);
                }
                Field::Choice(group) => {
                    if group.select(answer.as_str()) == Selection::Unmatched {
                        tracing::warn!(
                            "Answer '{}' for {} matches no option; leaving all options unmarked",
                            answer.as_str(),
                            group.key
                        );
                        unmatched.push(group.key.to_string());
                    }
                    let marks = group.marks(answer.as_str());
                    let changed = mark_options(document.paragraphs_mut(), &marks);
                    tracing::debug!("{} marked in {} paragraph(s)", group.key, changed);
                }
            }
        }

        unmatched
    }

    fn check_answers(&self, answers: &AnswerSet) -> Result<()> {
        match answers.missing_keys(self.layout.keys()).into_iter().next() {
            Some(key) => Err(TemplateError::MissingAnswer { key }),
            None => Ok(()),
        }
    }
}

/// Paragraph texts of a saved document, for inspection.
pub fn read_paragraphs(path: &Path) -> Result<Vec<String>> {
    Ok(TemplateDocument::open(path)?.paragraph_texts())
}
