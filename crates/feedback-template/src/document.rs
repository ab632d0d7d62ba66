//! `.docx` loading, paragraph text access and saving.
//!
//! A paragraph's text is the concatenation of its runs (tabs as `\t`, line
//! breaks as `\n`). Rewriting a paragraph collapses its runs into a single
//! run that keeps the first run's formatting.

use crate::error::{Result, TemplateError};
use docx_rs::{
    read_docx, BreakType, DocumentChild, Docx, Paragraph, ParagraphChild, Run, RunChild, RunProperty,
};
use std::fmt;
use std::fs::{self, File};
use std::path::Path;

/// Read and replace the plain text of one paragraph.
pub trait ParagraphText {
    fn text(&self) -> String;
    fn set_text(&mut self, text: &str);
}

impl ParagraphText for String {
    fn text(&self) -> String {
        self.clone()
    }

    fn set_text(&mut self, text: &str) {
        text.clone_into(self);
    }
}

impl ParagraphText for Paragraph {
    fn text(&self) -> String {
        let mut text = String::new();
        for child in &self.children {
            if let ParagraphChild::Run(run) = child {
                for rc in &run.children {
                    match rc {
                        RunChild::Text(t) => text.push_str(&t.text),
                        RunChild::Tab(_) => text.push('\t'),
                        RunChild::Break(_) => text.push('\n'),
                        _ => {}
                    }
                }
            }
        }
        text
    }

    fn set_text(&mut self, text: &str) {
        let first_run = self
            .children
            .iter()
            .position(|c| matches!(c, ParagraphChild::Run(_)));
        let run_property = first_run
            .and_then(|i| match &self.children[i] {
                ParagraphChild::Run(run) => Some(run.run_property.clone()),
                _ => None,
            })
            .unwrap_or_else(RunProperty::new);

        let mut run = text_run(text);
        run.run_property = run_property;

        // Non-run children (bookmarks, hyperlinks) stay where they were.
        self.children.retain(|c| !matches!(c, ParagraphChild::Run(_)));
        let at = first_run.unwrap_or(self.children.len());
        self.children.insert(at, ParagraphChild::Run(Box::new(run)));
    }
}

fn text_run(text: &str) -> Run {
    let mut run = Run::new();
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            run = run.add_break(BreakType::TextWrapping);
        }
        for (j, segment) in line.split('\t').enumerate() {
            if j > 0 {
                run = run.add_tab();
            }
            if !segment.is_empty() {
                run = run.add_text(segment);
            }
        }
    }
    run
}

/// A loaded template. Loaded fresh for each submission and never written
/// back to its source path.
pub struct TemplateDocument {
    docx: Docx,
}

impl fmt::Debug for TemplateDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemplateDocument").finish_non_exhaustive()
    }
}

impl TemplateDocument {
    pub fn open(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).map_err(|source| TemplateError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let docx = read_docx(&bytes).map_err(|e| TemplateError::Read {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        tracing::debug!("Loaded template {}", path.display());
        Ok(Self { docx })
    }

    pub fn from_docx(docx: Docx) -> Self {
        Self { docx }
    }

    /// Top-level body paragraphs, in document order.
    pub fn paragraphs_mut(&mut self) -> impl Iterator<Item = &mut Paragraph> + '_ {
        self.docx
            .document
            .children
            .iter_mut()
            .filter_map(|child| match child {
                DocumentChild::Paragraph(p) => Some(p.as_mut()),
                _ => None,
            })
    }

    pub fn paragraph_texts(&self) -> Vec<String> {
        self.docx
            .document
            .children
            .iter()
            .filter_map(|child| match child {
                DocumentChild::Paragraph(p) => Some(p.text()),
                _ => None,
            })
            .collect()
    }

    pub fn save(self, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|e| TemplateError::Write {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        self.docx
            .build()
            .pack(file)
            .map_err(|e| TemplateError::Write {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        tracing::debug!("Saved document {}", path.display());
        Ok(())
    }
}
