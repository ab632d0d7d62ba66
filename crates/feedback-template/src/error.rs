use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("missing answer for question '{key}'")]
    MissingAnswer { key: String },

    #[error("cannot create output directory {}: {source}", path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read template {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("template {} is not a readable .docx: {reason}", path.display())]
    Read { path: PathBuf, reason: String },

    #[error("failed to write {}: {reason}", path.display())]
    Write { path: PathBuf, reason: String },

    #[error("population task failed: {0}")]
    Task(String),
}

#[derive(Debug, Error)]
pub enum IdError {
    #[error("ID service request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("ID service returned HTTP {0}")]
    Status(u16),

    #[error("ID service response malformed: {0}")]
    MalformedResponse(String),

    #[error("failed to create HTTP client: {0}")]
    Client(String),
}

pub type Result<T> = std::result::Result<T, TemplateError>;
