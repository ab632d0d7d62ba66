//! Feedback Core - Foundation crate for the feedback form service.
//!
//! This crate provides the shared answer model, the fixed question schema,
//! error handling and configuration that the populator, the dispatcher and
//! the server shell all depend on.
//!
//! # Modules
//!
//! - [`error`] - Central error types using thiserror
//! - [`config`] - TOML-based configuration with XDG paths and env overrides
//! - [`secrets`] - Mail account credentials kept out of the main config
//! - [`types`] - `AnswerSet`, `Answer`, `SubmissionId`, `Timestamp`
//! - [`survey`] - Question keys and the enumerated answer options
//!
//! # Example
//!
//! ```rust
//! use feedback_core::survey::{keys, ChoiceOption, Satisfaction};
//! use feedback_core::AnswerSet;
//!
//! let answers = AnswerSet::new()
//!     .with_text(keys::COURSE_NAME, "Data 101")
//!     .with_choice(keys::COURSE_SELECTION_FEEDBACK, Satisfaction::Satisfied.label());
//!
//! assert_eq!(answers.get(keys::COURSE_NAME).map(|a| a.as_str()), Some("Data 101"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod config;
pub mod error;
pub mod secrets;
pub mod survey;
pub mod types;

// Re-export commonly used types
pub use config::{AppConfig, IdMode, IdServiceConfig, ServerConfig, SmtpSettings, TemplateConfig};
pub use error::{ConfigError, ConfigResult, FeedbackError, Result};
pub use secrets::Secrets;
pub use types::{Answer, AnswerSet, SubmissionId, Timestamp, FALLBACK_ID};
