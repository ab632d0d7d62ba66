//! Template population for filled feedback forms.
//!
//! Loads a `.docx` template, substitutes free-text placeholders such as
//! `[p1]`, marks the selected option of each single-select question with
//! `[X]` (siblings become `[ ]`), and saves the result under a name derived
//! from a freshly generated submission ID.
//!
//! # Example
//!
//! ```rust
//! use feedback_template::placeholder::{mark_options, replace_placeholder};
//!
//! let mut paragraphs = vec![
//!     "Course: [p1]".to_string(),
//!     "[p7] Yes [p8] No [p9] Somewhat".to_string(),
//! ];
//! replace_placeholder(paragraphs.iter_mut(), "p1", "Data 101");
//! mark_options(paragraphs.iter_mut(), &[("p7", true), ("p8", false), ("p9", false)]);
//!
//! assert_eq!(paragraphs[0], "Course: Data 101");
//! assert_eq!(paragraphs[1], "[X] Yes [ ] No [ ] Somewhat");
//! ```

#![warn(clippy::all)]

pub mod document;
pub mod error;
pub mod id_source;
pub mod layout;
pub mod placeholder;
pub mod populator;

pub use document::{ParagraphText, TemplateDocument};
pub use error::{IdError, TemplateError};
pub use id_source::{resolve_submission_id, HttpIdSource, IdSource, LocalIdSource};
pub use layout::{Field, OptionGroup, Selection, TemplateLayout};
pub use populator::{read_paragraphs, FilledDocument, TemplatePopulator, OUTPUT_FILE_PREFIX};
