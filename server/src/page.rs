//! Server-rendered HTML for the questionnaire.

use crate::form::FeedbackForm;
use crate::notice::Notice;
use askama::Template;
use feedback_core::survey::{QuestionKind, SECTIONS};
use feedback_core::Answer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Text,
    Select,
    TextArea,
}

impl Control {
    pub fn is_text(&self) -> bool {
        *self == Self::Text
    }

    pub fn is_select(&self) -> bool {
        *self == Self::Select
    }
}

#[derive(Debug)]
pub struct OptionView {
    pub label: &'static str,
    pub selected: bool,
}

#[derive(Debug)]
pub struct QuestionView {
    pub key: &'static str,
    pub prompt: &'static str,
    pub control: Control,
    pub value: String,
    pub options: Vec<OptionView>,
}

#[derive(Debug)]
pub struct SectionView {
    pub title: &'static str,
    pub questions: Vec<QuestionView>,
}

/// The questionnaire page. Every interpolated value is escaped by the
/// template engine.
#[derive(Template)]
#[template(path = "form.html")]
pub struct FormPage<'a> {
    pub sections: Vec<SectionView>,
    pub inline_error: Option<&'a str>,
    pub notices: &'a [Notice],
}

impl<'a> FormPage<'a> {
    pub fn new(form: &FeedbackForm, inline_error: Option<&'a str>, notices: &'a [Notice]) -> Self {
        let answers = form.to_answer_set();
        let sections = SECTIONS
            .iter()
            .map(|section| SectionView {
                title: section.title,
                questions: section
                    .questions
                    .iter()
                    .map(|question| {
                        let value = answers.get(question.key).map_or("", Answer::as_str);
                        let (control, options) = match question.kind {
                            QuestionKind::RequiredText => (Control::Text, Vec::new()),
                            QuestionKind::LongText => (Control::TextArea, Vec::new()),
                            QuestionKind::SingleSelect(labels) => (
                                Control::Select,
                                labels
                                    .iter()
                                    .map(|&label| OptionView {
                                        label,
                                        selected: label == value,
                                    })
                                    .collect(),
                            ),
                        };
                        QuestionView {
                            key: question.key,
                            prompt: question.prompt,
                            control,
                            value: value.to_string(),
                            options,
                        }
                    })
                    .collect(),
            })
            .collect();

        Self {
            sections,
            inline_error,
            notices,
        }
    }
}

/// Render the form pre-filled with `form`, an optional inline validation
/// error, and the notices of the last submission.
pub fn render_form(
    form: &FeedbackForm,
    inline_error: Option<&str>,
    notices: &[Notice],
) -> Result<String, askama::Error> {
    FormPage::new(form, inline_error, notices).render()
}
