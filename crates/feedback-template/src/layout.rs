//! Mapping between question keys and template placeholder tags.

use feedback_core::survey::{
    keys, ChoiceOption, GuidanceRating, Helpfulness, Relevance, Satisfaction, YesNoSomewhat,
};

/// The result of matching a submitted answer against an option group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// The answer equals this option's label.
    Matched {
        tag: &'static str,
        label: &'static str,
    },
    /// The answer matches no label; every tag in the group renders unmarked.
    Unmatched,
}

/// One single-select question: its key and an ordered `(tag, label)` list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionGroup {
    pub key: &'static str,
    pub options: &'static [(&'static str, &'static str)],
}

impl OptionGroup {
    /// Exact, case-sensitive label match.
    pub fn select(&self, answer: &str) -> Selection {
        self.options
            .iter()
            .find(|(_, label)| *label == answer)
            .map_or(Selection::Unmatched, |&(tag, label)| Selection::Matched {
                tag,
                label,
            })
    }

    /// `(tag, selected)` pairs for [`crate::placeholder::mark_options`].
    pub fn marks(&self, answer: &str) -> Vec<(&'static str, bool)> {
        let selected = match self.select(answer) {
            Selection::Matched { tag, .. } => Some(tag),
            Selection::Unmatched => None,
        };
        self.options
            .iter()
            .map(|&(tag, _)| (tag, Some(tag) == selected))
            .collect()
    }

    pub fn tags(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.options.iter().map(|&(tag, _)| tag)
    }

    pub fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.options.iter().map(|&(_, label)| label)
    }
}

/// How one question lands in the template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Free text replacing a single tag.
    Text {
        key: &'static str,
        tag: &'static str,
    },
    /// Single-select question rendered as a group of check marks.
    Choice(OptionGroup),
}

impl Field {
    pub fn key(&self) -> &'static str {
        match self {
            Self::Text { key, .. } => *key,
            Self::Choice(group) => group.key,
        }
    }

    pub fn tags(&self) -> Vec<&'static str> {
        match self {
            Self::Text { tag, .. } => vec![*tag],
            Self::Choice(group) => group.tags().collect(),
        }
    }
}

const SATISFACTION: &[&str] = Satisfaction::LABELS;
const YES_NO_SOMEWHAT: &[&str] = YesNoSomewhat::LABELS;

const STUDENT_FEEDBACK: &[Field] = &[
    Field::Text {
        key: keys::COURSE_NAME,
        tag: "p1",
    },
    Field::Choice(OptionGroup {
        key: keys::COURSE_SELECTION_FEEDBACK,
        options: &[
            ("p2", SATISFACTION[0]),
            ("p3", SATISFACTION[1]),
            ("p4", SATISFACTION[2]),
            ("p5", SATISFACTION[3]),
            ("p6", SATISFACTION[4]),
        ],
    }),
    Field::Choice(OptionGroup {
        key: keys::COURSE_INFO_CLARITY,
        options: &[
            ("p7", YES_NO_SOMEWHAT[0]),
            ("p8", YES_NO_SOMEWHAT[1]),
            ("p9", YES_NO_SOMEWHAT[2]),
        ],
    }),
    Field::Text {
        key: keys::COURSE_SELECTION_SUGGESTIONS,
        tag: "p10",
    },
    Field::Choice(OptionGroup {
        key: keys::COURSE_GUIDANCE_RATING,
        options: &[
            ("p11", GuidanceRating::LABELS[0]),
            ("p12", GuidanceRating::LABELS[1]),
            ("p13", GuidanceRating::LABELS[2]),
            ("p14", GuidanceRating::LABELS[3]),
        ],
    }),
    Field::Choice(OptionGroup {
        key: keys::COURSE_DELIVERY_SATISFACTION,
        options: &[
            ("p15", SATISFACTION[0]),
            ("p16", SATISFACTION[1]),
            ("p17", SATISFACTION[2]),
            ("p18", SATISFACTION[3]),
            ("p19", SATISFACTION[4]),
        ],
    }),
    Field::Choice(OptionGroup {
        key: keys::COURSE_CONTENT_RELEVANCE,
        options: &[
            ("p20", Relevance::LABELS[0]),
            ("p21", Relevance::LABELS[1]),
            ("p22", Relevance::LABELS[2]),
            ("p23", Relevance::LABELS[3]),
        ],
    }),
    Field::Text {
        key: keys::COURSE_GUIDANCE_SUGGESTIONS,
        tag: "p24",
    },
    Field::Choice(OptionGroup {
        key: keys::JOB_GUIDANCE_SATISFACTION,
        options: &[
            ("p25", SATISFACTION[0]),
            ("p26", SATISFACTION[1]),
            ("p27", SATISFACTION[2]),
            ("p28", SATISFACTION[3]),
            ("p29", SATISFACTION[4]),
        ],
    }),
    Field::Choice(OptionGroup {
        key: keys::JOB_APPLICATION_HELPFULNESS,
        options: &[
            ("p30", Helpfulness::LABELS[0]),
            ("p31", Helpfulness::LABELS[1]),
            ("p32", Helpfulness::LABELS[2]),
            ("p33", Helpfulness::LABELS[3]),
            ("p34", Helpfulness::LABELS[4]),
        ],
    }),
    Field::Choice(OptionGroup {
        key: keys::INTERVIEW_PREPARATION_SUPPORT,
        options: &[
            ("p35", YES_NO_SOMEWHAT[0]),
            ("p36", YES_NO_SOMEWHAT[1]),
            ("p37", YES_NO_SOMEWHAT[2]),
        ],
    }),
    Field::Text {
        key: keys::JOB_GUIDANCE_SUGGESTIONS,
        tag: "p38",
    },
    Field::Text {
        key: keys::MOST_HELPFUL_SERVICE,
        tag: "p39",
    },
    Field::Text {
        key: keys::AREAS_FOR_IMPROVEMENT,
        tag: "p40",
    },
    Field::Text {
        key: keys::OTHER_COMMENTS,
        tag: "p41",
    },
];

/// Ordered fields applied to a template, in the order they are applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateLayout {
    fields: Vec<Field>,
}

impl TemplateLayout {
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    /// The student feedback form: tags `p1` through `p41`.
    pub fn student_feedback() -> Self {
        Self::new(STUDENT_FEEDBACK.to_vec())
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(Field::key)
    }

    pub fn tags(&self) -> Vec<&'static str> {
        self.fields.iter().flat_map(Field::tags).collect()
    }
}

impl Default for TemplateLayout {
    fn default() -> Self {
        Self::student_feedback()
    }
}
