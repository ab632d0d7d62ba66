//! The student feedback questionnaire.
//!
//! Question keys, the enumerated option types for single-select questions,
//! and the section/question outline the form is rendered from.

use serde::{Deserialize, Serialize};

/// Question keys shared by the form, the answer set and the template layout.
pub mod keys {
    /// Course name (the only required field)
    pub const COURSE_NAME: &str = "course_name";
    /// Satisfaction with the course selection process
    pub const COURSE_SELECTION_FEEDBACK: &str = "course_selection_feedback";
    /// Whether course information was clear
    pub const COURSE_INFO_CLARITY: &str = "course_info_clarity";
    /// Suggestions for the course selection process
    pub const COURSE_SELECTION_SUGGESTIONS: &str = "course_selection_suggestions";
    /// Rating of guidance when choosing a course
    pub const COURSE_GUIDANCE_RATING: &str = "course_guidance_rating";
    /// Satisfaction with course delivery
    pub const COURSE_DELIVERY_SATISFACTION: &str = "course_delivery_satisfaction";
    /// Relevance of course content to career goals
    pub const COURSE_CONTENT_RELEVANCE: &str = "course_content_relevance";
    /// Suggestions for course guidance or delivery
    pub const COURSE_GUIDANCE_SUGGESTIONS: &str = "course_guidance_suggestions";
    /// Satisfaction with job guidance services
    pub const JOB_GUIDANCE_SATISFACTION: &str = "job_guidance_satisfaction";
    /// Helpfulness of job application support
    pub const JOB_APPLICATION_HELPFULNESS: &str = "job_application_helpfulness";
    /// Adequacy of interview preparation support
    pub const INTERVIEW_PREPARATION_SUPPORT: &str = "interview_preparation_support";
    /// Suggestions for job guidance or application support
    pub const JOB_GUIDANCE_SUGGESTIONS: &str = "job_guidance_suggestions";
    /// Most helpful service
    pub const MOST_HELPFUL_SERVICE: &str = "most_helpful_service";
    /// Areas needing improvement
    pub const AREAS_FOR_IMPROVEMENT: &str = "areas_for_improvement";
    /// Any other comments
    pub const OTHER_COMMENTS: &str = "other_comments";
}

/// A closed set of labelled options for a single-select question.
pub trait ChoiceOption: Copy + Sized + 'static {
    /// Every option, in display order.
    const ALL: &'static [Self];

    /// Every option label, in display order.
    const LABELS: &'static [&'static str];

    /// The label shown to the user and written to the answer set.
    fn label(self) -> &'static str;

    /// Find the option with exactly this label.
    #[must_use]
    fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|o| o.label() == label)
    }

    /// The option preselected by the form control.
    #[must_use]
    fn default_option() -> Self {
        Self::ALL[0]
    }
}

/// Five-point satisfaction scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Satisfaction {
    /// Very Satisfied
    #[serde(rename = "Very Satisfied")]
    VerySatisfied,
    /// Satisfied
    #[serde(rename = "Satisfied")]
    Satisfied,
    /// Neutral
    #[serde(rename = "Neutral")]
    Neutral,
    /// Unsatisfied
    #[serde(rename = "Unsatisfied")]
    Unsatisfied,
    /// Very Unsatisfied
    #[serde(rename = "Very Unsatisfied")]
    VeryUnsatisfied,
}

impl ChoiceOption for Satisfaction {
    const ALL: &'static [Self] = &[
        Self::VerySatisfied,
        Self::Satisfied,
        Self::Neutral,
        Self::Unsatisfied,
        Self::VeryUnsatisfied,
    ];
    const LABELS: &'static [&'static str] = &[
        "Very Satisfied",
        "Satisfied",
        "Neutral",
        "Unsatisfied",
        "Very Unsatisfied",
    ];

    fn label(self) -> &'static str {
        match self {
            Self::VerySatisfied => "Very Satisfied",
            Self::Satisfied => "Satisfied",
            Self::Neutral => "Neutral",
            Self::Unsatisfied => "Unsatisfied",
            Self::VeryUnsatisfied => "Very Unsatisfied",
        }
    }
}

/// Yes / No / Somewhat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum YesNoSomewhat {
    /// Yes
    Yes,
    /// No
    No,
    /// Somewhat
    Somewhat,
}

impl ChoiceOption for YesNoSomewhat {
    const ALL: &'static [Self] = &[Self::Yes, Self::No, Self::Somewhat];
    const LABELS: &'static [&'static str] = &["Yes", "No", "Somewhat"];

    fn label(self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
            Self::Somewhat => "Somewhat",
        }
    }
}

/// Four-point quality rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GuidanceRating {
    /// Excellent
    Excellent,
    /// Good
    Good,
    /// Fair
    Fair,
    /// Poor
    Poor,
}

impl ChoiceOption for GuidanceRating {
    const ALL: &'static [Self] = &[Self::Excellent, Self::Good, Self::Fair, Self::Poor];
    const LABELS: &'static [&'static str] = &["Excellent", "Good", "Fair", "Poor"];

    fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
        }
    }
}

/// Relevance of course content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Relevance {
    /// Highly Relevant
    #[serde(rename = "Highly Relevant")]
    HighlyRelevant,
    /// Relevant
    #[serde(rename = "Relevant")]
    Relevant,
    /// Somewhat Relevant
    #[serde(rename = "Somewhat Relevant")]
    SomewhatRelevant,
    /// Not Relevant
    #[serde(rename = "Not Relevant")]
    NotRelevant,
}

impl ChoiceOption for Relevance {
    const ALL: &'static [Self] = &[
        Self::HighlyRelevant,
        Self::Relevant,
        Self::SomewhatRelevant,
        Self::NotRelevant,
    ];
    const LABELS: &'static [&'static str] = &[
        "Highly Relevant",
        "Relevant",
        "Somewhat Relevant",
        "Not Relevant",
    ];

    fn label(self) -> &'static str {
        match self {
            Self::HighlyRelevant => "Highly Relevant",
            Self::Relevant => "Relevant",
            Self::SomewhatRelevant => "Somewhat Relevant",
            Self::NotRelevant => "Not Relevant",
        }
    }
}

/// Five-point helpfulness scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Helpfulness {
    /// Extremely Helpful
    #[serde(rename = "Extremely Helpful")]
    ExtremelyHelpful,
    /// Very Helpful
    #[serde(rename = "Very Helpful")]
    VeryHelpful,
    /// Moderately Helpful
    #[serde(rename = "Moderately Helpful")]
    ModeratelyHelpful,
    /// Slightly Helpful
    #[serde(rename = "Slightly Helpful")]
    SlightlyHelpful,
    /// Not Helpful
    #[serde(rename = "Not Helpful")]
    NotHelpful,
}

impl ChoiceOption for Helpfulness {
    const ALL: &'static [Self] = &[
        Self::ExtremelyHelpful,
        Self::VeryHelpful,
        Self::ModeratelyHelpful,
        Self::SlightlyHelpful,
        Self::NotHelpful,
    ];
    const LABELS: &'static [&'static str] = &[
        "Extremely Helpful",
        "Very Helpful",
        "Moderately Helpful",
        "Slightly Helpful",
        "Not Helpful",
    ];

    fn label(self) -> &'static str {
        match self {
            Self::ExtremelyHelpful => "Extremely Helpful",
            Self::VeryHelpful => "Very Helpful",
            Self::ModeratelyHelpful => "Moderately Helpful",
            Self::SlightlyHelpful => "Slightly Helpful",
            Self::NotHelpful => "Not Helpful",
        }
    }
}

/// How a question is answered on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    /// Single-line text input that must not be empty
    RequiredText,
    /// Single-select drop-down with these labels, first preselected
    SingleSelect(&'static [&'static str]),
    /// Optional multi-line text area
    LongText,
}

/// One question on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    /// Answer set key
    pub key: &'static str,
    /// Prompt shown to the user
    pub prompt: &'static str,
    /// Input control
    pub kind: QuestionKind,
}

/// A titled group of questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    /// Heading shown above the questions
    pub title: &'static str,
    /// Questions in display order
    pub questions: &'static [Question],
}

/// The questionnaire outline, in display order.
pub const SECTIONS: &[Section] = &[
    Section {
        title: "1. Course Name",
        questions: &[Question {
            key: keys::COURSE_NAME,
            prompt: "Course Name",
            kind: QuestionKind::RequiredText,
        }],
    },
    Section {
        title: "2. Course Selection Feedback",
        questions: &[
            Question {
                key: keys::COURSE_SELECTION_FEEDBACK,
                prompt: "How satisfied are you with the course selection process?",
                kind: QuestionKind::SingleSelect(Satisfaction::LABELS),
            },
            Question {
                key: keys::COURSE_INFO_CLARITY,
                prompt: "Was the information about the courses clear?",
                kind: QuestionKind::SingleSelect(YesNoSomewhat::LABELS),
            },
            Question {
                key: keys::COURSE_SELECTION_SUGGESTIONS,
                prompt: "Suggestions to improve the course selection process",
                kind: QuestionKind::LongText,
            },
        ],
    },
    Section {
        title: "3. Course Guidance and Delivery Feedback",
        questions: &[
            Question {
                key: keys::COURSE_GUIDANCE_RATING,
                prompt: "Rate the guidance when selecting the right course:",
                kind: QuestionKind::SingleSelect(GuidanceRating::LABELS),
            },
            Question {
                key: keys::COURSE_DELIVERY_SATISFACTION,
                prompt: "How satisfied are you with the course delivery?",
                kind: QuestionKind::SingleSelect(Satisfaction::LABELS),
            },
            Question {
                key: keys::COURSE_CONTENT_RELEVANCE,
                prompt: "Was the course content relevant to your career goals?",
                kind: QuestionKind::SingleSelect(Relevance::LABELS),
            },
            Question {
                key: keys::COURSE_GUIDANCE_SUGGESTIONS,
                prompt: "Suggestions to improve course guidance or delivery",
                kind: QuestionKind::LongText,
            },
        ],
    },
    Section {
        title: "4. Job Guidance and Application Support Feedback",
        questions: &[
            Question {
                key: keys::JOB_GUIDANCE_SATISFACTION,
                prompt: "How satisfied are you with the job guidance services?",
                kind: QuestionKind::SingleSelect(Satisfaction::LABELS),
            },
            Question {
                key: keys::JOB_APPLICATION_HELPFULNESS,
                prompt: "How helpful was the job application support?",
                kind: QuestionKind::SingleSelect(Helpfulness::LABELS),
            },
            Question {
                key: keys::INTERVIEW_PREPARATION_SUPPORT,
                prompt: "Did you receive adequate support for interview preparation?",
                kind: QuestionKind::SingleSelect(YesNoSomewhat::LABELS),
            },
            Question {
                key: keys::JOB_GUIDANCE_SUGGESTIONS,
                prompt: "Suggestions to improve job guidance or application support",
                kind: QuestionKind::LongText,
            },
        ],
    },
    Section {
        title: "5. Additional Feedback",
        questions: &[
            Question {
                key: keys::MOST_HELPFUL_SERVICE,
                prompt: "What did you find most helpful about our services?",
                kind: QuestionKind::LongText,
            },
            Question {
                key: keys::AREAS_FOR_IMPROVEMENT,
                prompt: "What areas need improvement?",
                kind: QuestionKind::LongText,
            },
            Question {
                key: keys::OTHER_COMMENTS,
                prompt: "Any other comments or suggestions?",
                kind: QuestionKind::LongText,
            },
        ],
    },
];

/// Every question across all sections, in display order.
pub fn questions() -> impl Iterator<Item = &'static Question> {
    SECTIONS.iter().flat_map(|s| s.questions.iter())
}
