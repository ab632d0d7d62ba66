//! The submitted questionnaire.

use crate::error::{codes, CommandError};
use feedback_core::survey::{
    keys, ChoiceOption, GuidanceRating, Helpfulness, Relevance, Satisfaction, YesNoSomewhat,
};
use feedback_core::AnswerSet;
use serde::{Deserialize, Serialize};

/// Inline message shown when the course name is left blank.
pub const REQUIRED_FIELD_MESSAGE: &str =
    "Please fill in all required fields, including course name.";

fn first<C: ChoiceOption>() -> C {
    C::default_option()
}

/// One form post. Absent fields take the control's initial value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackForm {
    #[serde(default)]
    pub course_name: String,
    #[serde(default = "first")]
    pub course_selection_feedback: Satisfaction,
    #[serde(default = "first")]
    pub course_info_clarity: YesNoSomewhat,
    #[serde(default)]
    pub course_selection_suggestions: String,
    #[serde(default = "first")]
    pub course_guidance_rating: GuidanceRating,
    #[serde(default = "first")]
    pub course_delivery_satisfaction: Satisfaction,
    #[serde(default = "first")]
    pub course_content_relevance: Relevance,
    #[serde(default)]
    pub course_guidance_suggestions: String,
    #[serde(default = "first")]
    pub job_guidance_satisfaction: Satisfaction,
    #[serde(default = "first")]
    pub job_application_helpfulness: Helpfulness,
    #[serde(default = "first")]
    pub interview_preparation_support: YesNoSomewhat,
    #[serde(default)]
    pub job_guidance_suggestions: String,
    #[serde(default)]
    pub most_helpful_service: String,
    #[serde(default)]
    pub areas_for_improvement: String,
    #[serde(default)]
    pub other_comments: String,
}

impl Default for FeedbackForm {
    fn default() -> Self {
        Self {
            course_name: String::new(),
            course_selection_feedback: first(),
            course_info_clarity: first(),
            course_selection_suggestions: String::new(),
            course_guidance_rating: first(),
            course_delivery_satisfaction: first(),
            course_content_relevance: first(),
            course_guidance_suggestions: String::new(),
            job_guidance_satisfaction: first(),
            job_application_helpfulness: first(),
            interview_preparation_support: first(),
            job_guidance_suggestions: String::new(),
            most_helpful_service: String::new(),
            areas_for_improvement: String::new(),
            other_comments: String::new(),
        }
    }
}

impl FeedbackForm {
    /// Reject an empty course name; nothing else is required.
    pub fn validate(&self) -> Result<(), CommandError> {
        if self.course_name.is_empty() {
            return Err(CommandError::with_details(
                codes::REQUIRED_FIELD_MISSING,
                REQUIRED_FIELD_MESSAGE,
                serde_json::json!({ "field": keys::COURSE_NAME }),
            ));
        }
        Ok(())
    }

    /// All fifteen answers, in questionnaire order.
    pub fn to_answer_set(&self) -> AnswerSet {
        AnswerSet::new()
            .with_text(keys::COURSE_NAME, &self.course_name)
            .with_choice(
                keys::COURSE_SELECTION_FEEDBACK,
                self.course_selection_feedback.label(),
            )
            .with_choice(keys::COURSE_INFO_CLARITY, self.course_info_clarity.label())
            .with_text(
                keys::COURSE_SELECTION_SUGGESTIONS,
                &self.course_selection_suggestions,
            )
            .with_choice(
                keys::COURSE_GUIDANCE_RATING,
                self.course_guidance_rating.label(),
            )
            .with_choice(
                keys::COURSE_DELIVERY_SATISFACTION,
                self.course_delivery_satisfaction.label(),
            )
            .with_choice(
                keys::COURSE_CONTENT_RELEVANCE,
                self.course_content_relevance.label(),
            )
            .with_text(
                keys::COURSE_GUIDANCE_SUGGESTIONS,
                &self.course_guidance_suggestions,
            )
            .with_choice(
                keys::JOB_GUIDANCE_SATISFACTION,
                self.job_guidance_satisfaction.label(),
            )
            .with_choice(
                keys::JOB_APPLICATION_HELPFULNESS,
                self.job_application_helpfulness.label(),
            )
            .with_choice(
                keys::INTERVIEW_PREPARATION_SUPPORT,
                self.interview_preparation_support.label(),
            )
            .with_text(keys::JOB_GUIDANCE_SUGGESTIONS, &self.job_guidance_suggestions)
            .with_text(keys::MOST_HELPFUL_SERVICE, &self.most_helpful_service)
            .with_text(keys::AREAS_FOR_IMPROVEMENT, &self.areas_for_improvement)
            .with_text(keys::OTHER_COMMENTS, &self.other_comments)
    }
}
