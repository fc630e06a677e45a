use serde::{Deserialize, Serialize};

use super::answer::normalize_answer;

/// A single true/false question as served by the backend.
///
/// An empty `user_answer` means the question has not been answered yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    #[serde(default)]
    pub subject: String,
    pub question: String,
    pub correct_answer: String,
    #[serde(default)]
    pub user_answer: String,
}

impl Question {
    #[must_use]
    pub fn is_answered(&self) -> bool {
        !self.user_answer.is_empty()
    }

    /// Whether the stored answer matches the expected one after normalization.
    #[must_use]
    pub fn answer_matches(&self) -> bool {
        normalize_answer(self.user_answer.as_str()) == normalize_answer(self.correct_answer.as_str())
    }

    /// Text shown to the user, prefixed with the subject tag.
    #[must_use]
    pub fn display_text(&self) -> String {
        format!("[{}] {}", self.subject, self.question)
    }
}

/// A question paired with its correctness verdict.
///
/// The verdict is derived locally when questions are loaded and taken from
/// the server after each submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnsweredQuestion {
    pub question: Question,
    pub correct: bool,
}

impl AnsweredQuestion {
    #[must_use]
    pub fn from_question(question: &Question) -> Self {
        Self {
            correct: question.answer_matches(),
            question: question.clone(),
        }
    }

    #[must_use]
    pub fn user_answer(&self) -> &str {
        &self.question.user_answer
    }

    #[must_use]
    pub fn is_answered(&self) -> bool {
        self.question.is_answered()
    }
}
