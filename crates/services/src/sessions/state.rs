use quiz_core::{AnsweredQuestion, Question};

use crate::error::SessionError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Back,
    Forward,
}

//
// ─── SESSION STATE ─────────────────────────────────────────────────────────────
//

/// In-memory state of one quiz run.
///
/// Created from a successful question load and dropped on reload. The
/// current index always points at an existing question.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    questions: Vec<Question>,
    answered: Vec<AnsweredQuestion>,
    current: usize,
    total_correct: u32,
}

impl SessionState {
    /// Start at the first unanswered question, or at the beginning when
    /// everything has been answered already.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::EmptyResult` if `questions` is empty.
    pub fn new(questions: Vec<Question>) -> Result<Self, SessionError> {
        if questions.is_empty() {
            return Err(SessionError::EmptyResult);
        }

        let answered = questions.iter().map(AnsweredQuestion::from_question).collect();
        let current = questions
            .iter()
            .position(|question| !question.is_answered())
            .unwrap_or(0);

        Ok(Self {
            questions,
            answered,
            current,
            total_correct: 0,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current(&self) -> &Question {
        &self.questions[self.current]
    }

    #[must_use]
    pub fn current_answered(&self) -> &AnsweredQuestion {
        &self.answered[self.current]
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn answered(&self) -> &[AnsweredQuestion] {
        &self.answered
    }

    /// Correct submissions made during this session.
    #[must_use]
    pub fn total_correct(&self) -> u32 {
        self.total_correct
    }

    #[must_use]
    pub fn can_go_back(&self) -> bool {
        self.current > 0
    }

    #[must_use]
    pub fn can_go_forward(&self) -> bool {
        self.current + 1 < self.questions.len()
    }

    /// Step one question in `direction`. Returns `false` at the boundaries.
    pub fn navigate(&mut self, direction: Direction) -> bool {
        match direction {
            Direction::Back if self.can_go_back() => self.current -= 1,
            Direction::Forward if self.can_go_forward() => self.current += 1,
            _ => return false,
        }
        true
    }

    /// Jump to a zero-based index. Out-of-range indexes are ignored.
    pub fn jump_to(&mut self, index: usize) -> bool {
        if index >= self.questions.len() {
            return false;
        }
        self.current = index;
        true
    }

    /// Store an accepted answer on both the question and its mirror.
    pub fn record_answer(&mut self, index: usize, answer: &str, correct: bool) {
        let (Some(question), Some(mirror)) =
            (self.questions.get_mut(index), self.answered.get_mut(index))
        else {
            return;
        };

        question.user_answer = answer.to_string();
        mirror.question.user_answer = answer.to_string();
        mirror.correct = correct;
        if correct {
            self.total_correct = self.total_correct.saturating_add(1);
        }
    }
}
