//! Running accuracy statistics over the answered part of a question set.

use crate::model::AnsweredQuestion;

/// Number of most recent answers that make up the rolling accuracy.
pub const DEFAULT_ROLLING_WINDOW: usize = 20;

/// Snapshot of accuracy figures, all percentages in `0.0..=100.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AccuracyReport {
    pub total_questions: usize,
    pub answered: usize,
    pub correct: usize,
    pub total_accuracy: f64,
    pub rolling_accuracy: f64,
}

impl AccuracyReport {
    /// Compute accuracy over `questions`.
    ///
    /// Correctness is re-derived by comparing normalized answers. The rolling
    /// figure covers the last `window` answered questions in question order,
    /// not the last `window` questions overall.
    #[must_use]
    pub fn compute(questions: &[AnsweredQuestion], window: usize) -> Self {
        let answered: Vec<&AnsweredQuestion> =
            questions.iter().filter(|item| item.is_answered()).collect();
        let correct = count_matching(&answered);

        let recent = &answered[answered.len().saturating_sub(window)..];
        let recent_correct = count_matching(recent);

        Self {
            total_questions: questions.len(),
            answered: answered.len(),
            correct,
            total_accuracy: ratio_percent(correct, answered.len()),
            rolling_accuracy: ratio_percent(recent_correct, recent.len()),
        }
    }

    /// Share of questions that have an answer.
    #[must_use]
    pub fn answered_percentage(&self) -> f64 {
        ratio_percent(self.answered, self.total_questions)
    }

    /// Answered share formatted with two decimals, e.g. `"40.00"`.
    #[must_use]
    pub fn answered_percentage_label(&self) -> String {
        format!("{:.2}", self.answered_percentage())
    }
}

fn count_matching(items: &[&AnsweredQuestion]) -> usize {
    items
        .iter()
        .filter(|item| item.question.answer_matches())
        .count()
}

#[allow(clippy::cast_precision_loss)]
fn ratio_percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    (part as f64 / whole as f64 * 100.0).clamp(0.0, 100.0)
}
