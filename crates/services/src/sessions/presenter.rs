use quiz_core::{AnsweredQuestion, ProgressBar, TRUE_ANSWER, normalize_answer};

/// The two accuracy meters on the quiz screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Metric {
    TotalAccuracy,
    RollingAccuracy,
}

impl Metric {
    /// Stable identifier, used as an element id prefix by views.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Metric::TotalAccuracy => "totalAccuracy",
            Metric::RollingAccuracy => "rollingAccuracy",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonStyle {
    #[default]
    Neutral,
    Correct,
    Incorrect,
}

/// Enabled state and styling of the true/false buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnswerButtons {
    pub enabled: bool,
    pub true_style: ButtonStyle,
    pub false_style: ButtonStyle,
}

impl Default for AnswerButtons {
    fn default() -> Self {
        Self {
            enabled: true,
            true_style: ButtonStyle::Neutral,
            false_style: ButtonStyle::Neutral,
        }
    }
}

impl AnswerButtons {
    /// Unanswered questions get two live, neutral buttons. Answered ones lock
    /// both and mark the chosen button with the stored verdict; any answer
    /// other than `TRUE` is shown on the false button.
    #[must_use]
    pub fn for_question(item: &AnsweredQuestion) -> Self {
        if !item.is_answered() {
            return Self::default();
        }

        let verdict = if item.correct {
            ButtonStyle::Correct
        } else {
            ButtonStyle::Incorrect
        };
        let chose_true = normalize_answer(item.user_answer()) == TRUE_ANSWER;

        Self {
            enabled: false,
            true_style: if chose_true { verdict } else { ButtonStyle::Neutral },
            false_style: if chose_true { ButtonStyle::Neutral } else { verdict },
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavigationState {
    pub back_enabled: bool,
    pub forward_enabled: bool,
}

/// Output side of the quiz session.
///
/// The controller pushes every visible change through this trait so it can
/// run against a desktop view or a recording fake alike.
pub trait QuizPresenter {
    fn show_question_text(&mut self, text: &str);
    fn show_total_questions(&mut self, total: usize);
    /// 1-based position shown in the "jump to question" field.
    fn set_question_number(&mut self, number: usize);
    fn show_answered_percentage(&mut self, label: &str);
    fn show_progress(&mut self, metric: Metric, bar: &ProgressBar);
    fn set_answer_buttons(&mut self, buttons: AnswerButtons);
    fn set_navigation(&mut self, navigation: NavigationState);
    /// Inline error in place of the question text.
    fn show_error(&mut self, message: &str);
    /// Blocking, user-facing alert.
    fn alert(&mut self, message: &str);
    /// Discard everything on screen and start over.
    fn reload(&mut self);
}
