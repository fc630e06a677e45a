use quiz_core::ProgressBar;
use services::{
    AnswerButtons, BootstrapOutcome, ButtonStyle, Direction, Metric, NavigationState,
    QuizController, QuizPresenter, SessionError,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Answer(bool),
    Navigate(Direction),
    JumpTo(String),
    ResetWrong,
    DismissAlert,
}

/// Everything the quiz page shows, as plain data.
#[derive(Clone, Debug, PartialEq)]
pub struct QuizScreen {
    pub question_text: String,
    pub is_error: bool,
    pub total_questions: Option<usize>,
    pub question_number: String,
    pub answered_percentage: String,
    pub total_accuracy: Option<ProgressBar>,
    pub rolling_accuracy: Option<ProgressBar>,
    pub buttons: AnswerButtons,
    pub navigation: NavigationState,
    pub alert: Option<String>,
    reload_requested: bool,
}

impl Default for QuizScreen {
    fn default() -> Self {
        Self {
            question_text: "Loading questions...".into(),
            is_error: false,
            total_questions: None,
            question_number: String::new(),
            answered_percentage: "0.00".into(),
            total_accuracy: None,
            rolling_accuracy: None,
            buttons: AnswerButtons {
                enabled: false,
                ..AnswerButtons::default()
            },
            navigation: NavigationState::default(),
            alert: None,
            reload_requested: false,
        }
    }
}

impl QuizScreen {
    #[must_use]
    pub fn total_label(&self) -> String {
        self.total_questions
            .map_or_else(|| "-".to_string(), |total| total.to_string())
    }

    #[must_use]
    pub fn button_class(style: ButtonStyle) -> &'static str {
        match style {
            ButtonStyle::Neutral => "button answer-button",
            ButtonStyle::Correct => "button answer-button correct",
            ButtonStyle::Incorrect => "button answer-button incorrect",
        }
    }

    fn take_reload(&mut self) -> bool {
        std::mem::take(&mut self.reload_requested)
    }
}

impl QuizPresenter for QuizScreen {
    fn show_question_text(&mut self, text: &str) {
        self.question_text = text.to_string();
        self.is_error = false;
    }

    fn show_total_questions(&mut self, total: usize) {
        self.total_questions = Some(total);
    }

    fn set_question_number(&mut self, number: usize) {
        self.question_number = number.to_string();
    }

    fn show_answered_percentage(&mut self, label: &str) {
        self.answered_percentage = label.to_string();
    }

    fn show_progress(&mut self, metric: Metric, bar: &ProgressBar) {
        let slot = match metric {
            Metric::TotalAccuracy => &mut self.total_accuracy,
            Metric::RollingAccuracy => &mut self.rolling_accuracy,
        };
        *slot = Some(bar.clone());
    }

    fn set_answer_buttons(&mut self, buttons: AnswerButtons) {
        self.buttons = buttons;
    }

    fn set_navigation(&mut self, navigation: NavigationState) {
        self.navigation = navigation;
    }

    fn show_error(&mut self, message: &str) {
        self.question_text = message.to_string();
        self.is_error = true;
    }

    fn alert(&mut self, message: &str) {
        self.alert = Some(message.to_string());
    }

    fn reload(&mut self) {
        self.reload_requested = true;
    }
}

/// Pairs the session controller with the screen it draws on.
pub struct QuizVm {
    controller: QuizController,
    screen: QuizScreen,
}

impl QuizVm {
    #[must_use]
    pub fn new(controller: QuizController) -> Self {
        Self {
            controller,
            screen: QuizScreen::default(),
        }
    }

    #[must_use]
    pub fn screen(&self) -> &QuizScreen {
        &self.screen
    }

    #[must_use]
    pub fn controller(&self) -> &QuizController {
        &self.controller
    }

    pub async fn bootstrap(&mut self) -> BootstrapOutcome {
        self.controller.bootstrap(&mut self.screen).await
    }

    /// Apply one user intent. Errors are already on screen (or deliberately
    /// silent for corrected input), so nothing is returned but the followup.
    ///
    /// When the controller asks for a reload the screen is already back in
    /// its pre-load state; the caller publishes it and then runs
    /// [`QuizVm::bootstrap`].
    pub async fn apply(&mut self, intent: QuizIntent) -> Followup {
        match intent {
            QuizIntent::Answer(value) => {
                let result = self.controller.submit_answer(value, &mut self.screen).await;
                if let Err(err) = result {
                    log_submit_error(&err);
                }
            }
            QuizIntent::Navigate(direction) => self.controller.navigate(direction, &mut self.screen),
            QuizIntent::JumpTo(raw) => {
                let _ = self.controller.jump_to(&raw, &mut self.screen);
            }
            QuizIntent::ResetWrong => {
                self.controller.reset_wrong_answers(&mut self.screen).await;
            }
            QuizIntent::DismissAlert => self.screen.alert = None,
        }

        if self.screen.take_reload() {
            self.screen = QuizScreen::default();
            return Followup::Bootstrap;
        }
        Followup::None
    }
}

/// What the view still has to do after an intent was applied.
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Followup {
    None,
    Bootstrap,
}

fn log_submit_error(err: &SessionError) {
    match err {
        // Shown to the user as an alert by the controller.
        SessionError::Api(_) => {}
        other => tracing::debug!(error = %other, "answer not recorded"),
    }
}
