use std::sync::Arc;

use quiz_core::{AccuracyReport, AnswerInput, ProgressBar, normalize_answer, parse_question_number};

use crate::api::{AnswerRequest, QuizApi};
use crate::config::DisplaySettings;
use crate::error::SessionError;
use super::presenter::{AnswerButtons, Metric, NavigationState, QuizPresenter};
use super::state::{Direction, SessionState};

/// How a bootstrap attempt ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BootstrapOutcome {
    /// Questions are loaded and the first one is on screen.
    Ready { total: usize },
    /// The backend answered but did not report itself healthy.
    Unhealthy { status: String },
    /// The error was shown in place of the question text; nothing is retried.
    Failed(SessionError),
}

/// Result of an accepted answer submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub index: usize,
    pub answer: String,
    pub correct: bool,
    pub correct_answer: String,
}

/// Drives one quiz run: bootstrap, navigation, submission and reset.
///
/// All visible output goes through a `QuizPresenter`; the session state only
/// changes after the backend has confirmed an operation.
pub struct QuizController {
    api: Arc<dyn QuizApi>,
    display: DisplaySettings,
    state: Option<SessionState>,
}

impl QuizController {
    #[must_use]
    pub fn new(api: Arc<dyn QuizApi>, display: DisplaySettings) -> Self {
        Self {
            api,
            display,
            state: None,
        }
    }

    #[must_use]
    pub fn state(&self) -> Option<&SessionState> {
        self.state.as_ref()
    }

    #[must_use]
    pub fn display(&self) -> DisplaySettings {
        self.display
    }

    /// Check backend health, then load questions.
    pub async fn bootstrap<P>(&mut self, presenter: &mut P) -> BootstrapOutcome
    where
        P: QuizPresenter + ?Sized,
    {
        match self.api.health().await {
            Ok(health) if health.is_healthy() => {}
            Ok(health) => {
                tracing::warn!(status = %health.status, "backend is not healthy; staying idle");
                return BootstrapOutcome::Unhealthy {
                    status: health.status,
                };
            }
            Err(err) => {
                tracing::error!(error = %err, "backend health check failed");
                presenter.show_error(&format!(
                    "Error: Unable to connect to the backend. Please check if the server is running. ({err})"
                ));
                return BootstrapOutcome::Failed(err.into());
            }
        }

        match self.load_questions(presenter).await {
            Ok(total) => BootstrapOutcome::Ready { total },
            Err(err) => {
                tracing::error!(error = %err, "loading questions failed");
                presenter.show_error(&format!(
                    "Error loading questions: {err}. Please check the console and ensure the backend is running."
                ));
                BootstrapOutcome::Failed(err)
            }
        }
    }

    /// Fetch questions and start a fresh session on the first unanswered one.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Api` when the fetch fails and
    /// `SessionError::EmptyResult` when no questions come back.
    pub async fn load_questions<P>(&mut self, presenter: &mut P) -> Result<usize, SessionError>
    where
        P: QuizPresenter + ?Sized,
    {
        let questions = self.api.questions().await?;
        let state = SessionState::new(questions)?;
        let total = state.len();
        tracing::info!(total, start = state.current_index(), "questions loaded");

        presenter.show_total_questions(total);
        self.state = Some(state);
        self.render_statistics(presenter);
        self.render_current(presenter);
        Ok(total)
    }

    /// Move one question back or forward; a no-op at the boundaries.
    pub fn navigate<P>(&mut self, direction: Direction, presenter: &mut P)
    where
        P: QuizPresenter + ?Sized,
    {
        let Some(state) = self.state.as_mut() else {
            return;
        };
        if !state.navigate(direction) {
            tracing::debug!(?direction, index = state.current_index(), "navigation at boundary");
        }
        self.render_current(presenter);
    }

    /// Handle a change of the "jump to question" field.
    ///
    /// Invalid input resets the field to the current position and leaves the
    /// session where it was.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidQuestionNumber` for rejected input and
    /// `SessionError::NotLoaded` before questions are loaded.
    pub fn jump_to<P>(&mut self, raw: &str, presenter: &mut P) -> Result<(), SessionError>
    where
        P: QuizPresenter + ?Sized,
    {
        let state = self.state.as_mut().ok_or(SessionError::NotLoaded)?;
        match parse_question_number(raw, state.len()) {
            Ok(index) => {
                state.jump_to(index);
                self.render_current(presenter);
                Ok(())
            }
            Err(err) => {
                tracing::debug!(error = %err, "ignoring question number input");
                presenter.set_question_number(state.current_index() + 1);
                Err(err.into())
            }
        }
    }

    /// Normalize and submit an answer for the current question.
    ///
    /// The server's verdict is recorded as-is. On failure the user is alerted
    /// and nothing local changes.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Api` for transport failures,
    /// `SessionError::Rejected` when the server reports `success: false` and
    /// `SessionError::AlreadyAnswered` if the question was answered before.
    pub async fn submit_answer<P>(
        &mut self,
        answer: impl Into<AnswerInput>,
        presenter: &mut P,
    ) -> Result<SubmitOutcome, SessionError>
    where
        P: QuizPresenter + ?Sized,
    {
        let state = self.state.as_ref().ok_or(SessionError::NotLoaded)?;
        let index = state.current_index();
        if state.current().is_answered() {
            return Err(SessionError::AlreadyAnswered { index });
        }

        let request = AnswerRequest {
            index,
            answer: normalize_answer(answer),
        };
        tracing::debug!(index, answer = %request.answer, "submitting answer");

        let response = match self.api.submit_answer(&request).await {
            Ok(response) => response,
            Err(err) => {
                tracing::error!(index, error = %err, "submitting answer failed");
                presenter.alert(&format!("Error submitting answer: {err}"));
                return Err(err.into());
            }
        };

        if !response.success {
            tracing::warn!(index, "server did not accept the answer");
            return Err(SessionError::Rejected { index });
        }

        tracing::info!(
            index,
            correct = response.correct,
            correct_answer = %response.correct_answer,
            "answer recorded"
        );
        if let Some(state) = self.state.as_mut() {
            state.record_answer(index, &request.answer, response.correct);
        }
        self.render_statistics(presenter);
        self.render_current(presenter);

        Ok(SubmitOutcome {
            index,
            answer: request.answer,
            correct: response.correct,
            correct_answer: response.correct_answer,
        })
    }

    /// Ask the backend to clear wrong answers, then reload.
    ///
    /// The reload happens even if the request fails.
    // TODO: only reload on success once the backend documents /reset-wrong failures.
    pub async fn reset_wrong_answers<P>(&mut self, presenter: &mut P)
    where
        P: QuizPresenter + ?Sized,
    {
        if let Err(err) = self.api.reset_wrong().await {
            tracing::warn!(error = %err, "resetting wrong answers failed; reloading anyway");
        }
        self.state = None;
        presenter.reload();
    }

    /// Current accuracy figures, if a session is loaded.
    #[must_use]
    pub fn report(&self) -> Option<AccuracyReport> {
        self.state
            .as_ref()
            .map(|state| AccuracyReport::compute(state.answered(), self.display.rolling_window))
    }

    fn render_statistics<P>(&self, presenter: &mut P)
    where
        P: QuizPresenter + ?Sized,
    {
        let Some(report) = self.report() else {
            return;
        };
        let precision = self.display.precision;
        presenter.show_answered_percentage(&report.answered_percentage_label());
        presenter.show_progress(
            Metric::TotalAccuracy,
            &ProgressBar::new(report.total_accuracy, precision),
        );
        presenter.show_progress(
            Metric::RollingAccuracy,
            &ProgressBar::new(report.rolling_accuracy, precision),
        );
    }

    fn render_current<P>(&self, presenter: &mut P)
    where
        P: QuizPresenter + ?Sized,
    {
        let Some(state) = self.state.as_ref() else {
            presenter.show_question_text("No questions available.");
            return;
        };
        presenter.show_question_text(&state.current().display_text());
        presenter.set_question_number(state.current_index() + 1);
        presenter.set_answer_buttons(AnswerButtons::for_question(state.current_answered()));
        presenter.set_navigation(NavigationState {
            back_enabled: state.can_go_back(),
            forward_enabled: state.can_go_forward(),
        });
    }
}
