#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use quiz_core::{ProgressBar, Question};
use services::{
    AnswerButtons, AnswerRequest, AnswerResponse, ApiError, HealthStatus, Metric,
    NavigationState, QuizApi, QuizPresenter,
};

pub fn question(subject: &str, correct_answer: &str, user_answer: &str) -> Question {
    Question {
        subject: subject.to_string(),
        question: format!("{subject} question"),
        correct_answer: correct_answer.to_string(),
        user_answer: user_answer.to_string(),
    }
}

pub fn unanswered(count: usize) -> Vec<Question> {
    (0..count)
        .map(|i| question(&format!("s{i}"), if i % 2 == 0 { "TRUE" } else { "FALSE" }, ""))
        .collect()
}

/// Scripted backend. Each endpoint pops its next queued result; an empty
/// queue falls back to the configured default.
pub struct FakeApi {
    health: Mutex<VecDeque<Result<HealthStatus, ApiError>>>,
    questions: Mutex<Result<Vec<Question>, ApiError>>,
    answers: Mutex<VecDeque<Result<AnswerResponse, ApiError>>>,
    reset: Mutex<Result<(), ApiError>>,
    pub calls: Mutex<Vec<String>>,
    pub submitted: Mutex<Vec<AnswerRequest>>,
}

impl FakeApi {
    pub fn healthy(questions: Vec<Question>) -> Self {
        Self {
            health: Mutex::new(VecDeque::new()),
            questions: Mutex::new(Ok(questions)),
            answers: Mutex::new(VecDeque::new()),
            reset: Mutex::new(Ok(())),
            calls: Mutex::new(Vec::new()),
            submitted: Mutex::new(Vec::new()),
        }
    }

    pub fn with_health(self, result: Result<HealthStatus, ApiError>) -> Self {
        self.health.lock().unwrap().push_back(result);
        self
    }

    pub fn with_questions(self, result: Result<Vec<Question>, ApiError>) -> Self {
        *self.questions.lock().unwrap() = result;
        self
    }

    pub fn with_answer(self, result: Result<AnswerResponse, ApiError>) -> Self {
        self.answers.lock().unwrap().push_back(result);
        self
    }

    pub fn with_reset(self, result: Result<(), ApiError>) -> Self {
        *self.reset.lock().unwrap() = result;
        self
    }

    pub fn calls_to(&self, endpoint: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|call| call.as_str() == endpoint)
            .count()
    }

    fn record(&self, endpoint: &str) {
        self.calls.lock().unwrap().push(endpoint.to_string());
    }
}

pub fn verdict(correct: bool, correct_answer: &str) -> AnswerResponse {
    AnswerResponse {
        success: true,
        correct,
        correct_answer: correct_answer.to_string(),
    }
}

#[async_trait]
impl QuizApi for FakeApi {
    async fn health(&self) -> Result<HealthStatus, ApiError> {
        self.record("/health");
        self.health.lock().unwrap().pop_front().unwrap_or_else(|| {
            Ok(HealthStatus {
                status: "healthy".into(),
            })
        })
    }

    async fn questions(&self) -> Result<Vec<Question>, ApiError> {
        self.record("/api/questions");
        self.questions.lock().unwrap().clone()
    }

    async fn submit_answer(&self, request: &AnswerRequest) -> Result<AnswerResponse, ApiError> {
        self.record("/api/answer");
        self.submitted.lock().unwrap().push(request.clone());
        self.answers
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(verdict(true, "TRUE")))
    }

    async fn reset_wrong(&self) -> Result<(), ApiError> {
        self.record("/reset-wrong");
        self.reset.lock().unwrap().clone()
    }
}

/// Presenter that keeps the latest value pushed to each surface.
#[derive(Debug, Default)]
pub struct RecordingPresenter {
    pub question_text: Option<String>,
    pub total_questions: Option<usize>,
    pub question_number: Option<usize>,
    pub answered_percentage: Option<String>,
    pub total_accuracy: Option<ProgressBar>,
    pub rolling_accuracy: Option<ProgressBar>,
    pub buttons: Option<AnswerButtons>,
    pub navigation: Option<NavigationState>,
    pub errors: Vec<String>,
    pub alerts: Vec<String>,
    pub reloads: usize,
}

impl QuizPresenter for RecordingPresenter {
    fn show_question_text(&mut self, text: &str) {
        self.question_text = Some(text.to_string());
    }

    fn show_total_questions(&mut self, total: usize) {
        self.total_questions = Some(total);
    }

    fn set_question_number(&mut self, number: usize) {
        self.question_number = Some(number);
    }

    fn show_answered_percentage(&mut self, label: &str) {
        self.answered_percentage = Some(label.to_string());
    }

    fn show_progress(&mut self, metric: Metric, bar: &ProgressBar) {
        match metric {
            Metric::TotalAccuracy => self.total_accuracy = Some(bar.clone()),
            Metric::RollingAccuracy => self.rolling_accuracy = Some(bar.clone()),
        }
    }

    fn set_answer_buttons(&mut self, buttons: AnswerButtons) {
        self.buttons = Some(buttons);
    }

    fn set_navigation(&mut self, navigation: NavigationState) {
        self.navigation = Some(navigation);
    }

    fn show_error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn reload(&mut self) {
        self.reloads += 1;
    }
}
