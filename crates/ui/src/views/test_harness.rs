use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use quiz_core::Question;
use services::{
    AnswerRequest, AnswerResponse, ApiError, DisplaySettings, HealthStatus, QuizApi,
};

use crate::context::{UiApp, build_app_context};
use crate::views::QuizView;

/// In-memory backend for view and view-model tests.
pub struct StubApi {
    pub healthy: Result<HealthStatus, ApiError>,
    pub questions: Mutex<Vec<Question>>,
    pub submitted: Mutex<Vec<AnswerRequest>>,
    pub submit_error: Option<ApiError>,
    pub reset_error: Option<ApiError>,
    pub question_loads: AtomicUsize,
    pub resets: AtomicUsize,
}

impl StubApi {
    pub fn with_questions(questions: Vec<Question>) -> Self {
        Self {
            healthy: Ok(HealthStatus {
                status: "healthy".into(),
            }),
            questions: Mutex::new(questions),
            submitted: Mutex::new(Vec::new()),
            submit_error: None,
            reset_error: None,
            question_loads: AtomicUsize::new(0),
            resets: AtomicUsize::new(0),
        }
    }

    pub fn unreachable() -> Self {
        Self {
            healthy: Err(ApiError::Network("connection refused".into())),
            ..Self::with_questions(Vec::new())
        }
    }

    pub fn failing_submit(mut self, err: ApiError) -> Self {
        self.submit_error = Some(err);
        self
    }

    pub fn failing_reset(mut self, err: ApiError) -> Self {
        self.reset_error = Some(err);
        self
    }

    /// Replace what the next `/api/questions` call returns.
    pub fn serve_questions(&self, questions: Vec<Question>) {
        *self.questions.lock().unwrap() = questions;
    }

    pub fn submitted(&self) -> Vec<AnswerRequest> {
        self.submitted.lock().unwrap().clone()
    }
}

#[async_trait]
impl QuizApi for StubApi {
    async fn health(&self) -> Result<HealthStatus, ApiError> {
        self.healthy.clone()
    }

    async fn questions(&self) -> Result<Vec<Question>, ApiError> {
        self.question_loads.fetch_add(1, Ordering::SeqCst);
        Ok(self.questions.lock().unwrap().clone())
    }

    async fn submit_answer(&self, request: &AnswerRequest) -> Result<AnswerResponse, ApiError> {
        if let Some(err) = &self.submit_error {
            return Err(err.clone());
        }
        self.submitted.lock().unwrap().push(request.clone());
        Ok(AnswerResponse {
            success: true,
            correct: request.answer == "TRUE",
            correct_answer: "TRUE".into(),
        })
    }

    async fn reset_wrong(&self) -> Result<(), ApiError> {
        self.resets.fetch_add(1, Ordering::SeqCst);
        match &self.reset_error {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

pub fn question(subject: &str, text: &str, user_answer: &str) -> Question {
    Question {
        subject: subject.to_string(),
        question: text.to_string(),
        correct_answer: "TRUE".to_string(),
        user_answer: user_answer.to_string(),
    }
}

struct TestApp {
    api: Arc<StubApi>,
}

impl UiApp for TestApp {
    fn quiz_api(&self) -> Arc<dyn QuizApi> {
        self.api.clone()
    }

    fn display_settings(&self) -> DisplaySettings {
        DisplaySettings::default()
    }
}

#[derive(Props, Clone)]
struct HarnessProps {
    app: Arc<TestApp>,
}

impl PartialEq for HarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn QuizHarness(props: HarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    rsx! { QuizView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn new(api: Arc<StubApi>) -> Self {
        let dom = VirtualDom::new_with_props(
            QuizHarness,
            HarnessProps {
                app: Arc::new(TestApp { api }),
            },
        );
        Self { dom }
    }

    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        for _ in 0..5 {
            let _ = tokio::time::timeout(
                std::time::Duration::from_millis(50),
                self.dom.wait_for_work(),
            )
            .await;
            self.dom.render_immediate(&mut NoOpMutations);
            self.dom.process_events();
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}
