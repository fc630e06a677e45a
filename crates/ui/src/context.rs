use std::sync::Arc;

use services::{DisplaySettings, QuizApi, QuizController};

pub trait UiApp: Send + Sync {
    fn quiz_api(&self) -> Arc<dyn QuizApi>;
    fn display_settings(&self) -> DisplaySettings;
}

#[derive(Clone)]
pub struct AppContext {
    quiz_api: Arc<dyn QuizApi>,
    display: DisplaySettings,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            quiz_api: app.quiz_api(),
            display: app.display_settings(),
        }
    }

    #[must_use]
    pub fn display_settings(&self) -> DisplaySettings {
        self.display
    }

    /// A controller with no session loaded yet.
    #[must_use]
    pub fn new_controller(&self) -> QuizController {
        QuizController::new(Arc::clone(&self.quiz_api), self.display)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
