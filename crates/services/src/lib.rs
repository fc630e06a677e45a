#![forbid(unsafe_code)]

pub mod api;
pub mod config;
pub mod error;
pub mod retry;
pub mod sessions;

pub use sessions as session;

pub use api::{AnswerRequest, AnswerResponse, HealthStatus, HttpQuizApi, QuizApi};
pub use config::{ClientConfig, DisplaySettings};
pub use error::{ApiError, ConfigError, SessionError};
pub use retry::{RetryPolicy, fetch_with_retry};

pub use sessions::{
    AnswerButtons, BootstrapOutcome, ButtonStyle, Direction, Metric, NavigationState,
    QuizController, QuizPresenter, SessionState, SubmitOutcome,
};
