mod controller;
mod presenter;
mod state;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use controller::{BootstrapOutcome, QuizController, SubmitOutcome};
pub use presenter::{AnswerButtons, ButtonStyle, Metric, NavigationState, QuizPresenter};
pub use state::{Direction, SessionState};
