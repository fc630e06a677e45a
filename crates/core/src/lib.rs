#![forbid(unsafe_code)]

pub mod accuracy;
pub mod error;
pub mod model;
pub mod navigation;
pub mod progress;

pub use accuracy::{AccuracyReport, DEFAULT_ROLLING_WINDOW};
pub use error::QuestionNumberError;
pub use model::{AnswerInput, AnsweredQuestion, FALSE_ANSWER, Question, TRUE_ANSWER, normalize_answer};
pub use navigation::parse_question_number;
pub use progress::{DisplayPrecision, ProgressBar, Rgb, color_for_percentage};
