mod answer;
mod question;

pub use answer::{AnswerInput, FALSE_ANSWER, TRUE_ANSWER, normalize_answer};
pub use question::{AnsweredQuestion, Question};
