use thiserror::Error;

/// Rejected input for the "jump to question" field.
///
/// Callers correct the field back to the current position instead of
/// surfacing these to the user.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuestionNumberError {
    #[error("not a question number: {raw:?}")]
    NotANumber { raw: String },

    #[error("question {value} is outside 1..={total}")]
    OutOfRange { value: i64, total: usize },
}
