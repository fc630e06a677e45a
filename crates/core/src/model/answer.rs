use serde::{Deserialize, Serialize};

/// Canonical form of a "true" answer.
pub const TRUE_ANSWER: &str = "TRUE";
/// Canonical form of a "false" answer.
pub const FALSE_ANSWER: &str = "FALSE";

const TRUE_SPELLINGS: &[&str] = &["true", "prawda"];
const FALSE_SPELLINGS: &[&str] = &["false", "fałsz", "falsz", "fałs", "falš"];

/// A raw answer token as it arrives from a button, a text field or a
/// JSON payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerInput {
    Bool(bool),
    Text(String),
}

impl From<bool> for AnswerInput {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for AnswerInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for AnswerInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Canonicalize a true/false answer.
///
/// Booleans and the known spellings (English and Polish, with or without
/// diacritics) map to `TRUE` / `FALSE`. Anything else is passed through
/// trimmed and uppercased, so unknown tokens still compare consistently.
///
/// Case mapping is not its own inverse (`ſ` uppercases to `S`, `ß` to `SS`),
/// so the pass is repeated until the value is stable.
#[must_use]
pub fn normalize_answer(answer: impl Into<AnswerInput>) -> String {
    let text = match answer.into() {
        AnswerInput::Bool(true) => return TRUE_ANSWER.to_owned(),
        AnswerInput::Bool(false) => return FALSE_ANSWER.to_owned(),
        AnswerInput::Text(text) => text,
    };

    let mut current = canonical_text(&text);
    for _ in 0..MAX_CASE_PASSES {
        let next = canonical_text(&current);
        if next == current {
            break;
        }
        current = next;
    }
    current
}

/// Upper bound on re-normalization; case mappings settle after one or two.
const MAX_CASE_PASSES: usize = 4;

fn canonical_text(text: &str) -> String {
    let lowered = text.to_lowercase();
    let lowered = lowered.trim();
    if TRUE_SPELLINGS.contains(&lowered) {
        return TRUE_ANSWER.to_owned();
    }
    if FALSE_SPELLINGS.contains(&lowered) {
        return FALSE_ANSWER.to_owned();
    }
    lowered.to_uppercase()
}
