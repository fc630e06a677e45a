use crate::error::QuestionNumberError;

/// Parse the 1-based "jump to question" field into a 0-based index.
///
/// Parsing is lenient the way number inputs usually are: leading whitespace
/// and a sign are accepted and anything after the leading digits is ignored
/// (`"3rd"` is question 3).
///
/// # Errors
///
/// Returns `QuestionNumberError::NotANumber` when no leading digits exist and
/// `QuestionNumberError::OutOfRange` when the value is outside `1..=total`.
pub fn parse_question_number(raw: &str, total: usize) -> Result<usize, QuestionNumberError> {
    let value = leading_integer(raw).ok_or_else(|| QuestionNumberError::NotANumber {
        raw: raw.to_owned(),
    })?;

    match usize::try_from(value) {
        Ok(number) if (1..=total).contains(&number) => Ok(number - 1),
        _ => Err(QuestionNumberError::OutOfRange { value, total }),
    }
}

fn leading_integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let magnitude = rest[..digits_len].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}
