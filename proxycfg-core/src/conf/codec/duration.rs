use crate::conf::error::ParseError;

const MAX_FRACTION_DIGITS: usize = 9;

/// Check a protobuf JSON duration such as `"10s"`, `"1.5s"` or `"-0.25s"`.
///
/// Empty text means the duration is unset and is accepted.
pub fn check(text: &str) -> Result<(), ParseError> {
    if text.is_empty() || is_duration(text) {
        Ok(())
    } else {
        Err(ParseError::InvalidDuration {
            text: text.to_owned(),
        })
    }
}

fn is_duration(text: &str) -> bool {
    let Some(body) = text.strip_suffix('s') else {
        return false;
    };
    let body = body.strip_prefix('-').unwrap_or(body);

    let (seconds, fraction) = match body.split_once('.') {
        Some((s, f)) => (s, Some(f)),
        None => (body, None),
    };

    let digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());

    digits(seconds)
        && fraction.is_none_or(|f| digits(f) && f.len() <= MAX_FRACTION_DIGITS)
}
