use crate::error::ValidationError;

/// Parse the bulk-select input box.
///
/// Reads the leading integer the way a browser `parseInt(text, 10)` does:
/// leading whitespace and an optional sign, then the run of ASCII digits.
/// Anything after the digits is ignored, so `"12abc"` is 12 and `"1.5"` is 1.
/// No leading digits, a value of zero or below, or a value too large for
/// `usize` is rejected.
pub fn parse_bulk_count(count_text: &str) -> Result<usize, ValidationError> {
    let invalid = || ValidationError::InvalidBulkCount {
        input: count_text.to_string(),
    };

    let trimmed = count_text.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_len = unsigned
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits_len == 0 {
        return Err(invalid());
    }

    let count: usize = unsigned[..digits_len].parse().map_err(|_| invalid())?;
    if negative || count == 0 {
        return Err(invalid());
    }
    Ok(count)
}
