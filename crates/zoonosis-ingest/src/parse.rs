/// Parse an integer cell, accepting the integral float form spreadsheets
/// produce (`"2023.0"`).
pub fn parse_integer(text: &str) -> Option<i64> {
    let trimmed = text.trim();
    if let Ok(value) = trimmed.parse::<i64>() {
        return Some(value);
    }
    let value = trimmed.parse::<f64>().ok()?;
    if value.is_finite() && value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        Some(value as i64)
    } else {
        None
    }
}

/// [`parse_integer`] narrowed to `i32`.
pub fn parse_i32(text: &str) -> Option<i32> {
    parse_integer(text).and_then(|value| i32::try_from(value).ok())
}
