//! Numeric parsing and rounding helpers.

/// Parses a survey value as f64, returning None for blank or non-numeric
/// input. Unparseable values are excluded from aggregates, never read as 0.
pub fn parse_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// Parses an age value as a whole number of years, truncating any
/// fractional part.
pub fn parse_age(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(age) = trimmed.parse::<i64>() {
        return Some(age);
    }
    trimmed.parse::<f64>().ok().map(|age| age.trunc() as i64)
}

/// Rounds to one decimal place, as displayed on KPI cards.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Rounds to a whole number.
pub fn round0(value: f64) -> f64 {
    value.round()
}
