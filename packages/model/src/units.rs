//! Unit-conversion helpers for form display.

/// Convert a rem value ("1.5rem") to its pixel equivalent at the default
/// 16px root size, for the read-only hint next to size inputs.
///
/// Malformed input parses to NaN and shows up as "NaNpx" in the hint;
/// callers treat that as a visible cue rather than an error.
pub fn rem_to_px(value: &str) -> String {
    let number = value.trim().trim_end_matches(|c: char| c.is_ascii_alphabetic());
    let rem: f64 = number.parse().unwrap_or(f64::NAN);
    format!("{}px", rem * 16.0)
}
