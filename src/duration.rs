//! Textual seconds codec.
//!
//! The external routing service reports travel times as a number of seconds
//! suffixed with `"s"` (`"300s"`), occasionally `"N/A"` or empty. Parsing is
//! total: anything unparsable degrades to zero rather than erroring, since a
//! missing duration never invalidates a route.

/// Parses a `"Ns"` duration string into seconds.
///
/// Empty input, the literal `"N/A"`, and unparsable text all yield `0.0`.
///
/// # Examples
///
/// ```
/// use route_sequencer::duration::parse_seconds;
///
/// assert_eq!(parse_seconds("300s"), 300.0);
/// assert_eq!(parse_seconds("12.5s"), 12.5);
/// assert_eq!(parse_seconds("N/A"), 0.0);
/// assert_eq!(parse_seconds(""), 0.0);
/// assert_eq!(parse_seconds("soon"), 0.0);
/// ```
pub fn parse_seconds(text: &str) -> f64 {
    if text.is_empty() || text == "N/A" {
        return 0.0;
    }
    let number = text.strip_suffix('s').unwrap_or(text);
    number.parse::<f64>().unwrap_or(0.0)
}

/// Formats a number of seconds as `"Ns"`, rounded to the nearest whole
/// second.
///
/// # Examples
///
/// ```
/// use route_sequencer::duration::format_seconds;
///
/// assert_eq!(format_seconds(165.0), "165s");
/// assert_eq!(format_seconds(164.6), "165s");
/// assert_eq!(format_seconds(0.0), "0s");
/// ```
pub fn format_seconds(seconds: f64) -> String {
    format!("{}s", seconds.round() as i64)
}
