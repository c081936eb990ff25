//! Strict parsing of measurement text.
//!
//! [`Value::from_text`](super::Value::from_text) only looks at the first
//! character, so `12pt` and `12 apples` both pass through verbatim. The
//! parsers here recover the real Typst value and are used to report text that
//! looks like a measurement but would not compile. They never change what gets
//! emitted.

use typst::foundations::Value as TypstValue;
use typst::layout::{Abs, Angle, Em, Length, Ratio};

/// Absolute units and their size in points.
const ABS_UNITS: [(&str, f64); 4] = [
    ("pt", 1.0),
    ("mm", 2.834_645_669_291_339),
    ("cm", 28.346_456_692_913_39),
    ("in", 72.0),
];

/// Parse a measurement into the Typst value it denotes.
///
/// Accepts lengths (`12pt`, `0.65em`, `2cm`), ratios (`100%`), angles
/// (`90deg`) and bare numbers (`700`, `1.5`).
pub fn parse_measurement(s: &str) -> Option<TypstValue> {
    let s = s.trim();

    if let Ok(n) = s.parse::<i64>() {
        return Some(TypstValue::Int(n));
    }
    if let Ok(x) = s.parse::<f64>() {
        return Some(TypstValue::Float(x));
    }
    if let Some(length) = parse_length(s) {
        return Some(TypstValue::Length(length));
    }
    if let Some(ratio) = parse_ratio(s) {
        return Some(TypstValue::Ratio(ratio));
    }
    parse_angle(s).map(TypstValue::Angle)
}

/// Parse a length: `pt`, `mm`, `cm`, `in` or `em`.
pub fn parse_length(s: &str) -> Option<Length> {
    let s = s.trim();

    for (suffix, factor) in ABS_UNITS {
        if let Some(n) = number_before(s, suffix) {
            return Some(Abs::pt(n * factor).into());
        }
    }

    number_before(s, "em").map(|n| Em::new(n).into())
}

/// Parse a ratio: `50%`.
pub fn parse_ratio(s: &str) -> Option<Ratio> {
    number_before(s.trim(), "%").map(|n| Ratio::new(n / 100.0))
}

/// Parse an angle: `deg`, `rad` or `turn`.
pub fn parse_angle(s: &str) -> Option<Angle> {
    let s = s.trim();

    if let Some(n) = number_before(s, "deg") {
        return Some(Angle::deg(n));
    }
    if let Some(n) = number_before(s, "rad") {
        return Some(Angle::rad(n));
    }
    number_before(s, "turn").map(|n| Angle::deg(n * 360.0))
}

/// The number in front of `suffix`, with no whitespace in between.
fn number_before(s: &str, suffix: &str) -> Option<f64> {
    let num = s.strip_suffix(suffix)?;
    if num.is_empty() || num.ends_with(char::is_whitespace) {
        return None;
    }
    num.parse::<f64>().ok()
}
