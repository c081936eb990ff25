//! Typed directive values.
//!
//! Every value written into a `#set` rule is one of four shapes:
//!
//! - [`Value::Str`] - ordinary text, emitted as a quoted Typst string
//! - [`Value::Literal`] - a sentinel token (`auto`, `none`, `true`, `false`), emitted bare
//! - [`Value::Int`] - an integer, emitted in decimal
//! - [`Value::Raw`] - text already in final syntactic form (`12pt`, `100%`, `(paint: blue)`)
//!
//! Free-form text is sorted into `Str` or `Raw` by [`Value::from_text`].

use std::fmt;

use typst::foundations::{Repr, Value as TypstValue};

use super::source::ToTypst;

/// A sentinel token emitted unquoted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Literal {
    /// `auto`
    Auto,
    /// `none`
    None,
    /// `true`
    True,
    /// `false`
    False,
}

impl Literal {
    /// Parse a token from its canonical text.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "auto" => Some(Self::Auto),
            "none" => Some(Self::None),
            "true" => Some(Self::True),
            "false" => Some(Self::False),
            _ => None,
        }
    }

    /// The equivalent Typst value.
    pub fn to_value(self) -> TypstValue {
        match self {
            Self::Auto => TypstValue::Auto,
            Self::None => TypstValue::None,
            Self::True => TypstValue::Bool(true),
            Self::False => TypstValue::Bool(false),
        }
    }
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        if value { Self::True } else { Self::False }
    }
}

impl ToTypst for Literal {
    fn to_typst(&self) -> String {
        self.to_value().repr().to_string()
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_typst())
    }
}

/// A value bound to a directive key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    /// Plain text, quoted on output.
    Str(String),
    /// Sentinel token, emitted bare.
    Literal(Literal),
    /// Integer, emitted in decimal.
    Int(i64),
    /// Measurement-like or pre-formatted text, emitted verbatim.
    Raw(String),
}

impl Value {
    /// Classify free-form text.
    ///
    /// Text is kept verbatim when it starts with an ASCII digit, starts with
    /// `"` or `(`, or contains `+`. Anything else is a plain string. The
    /// leading-digit test is deliberately loose: `3 apples` is verbatim too.
    ///
    /// Literal tokens are never recognized here; `"auto"` stays a string.
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        if is_verbatim(&text) {
            Self::Raw(text)
        } else {
            Self::Str(text)
        }
    }

    /// Whether the value is written without surrounding quotes.
    pub fn is_bare(&self) -> bool {
        !matches!(self, Self::Str(_))
    }
}

/// Returns `true` when `text` is already valid Typst code.
pub fn is_verbatim(text: &str) -> bool {
    starts_with_digit(text) || text.starts_with(['"', '(']) || text.contains('+')
}

/// Returns `true` when `text` opens with one or more ASCII digits.
pub fn starts_with_digit(text: &str) -> bool {
    text.as_bytes().first().is_some_and(u8::is_ascii_digit)
}

impl ToTypst for Value {
    fn to_typst(&self) -> String {
        match self {
            Self::Str(s) => s.to_typst(),
            Self::Literal(lit) => lit.to_typst(),
            Self::Int(n) => n.to_string(),
            Self::Raw(code) => code.clone(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_typst())
    }
}

impl From<Literal> for Value {
    fn from(lit: Literal) -> Self {
        Self::Literal(lit)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Literal(value.into())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::from_text(text)
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::from_text(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_tokens() {
        assert_eq!(Literal::Auto.to_typst(), "auto");
        assert_eq!(Literal::None.to_typst(), "none");
        assert_eq!(Literal::True.to_typst(), "true");
        assert_eq!(Literal::False.to_typst(), "false");
    }

    #[test]
    fn test_literal_parse() {
        assert_eq!(Literal::parse("auto"), Some(Literal::Auto));
        assert_eq!(Literal::parse("false"), Some(Literal::False));
        assert_eq!(Literal::parse("Auto"), None);
    }

    #[test]
    fn test_bool_goes_through_literal() {
        assert_eq!(Value::from(true), Value::Literal(Literal::True));
        assert_eq!(Value::from(false).to_typst(), "false");
    }

    #[test]
    fn test_measurements_verbatim() {
        for text in ["10cm", "0.65em", "100%", "0pt", "700"] {
            assert_eq!(Value::from_text(text), Value::Raw(text.into()), "{text}");
        }
    }

    #[test]
    fn test_leading_digit_is_loose() {
        assert_eq!(Value::from_text("3 apples").to_typst(), "3 apples");
    }

    #[test]
    fn test_preformatted_verbatim() {
        assert_eq!(Value::from_text("(paint: blue)").to_typst(), "(paint: blue)");
        assert_eq!(Value::from_text("\"quoted\"").to_typst(), "\"quoted\"");
        assert_eq!(Value::from_text("1em + 2pt").to_typst(), "1em + 2pt");
        assert_eq!(Value::from_text("red+blue").to_typst(), "red+blue");
    }

    #[test]
    fn test_plain_strings_quoted() {
        assert_eq!(Value::from_text("Arial").to_typst(), r#""Arial""#);
        assert_eq!(Value::from_text("auto").to_typst(), r#""auto""#);
        assert_eq!(Value::from_text("-1pt").to_typst(), r#""-1pt""#);
        assert_eq!(Value::from_text(".5em").to_typst(), r#"".5em""#);
        assert_eq!(Value::from_text("").to_typst(), r#""""#);
    }

    #[test]
    fn test_int() {
        assert_eq!(Value::Int(700).to_typst(), "700");
        assert_eq!(Value::Int(-3).to_typst(), "-3");
    }

    #[test]
    fn test_is_bare() {
        assert!(!Value::from_text("Arial").is_bare());
        assert!(Value::from_text("12pt").is_bare());
        assert!(Value::Literal(Literal::None).is_bare());
    }
}
