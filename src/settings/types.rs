//! Field types and their conversion into directive values.

use std::fmt;

use crate::codegen::{Literal, Value};

/// A raw override before it is parsed into a field's type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Input<'a> {
    /// Text, as given by name-based overrides and JSON strings.
    Text(&'a str),
    /// JSON boolean.
    Bool(bool),
    /// JSON integer.
    Int(i64),
    /// JSON `null`.
    Null,
}

/// A type a built-in field can hold.
pub trait FieldValue: Sized {
    /// Human-readable description of accepted inputs, used in errors.
    const EXPECTED: &'static str;

    /// The directive value this field is emitted as.
    fn to_value(&self) -> Value;

    /// Parse an override, or `None` if it does not fit this type.
    fn parse(input: Input<'_>) -> Option<Self>;
}

impl FieldValue for String {
    const EXPECTED: &'static str = "text";

    fn to_value(&self) -> Value {
        Value::from_text(self.as_str())
    }

    fn parse(input: Input<'_>) -> Option<Self> {
        match input {
            Input::Text(s) => Some(s.to_owned()),
            Input::Int(n) => Some(n.to_string()),
            Input::Bool(_) | Input::Null => None,
        }
    }
}

impl FieldValue for bool {
    const EXPECTED: &'static str = "a boolean";

    fn to_value(&self) -> Value {
        Value::from(*self)
    }

    fn parse(input: Input<'_>) -> Option<Self> {
        match input {
            Input::Bool(b) => Some(b),
            Input::Text(s) => match Literal::parse(s)? {
                Literal::True => Some(true),
                Literal::False => Some(false),
                _ => None,
            },
            _ => None,
        }
    }
}

/// `none` or a value.
impl<T: FieldValue> FieldValue for Option<T> {
    const EXPECTED: &'static str = "none or a value";

    fn to_value(&self) -> Value {
        match self {
            Some(v) => sentinel_or(v.to_value(), Literal::None),
            None => Literal::None.into(),
        }
    }

    fn parse(input: Input<'_>) -> Option<Self> {
        match input {
            Input::Null | Input::Text("none") => Some(None),
            other => T::parse(other).map(Some),
        }
    }
}

/// `auto` or a custom value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Smart<T> {
    /// Let the engine decide.
    Auto,
    /// An explicit value.
    Custom(T),
}

impl<T> Smart<T> {
    /// Whether this is `auto`.
    pub fn is_auto(&self) -> bool {
        matches!(self, Self::Auto)
    }

    /// The custom value, if any.
    pub fn custom(self) -> Option<T> {
        match self {
            Self::Auto => None,
            Self::Custom(v) => Some(v),
        }
    }
}

impl<T> Default for Smart<T> {
    fn default() -> Self {
        Self::Auto
    }
}

impl<T> From<T> for Smart<T> {
    fn from(value: T) -> Self {
        Self::Custom(value)
    }
}

/// `"auto"` is the sentinel, anything else is custom text.
impl From<&str> for Smart<String> {
    fn from(value: &str) -> Self {
        match value {
            "auto" => Self::Auto,
            text => Self::Custom(text.to_owned()),
        }
    }
}

/// Custom text spelling the wrapper's own sentinel is emitted as that sentinel.
fn sentinel_or(value: Value, sentinel: Literal) -> Value {
    match &value {
        Value::Str(text) if Literal::parse(text) == Some(sentinel) => sentinel.into(),
        _ => value,
    }
}

impl<T: FieldValue> FieldValue for Smart<T> {
    const EXPECTED: &'static str = "auto or a value";

    fn to_value(&self) -> Value {
        match self {
            Self::Auto => Literal::Auto.into(),
            Self::Custom(v) => sentinel_or(v.to_value(), Literal::Auto),
        }
    }

    fn parse(input: Input<'_>) -> Option<Self> {
        match input {
            Input::Text("auto") => Some(Self::Auto),
            other => T::parse(other).map(Self::Custom),
        }
    }
}

/// Declares a closed set of string tokens emitted as quoted strings.
macro_rules! keyword_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $expected:literal {
            $($(#[$vmeta:meta])* $variant:ident => $token:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            /// The token text.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $token),+
                }
            }

            /// Parse from the token text.
            pub fn from_token(token: &str) -> Option<Self> {
                match token {
                    $($token => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }

        impl FieldValue for $name {
            const EXPECTED: &'static str = $expected;

            fn to_value(&self) -> Value {
                Value::Str(self.as_str().to_owned())
            }

            fn parse(input: Input<'_>) -> Option<Self> {
                match input {
                    Input::Text(s) => Self::from_token(s),
                    _ => None,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

keyword_enum! {
    /// Line breaking algorithm for paragraphs.
    Linebreaks, "\"simple\" or \"optimized\"" {
        /// Greedy breaking.
        Simple => "simple",
        /// Knuth-Plass style breaking.
        Optimized => "optimized",
    }
}

keyword_enum! {
    /// Font style.
    FontStyle, "\"normal\", \"italic\" or \"oblique\"" {
        /// Upright.
        Normal => "normal",
        /// Italic.
        Italic => "italic",
        /// Slanted upright.
        Oblique => "oblique",
    }
}

keyword_enum! {
    /// Named font weights.
    WeightName, "a weight name" {
        /// 100
        Thin => "thin",
        /// 200
        ExtraLight => "extralight",
        /// 300
        Light => "light",
        /// 400
        Regular => "regular",
        /// 500
        Medium => "medium",
        /// 600
        SemiBold => "semibold",
        /// 700
        Bold => "bold",
        /// 800
        ExtraBold => "extrabold",
        /// 900
        Black => "black",
    }
}

keyword_enum! {
    /// Text direction.
    TextDir, "\"ltr\" or \"rtl\"" {
        /// Left to right.
        Ltr => "ltr",
        /// Right to left.
        Rtl => "rtl",
    }
}

impl Default for FontStyle {
    fn default() -> Self {
        Self::Normal
    }
}

/// Font weight, numeric or named.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontWeight {
    /// Numeric weight such as `700`.
    Numeric(u16),
    /// Named weight such as `"bold"`.
    Named(WeightName),
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::Named(WeightName::Regular)
    }
}

impl From<u16> for FontWeight {
    fn from(weight: u16) -> Self {
        Self::Numeric(weight)
    }
}

impl From<WeightName> for FontWeight {
    fn from(name: WeightName) -> Self {
        Self::Named(name)
    }
}

impl FieldValue for FontWeight {
    const EXPECTED: &'static str = "an integer or a weight name";

    fn to_value(&self) -> Value {
        match self {
            Self::Numeric(n) => Value::Int(i64::from(*n)),
            Self::Named(name) => name.to_value(),
        }
    }

    fn parse(input: Input<'_>) -> Option<Self> {
        match input {
            Input::Int(n) => u16::try_from(n).ok().map(Self::Numeric),
            Input::Text(s) => match s.parse::<u16>() {
                Ok(n) => Some(Self::Numeric(n)),
                Err(_) => WeightName::from_token(s).map(Self::Named),
            },
            _ => None,
        }
    }
}

/// Spacing between CJK and Latin characters: `auto` or `none`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CjkLatinSpacing {
    /// Insert spacing.
    #[default]
    Auto,
    /// No spacing.
    None,
}

impl FieldValue for CjkLatinSpacing {
    const EXPECTED: &'static str = "auto or none";

    fn to_value(&self) -> Value {
        match self {
            Self::Auto => Literal::Auto.into(),
            Self::None => Literal::None.into(),
        }
    }

    fn parse(input: Input<'_>) -> Option<Self> {
        match input {
            Input::Text("auto") => Some(Self::Auto),
            Input::Text("none") | Input::Null => Some(Self::None),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::ToTypst;

    fn emit<T: FieldValue>(value: T) -> String {
        value.to_value().to_typst()
    }

    #[test]
    fn test_keywords_are_quoted() {
        assert_eq!(emit(FontStyle::Italic), r#""italic""#);
        assert_eq!(emit(FontWeight::default()), r#""regular""#);
        assert_eq!(emit(Smart::Custom(Linebreaks::Simple)), r#""simple""#);
    }

    #[test]
    fn test_sentinels_are_bare() {
        assert_eq!(emit(Smart::<TextDir>::Auto), "auto");
        assert_eq!(emit(None::<String>), "none");
        assert_eq!(emit(CjkLatinSpacing::None), "none");
        assert_eq!(emit(Smart::Custom(false)), "false");
    }

    #[test]
    fn test_sentinel_text_in_wrappers() {
        assert_eq!(Smart::<String>::from("auto"), Smart::Auto);
        assert_eq!(Smart::<String>::from("5cm"), Smart::Custom("5cm".to_string()));
        assert_eq!(emit(Smart::Custom("auto".to_string())), "auto");
        assert_eq!(emit(Some("none".to_string())), "none");
        // Only the wrapper's own sentinel is unwrapped.
        assert_eq!(emit(Smart::Custom("none".to_string())), r#""none""#);
        assert_eq!(emit(Some("auto".to_string())), r#""auto""#);
        assert_eq!(emit("auto".to_string()), r#""auto""#);
    }

    #[test]
    fn test_numeric_weight() {
        assert_eq!(emit(FontWeight::Numeric(700)), "700");
    }

    #[test]
    fn test_parse_smart() {
        assert_eq!(Smart::<bool>::parse(Input::Text("auto")), Some(Smart::Auto));
        assert_eq!(Smart::<bool>::parse(Input::Bool(true)), Some(Smart::Custom(true)));
        assert_eq!(Smart::<bool>::parse(Input::Text("maybe")), None);
    }

    #[test]
    fn test_parse_option() {
        assert_eq!(Option::<String>::parse(Input::Null), Some(None));
        assert_eq!(Option::<String>::parse(Input::Text("none")), Some(None));
        assert_eq!(
            Option::<String>::parse(Input::Text("US")),
            Some(Some("US".to_string()))
        );
    }

    #[test]
    fn test_parse_weight() {
        assert_eq!(FontWeight::parse(Input::Int(300)), Some(FontWeight::Numeric(300)));
        assert_eq!(FontWeight::parse(Input::Text("600")), Some(FontWeight::Numeric(600)));
        assert_eq!(
            FontWeight::parse(Input::Text("bold")),
            Some(FontWeight::Named(WeightName::Bold))
        );
        assert_eq!(FontWeight::parse(Input::Int(-1)), None);
        assert_eq!(FontWeight::parse(Input::Text("heavy")), None);
    }

    #[test]
    fn test_parse_bool() {
        assert_eq!(bool::parse(Input::Text("true")), Some(true));
        assert_eq!(bool::parse(Input::Text("auto")), None);
        assert_eq!(bool::parse(Input::Int(1)), None);
    }

    #[test]
    fn test_string_never_null() {
        assert_eq!(String::parse(Input::Null), None);
        assert_eq!(String::parse(Input::Int(12)), Some("12".to_string()));
    }
}
