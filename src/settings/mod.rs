//! Typed document settings.
//!
//! [`TypstSettings`] holds one field per built-in `#set` argument plus a table
//! of [extra directives](ExtraDirectives). [`TypstSettings::preamble`] renders
//! both into the preamble prepended to a document body.
//!
//! # Example
//!
//! ```
//! use typst_preamble::TypstSettings;
//!
//! let mut settings = TypstSettings::builder()
//!     .text_font("Arial")
//!     .text_size("12pt")
//!     .build();
//! settings.add_extra_directive("text", "stroke", "(paint: blue)");
//!
//! let preamble = settings.preamble();
//! assert!(preamble.contains(r#"font: "Arial""#));
//! assert!(preamble.ends_with("stroke: (paint: blue))\n\n"));
//! ```

mod check;
mod extra;
mod overrides;
mod preamble;
mod types;

pub use check::SettingsWarning;
pub use extra::{ExtraDirectives, ExtraValue, OrderedMap};
pub use overrides::split_field_name;
pub use preamble::Directive;
pub use types::{
    CjkLatinSpacing, FieldValue, FontStyle, FontWeight, Input, Linebreaks, Smart, TextDir,
    WeightName,
};

use tracing::trace;

use crate::codegen::Value;
use crate::error::SettingsError;

/// A built-in field as seen by the serializer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Directive group, e.g. `text`.
    pub group: &'static str,
    /// Directive key, e.g. `font`.
    pub key: &'static str,
    /// Current value.
    pub value: Value,
}

impl Field {
    /// The `<group>_<key>` field name.
    pub fn name(&self) -> String {
        format!("{}_{}", self.group, self.key)
    }
}

/// Declares the built-in fields.
///
/// Generates the struct, its `Default`, the ordered field list, name-based
/// assignment and the builder setters from one table.
macro_rules! settings {
    ($(
        $(#[$doc:meta])*
        $field:ident: $ty:ty = $default:expr => $group:literal . $key:literal;
    )*) => {
        /// Typst document settings.
        ///
        /// Every field is emitted as `<key>: <value>` inside `#set <group>(...)`.
        /// Construct with [`Default`], struct update syntax or
        /// [`TypstSettings::builder`].
        #[derive(Debug, Clone)]
        pub struct TypstSettings {
            $(
                $(#[$doc])*
                #[doc = concat!("\n\nEmitted as `#set ", $group, "(", $key, ": ...)`.")]
                pub $field: $ty,
            )*
            extra: ExtraDirectives,
        }

        impl Default for TypstSettings {
            fn default() -> Self {
                Self {
                    $($field: $default,)*
                    extra: ExtraDirectives::new(),
                }
            }
        }

        impl TypstSettings {
            /// Names of all built-in fields in declaration order.
            pub const FIELD_NAMES: &'static [&'static str] = &[$(concat!($group, "_", $key)),*];

            /// Built-in fields in declaration order.
            pub fn fields(&self) -> Vec<Field> {
                vec![$(
                    Field {
                        group: $group,
                        key: $key,
                        value: FieldValue::to_value(&self.$field),
                    }
                ),*]
            }

            /// Assign a built-in field from an untyped input.
            fn assign(&mut self, group: &str, key: &str, input: Input<'_>) -> Result<(), SettingsError> {
                match (group, key) {
                    $(($group, $key) => {
                        self.$field = overrides::parse_input(group, key, input)?;
                        Ok(())
                    })*
                    _ => Err(SettingsError::UnknownField {
                        group: group.to_owned(),
                        key: key.to_owned(),
                    }),
                }
            }
        }

        /// Fluent construction of [`TypstSettings`].
        ///
        /// Unset fields keep their defaults.
        #[derive(Debug, Clone, Default)]
        pub struct SettingsBuilder {
            settings: TypstSettings,
        }

        impl SettingsBuilder {
            $(
                #[doc = concat!("Set `", $group, "_", $key, "`.")]
                pub fn $field(mut self, value: impl Into<$ty>) -> Self {
                    self.settings.$field = value.into();
                    self
                }
            )*
        }
    };
}

settings! {
    /// Page width.
    page_width: String = "10cm".into() => "page"."width";
    /// Page height; `auto` grows with the content.
    page_height: Smart<String> = Smart::Auto => "page"."height";

    /// Spacing between lines.
    par_leading: String = "0.65em".into() => "par"."leading";
    /// Justify lines.
    par_justify: bool = true => "par"."justify";
    /// Line breaking algorithm.
    par_linebreaks: Smart<Linebreaks> = Smart::Auto => "par"."linebreaks";
    /// Indent of the first line.
    par_first_line_indent: String = "0pt".into() => "par"."first_line_indent";
    /// Indent of all but the first line.
    par_hanging_indent: String = "0pt".into() => "par"."hanging_indent";

    /// Font family.
    text_font: String = "linux libertine".into() => "text"."font";
    text_style: FontStyle = FontStyle::Normal => "text"."style";
    text_weight: FontWeight = FontWeight::Named(WeightName::Regular) => "text"."weight";
    text_stretch: String = "100%".into() => "text"."stretch";
    /// Font size.
    text_size: String = "11pt".into() => "text"."size";
    text_tracking: String = "0pt".into() => "text"."tracking";
    /// Word spacing.
    text_spacing: String = "100%".into() => "text"."spacing";
    text_cjk_latin_spacing: CjkLatinSpacing = CjkLatinSpacing::Auto => "text"."cjk_latin_spacing";
    /// Baseline shift.
    text_baseline: String = "0pt".into() => "text"."baseline";
    /// Let punctuation hang into the margin.
    text_overhang: bool = true => "text"."overhang";
    /// ISO 639-1 language code.
    text_lang: String = "en".into() => "text"."lang";
    /// ISO 3166-1 region code.
    text_region: Option<String> = None => "text"."region";
    /// ISO 15924 script code.
    text_script: Smart<String> = Smart::Auto => "text"."script";
    text_dir: Smart<TextDir> = Smart::Auto => "text"."dir";
    text_hyphenate: Smart<bool> = Smart::Auto => "text"."hyphenate";
    text_kerning: bool = true => "text"."kerning";
    text_alternates: bool = false => "text"."alternates";
    text_ligatures: bool = true => "text"."ligatures";
}

impl TypstSettings {
    /// Start building settings from the defaults.
    pub fn builder() -> SettingsBuilder {
        SettingsBuilder::default()
    }

    /// Add or overwrite an extra directive.
    ///
    /// `value` is emitted exactly as given; literal tokens become their
    /// canonical text. When `group.key` is also a built-in field, the extra
    /// value replaces the built-in one in place.
    pub fn add_extra_directive(&mut self, group: &str, key: &str, value: impl Into<ExtraValue>) {
        let value = value.into();
        trace!(group, key, ?value, "extra directive");
        self.extra.insert(group, key, value);
    }

    /// Extra directives added so far.
    pub fn extra_directives(&self) -> &ExtraDirectives {
        &self.extra
    }
}

impl SettingsBuilder {
    /// Add an extra directive.
    pub fn extra(mut self, group: &str, key: &str, value: impl Into<ExtraValue>) -> Self {
        self.settings.add_extra_directive(group, key, value);
        self
    }

    /// Finish building.
    pub fn build(self) -> TypstSettings {
        self.settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::Literal;

    #[test]
    fn test_field_order() {
        let settings = TypstSettings::default();
        let names: Vec<_> = settings.fields().iter().map(Field::name).collect();
        assert_eq!(names, TypstSettings::FIELD_NAMES);
        assert_eq!(names.first().map(String::as_str), Some("page_width"));
        assert_eq!(names.last().map(String::as_str), Some("text_ligatures"));
    }

    #[test]
    fn test_key_keeps_delimiters() {
        let settings = TypstSettings::default();
        let field = settings
            .fields()
            .into_iter()
            .find(|f| f.key == "first_line_indent")
            .unwrap();
        assert_eq!(field.group, "par");
    }

    #[test]
    fn test_builder() {
        let settings = TypstSettings::builder()
            .text_font("Arial")
            .page_height("5cm")
            .text_weight(700u16)
            .text_region(Some("US".to_string()))
            .par_justify(false)
            .build();
        assert_eq!(settings.text_font, "Arial");
        assert_eq!(settings.page_height, Smart::Custom("5cm".to_string()));
        assert_eq!(settings.text_weight, FontWeight::Numeric(700));
        assert_eq!(settings.text_region.as_deref(), Some("US"));
        assert!(!settings.par_justify);
    }

    #[test]
    fn test_builder_extra() {
        let settings = TypstSettings::builder()
            .extra("text", "fill", "red")
            .extra("page", "numbering", Literal::None)
            .build();
        let extra = settings.extra_directives();
        assert_eq!(extra.get("text", "fill"), Some(&ExtraValue::Text("red".into())));
        assert_eq!(
            extra.get("page", "numbering"),
            Some(&ExtraValue::Literal(Literal::None))
        );
    }

    #[test]
    fn test_boolean_fields_emit_literals() {
        let settings = TypstSettings::builder()
            .par_justify(false)
            .text_kerning(true)
            .text_overhang(false)
            .text_alternates(true)
            .text_ligatures(false)
            .build();
        let expected = [
            ("justify", false),
            ("overhang", false),
            ("kerning", true),
            ("alternates", true),
            ("ligatures", false),
        ];
        let fields = settings.fields();
        for (key, value) in expected {
            let field = fields.iter().find(|f| f.key == key).unwrap();
            assert_eq!(field.value, Value::Literal(Literal::from(value)), "{key}");
        }
    }

    #[test]
    fn test_builder_matches_named_overrides() {
        let built = TypstSettings::builder()
            .page_height("auto")
            .text_script("auto")
            .text_region(Some("none".to_string()))
            .build();

        let mut named = TypstSettings::default();
        named.set("page_height", "auto").unwrap();
        named.set("text_script", "auto").unwrap();
        named.set("text_region", "none").unwrap();

        assert_eq!(built.preamble(), named.preamble());
        assert_eq!(built.preamble(), TypstSettings::default().preamble());
        assert!(built.preamble().contains("height: auto)"));
    }

    #[test]
    fn test_struct_update_sentinel_text() {
        let settings = TypstSettings {
            page_height: Smart::Custom("auto".into()),
            text_region: Some("none".into()),
            ..Default::default()
        };
        assert_eq!(settings.preamble(), TypstSettings::default().preamble());
    }
}
