//! Name-based and JSON overrides.
//!
//! Field names follow `<group>_<key>`, split on the first `_` only, so
//! `par_first_line_indent` addresses key `first_line_indent` in group `par`.
//!
//! ```
//! use typst_preamble::TypstSettings;
//! use serde_json::json;
//!
//! let settings = TypstSettings::from_json(&json!({
//!     "text_font": "Arial",
//!     "text_weight": 700,
//!     "par_justify": false,
//!     "text_region": null,
//! }))?;
//! assert_eq!(settings.text_font, "Arial");
//! # Ok::<(), typst_preamble::SettingsError>(())
//! ```

use serde_json::Value as JsonValue;

use super::types::{FieldValue, Input};
use super::TypstSettings;
use crate::error::SettingsError;

/// Split a field name into `(group, key)` at the first `_`.
pub fn split_field_name(name: &str) -> Result<(&str, &str), SettingsError> {
    match name.split_once('_') {
        Some((group, key)) if !group.is_empty() => Ok((group, key)),
        _ => Err(SettingsError::MalformedFieldName(name.to_owned())),
    }
}

/// Parse `input` into the type of field `group_key`.
pub(super) fn parse_input<T: FieldValue>(
    group: &str,
    key: &str,
    input: Input<'_>,
) -> Result<T, SettingsError> {
    T::parse(input).ok_or_else(|| SettingsError::InvalidValue {
        field: format!("{group}_{key}"),
        value: describe(input),
        expected: T::EXPECTED,
    })
}

fn describe(input: Input<'_>) -> String {
    match input {
        Input::Text(s) => s.to_owned(),
        Input::Bool(b) => b.to_string(),
        Input::Int(n) => n.to_string(),
        Input::Null => "null".to_owned(),
    }
}

fn json_kind(json: &JsonValue) -> &'static str {
    match json {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

impl TypstSettings {
    /// Set a built-in field by name from text.
    ///
    /// `text` is parsed into the field's type: `"true"` for booleans, `"auto"`
    /// or `"none"` for fields that accept them, a number or name for the font
    /// weight. On error the settings are unchanged.
    pub fn set(&mut self, name: &str, text: &str) -> Result<(), SettingsError> {
        self.set_input(name, Input::Text(text))
    }

    /// Set a built-in field by name from an [`Input`].
    pub fn set_input(&mut self, name: &str, input: Input<'_>) -> Result<(), SettingsError> {
        let (group, key) = split_field_name(name)?;
        self.assign(group, key, input)
    }

    /// Build settings from a JSON object of field overrides.
    ///
    /// Strings, booleans, integers and `null` are accepted.
    pub fn from_json(json: &JsonValue) -> Result<Self, SettingsError> {
        let mut settings = Self::default();
        settings.merge_json(json)?;
        Ok(settings)
    }

    /// Apply a JSON object of field overrides.
    ///
    /// Either every override applies or none does.
    pub fn merge_json(&mut self, json: &JsonValue) -> Result<(), SettingsError> {
        let JsonValue::Object(map) = json else {
            return Err(SettingsError::NotObject(json_kind(json)));
        };

        let mut staged = self.clone();
        for (name, value) in map {
            let input = match value {
                JsonValue::String(s) => Input::Text(s),
                JsonValue::Bool(b) => Input::Bool(*b),
                JsonValue::Null => Input::Null,
                JsonValue::Number(n) => match n.as_i64() {
                    Some(n) => Input::Int(n),
                    None => {
                        return Err(SettingsError::UnsupportedJson {
                            field: name.clone(),
                            kind: if n.is_f64() { "float" } else { "number" },
                        });
                    }
                },
                other => {
                    return Err(SettingsError::UnsupportedJson {
                        field: name.clone(),
                        kind: json_kind(other),
                    });
                }
            };
            staged.set_input(name, input)?;
        }

        *self = staged;
        Ok(())
    }
}
