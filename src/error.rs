//! Error types for settings overrides.

use thiserror::Error;

/// Error while applying an override to [`TypstSettings`](crate::TypstSettings).
///
/// Rendering never fails; only name-based and JSON overrides can.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    /// Field name has no `_` delimiter or an empty group part.
    #[error("malformed field name '{0}': expected '<group>_<key>'")]
    MalformedFieldName(String),

    /// No built-in field with this group and key.
    #[error("unknown field: {group}_{key}")]
    UnknownField {
        /// Directive group.
        group: String,
        /// Directive key.
        key: String,
    },

    /// Value does not fit the field's type.
    #[error("invalid value for '{field}': '{value}' (expected {expected})")]
    InvalidValue {
        /// Full field name.
        field: String,
        /// The rejected value as text.
        value: String,
        /// Accepted inputs.
        expected: &'static str,
    },

    /// JSON overrides must be an object.
    #[error("expected JSON object, got {0}")]
    NotObject(&'static str),

    /// JSON value kind cannot be used as an override.
    #[error("unsupported JSON {kind} for field '{field}'")]
    UnsupportedJson {
        /// Full field name.
        field: String,
        /// JSON kind (`array`, `object`, `float`, `number`).
        kind: &'static str,
    },
}
