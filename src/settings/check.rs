//! Non-fatal diagnostics for settings.

use std::fmt;

use tracing::warn;

use super::TypstSettings;
use crate::codegen::{parse_measurement, starts_with_digit, Value};

/// A field value that will be emitted verbatim but is not a valid measurement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsWarning {
    /// Full field name.
    pub field: String,
    /// The offending text.
    pub value: String,
}

impl fmt::Display for SettingsWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}' is emitted verbatim but '{}' is not a valid measurement",
            self.field, self.value
        )
    }
}

impl TypstSettings {
    /// Report built-in values that start with a digit but do not parse as a
    /// length, ratio, angle or number.
    ///
    /// Such values are still emitted unquoted; the engine will likely reject
    /// them. Extra directives are not inspected.
    pub fn check(&self) -> Vec<SettingsWarning> {
        let warnings: Vec<_> = self
            .fields()
            .into_iter()
            .filter_map(|field| match &field.value {
                Value::Raw(text)
                    if starts_with_digit(text)
                        && !text.contains(['+', '('])
                        && parse_measurement(text).is_none() =>
                {
                    Some(SettingsWarning {
                        field: field.name(),
                        value: text.clone(),
                    })
                }
                _ => None,
            })
            .collect();

        for warning in &warnings {
            warn!(field = %warning.field, value = %warning.value, "suspicious measurement");
        }
        warnings
    }
}
