//! `#set` rule builder.

use super::source::ToTypst;

/// Builder for a single `#set <group>(...)` rule.
///
/// # Example
///
/// ```
/// use typst_preamble::codegen::{DirectiveBuilder, Value};
///
/// let rule = DirectiveBuilder::new("text")
///     .arg("font", &Value::from_text("Arial"))
///     .arg_raw("size", "12pt")
///     .build();
/// assert_eq!(rule, r#"#set text(font: "Arial", size: 12pt)"#);
/// ```
#[derive(Debug, Clone)]
pub struct DirectiveBuilder {
    group: String,
    args: Vec<String>,
}

impl DirectiveBuilder {
    /// Start a rule for `group`.
    pub fn new(group: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            args: Vec::new(),
        }
    }

    /// Add an argument rendered via [`ToTypst`].
    pub fn arg<K, V>(self, key: K, value: &V) -> Self
    where
        K: AsRef<str>,
        V: ToTypst + ?Sized,
    {
        self.arg_raw(key, value.to_typst())
    }

    /// Add an argument whose value is already Typst code.
    pub fn arg_raw<K, V>(mut self, key: K, value: V) -> Self
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.args.push(format!("{}: {}", key.as_ref(), value.as_ref()));
        self
    }

    /// Render the rule.
    pub fn build(self) -> String {
        format_set_rule(&self.group, &self.args)
    }
}

/// Format `#set group(a, b, c)` from pre-rendered `key: value` items.
pub fn format_set_rule<S: AsRef<str>>(group: &str, args: &[S]) -> String {
    let mut out = format!("#set {group}(");
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(arg.as_ref());
    }
    out.push(')');
    out
}
