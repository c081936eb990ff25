//! Preamble rendering.
//!
//! Built-in fields are grouped by directive group in first-seen order. Extra
//! directives are then merged in: a key already present is overwritten in
//! place, a new key is appended, and a group with no built-in fields is
//! appended after all built-in groups. Each group becomes one `#set` line and
//! the preamble ends with a blank line.

use std::fmt;

use tracing::debug;

use super::extra::OrderedMap;
use super::TypstSettings;
use crate::codegen::{DirectiveBuilder, ToTypst};

/// One `#set <group>(...)` rule with rendered arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    /// Directive group.
    pub group: String,
    /// `(key, rendered value)` pairs in output order.
    pub args: Vec<(String, String)>,
}

impl Directive {
    /// The rendered value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.args
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = self
            .args
            .iter()
            .fold(DirectiveBuilder::new(self.group.as_str()), |rule, (k, v)| {
                rule.arg_raw(k, v)
            })
            .build();
        f.write_str(&rule)
    }
}

impl TypstSettings {
    /// Merged directives in output order.
    pub fn directives(&self) -> Vec<Directive> {
        let mut groups: OrderedMap<OrderedMap<String>> = OrderedMap::new();

        for field in self.fields() {
            groups
                .entry_or_default(field.group)
                .insert(field.key, field.value.to_typst());
        }

        for (group, entries) in self.extra.groups() {
            let bucket = groups.entry_or_default(group);
            for (key, value) in entries.iter() {
                bucket.insert(key, value.to_typst());
            }
        }

        groups
            .into_entries()
            .into_iter()
            .map(|(group, args)| Directive {
                group,
                args: args.into_entries(),
            })
            .collect()
    }

    /// Render the preamble: one `#set` line per group, then a blank line.
    pub fn preamble(&self) -> String {
        let directives = self.directives();
        debug!(groups = directives.len(), "rendering preamble");

        let mut out = directives
            .iter()
            .map(Directive::to_string)
            .collect::<Vec<_>>()
            .join("\n");
        out.push_str("\n\n");
        out
    }
}
