//! Documents handed to the typesetting engine.
//!
//! A [`TypstDocument`] pairs a body with the settings whose preamble is
//! prepended to it. Compiling the resulting source is left to the caller.

use std::fmt;

use crate::config;
use crate::settings::TypstSettings;

/// How the body is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocumentKind {
    /// Markup.
    #[default]
    Text,
    /// A display equation; the body is wrapped in `$ ... $`.
    Math,
}

/// A Typst body with its settings.
///
/// # Example
///
/// ```
/// use typst_preamble::{TypstDocument, TypstSettings};
///
/// let doc = TypstDocument::math("x^2 + y^2 = z^2")
///     .with_settings(TypstSettings::builder().text_size("20pt").build());
///
/// assert_eq!(doc.to_string(), "MathTypst(x^2 + y^2 = z^2)");
/// assert!(doc.full_source().ends_with("\n\n$ x^2 + y^2 = z^2 $"));
/// ```
#[derive(Debug, Clone)]
pub struct TypstDocument {
    source: String,
    kind: DocumentKind,
    settings: TypstSettings,
}

impl TypstDocument {
    /// Markup document using the configured default settings.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            kind: DocumentKind::Text,
            settings: config::get().settings.clone(),
        }
    }

    /// Equation document using the configured default settings.
    pub fn math(source: impl Into<String>) -> Self {
        Self {
            kind: DocumentKind::Math,
            ..Self::new(source)
        }
    }

    /// Replace the settings.
    pub fn with_settings(mut self, settings: TypstSettings) -> Self {
        self.settings = settings;
        self
    }

    /// The body as given.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The document kind.
    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    /// The settings used for the preamble.
    pub fn settings(&self) -> &TypstSettings {
        &self.settings
    }

    /// Mutable settings, e.g. to add extra directives.
    pub fn settings_mut(&mut self) -> &mut TypstSettings {
        &mut self.settings
    }

    /// Preamble followed by the body.
    pub fn full_source(&self) -> String {
        let mut out = self.settings.preamble();
        match self.kind {
            DocumentKind::Text => out.push_str(&self.source),
            DocumentKind::Math => {
                out.push_str("$ ");
                out.push_str(&self.source);
                out.push_str(" $");
            }
        }
        out
    }
}

impl fmt::Display for TypstDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.kind {
            DocumentKind::Text => "Typst",
            DocumentKind::Math => "MathTypst",
        };
        write!(f, "{name}({})", self.source)
    }
}
