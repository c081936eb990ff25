//! # typst-preamble
//!
//! Typed Typst document settings rendered into a `#set` rule preamble.
//!
//! A [`TypstSettings`] value describes page, paragraph and text formatting.
//! Anything the built-in fields don't cover can be added as an extra
//! directive. [`TypstSettings::preamble`] turns both into source text ready to
//! be prepended to a document body:
//!
//! ```text
//! #set page(width: 10cm, height: auto)
//! #set par(leading: 0.65em, justify: true, ...)
//! #set text(font: "Arial", ..., size: 12pt, ..., stroke: (paint: blue))
//!
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use typst_preamble::prelude::*;
//!
//! let mut settings = TypstSettings::builder()
//!     .text_font("Arial")
//!     .text_size("12pt")
//!     .build();
//! settings.add_extra_directive("text", "stroke", "(paint: blue)");
//! settings.add_extra_directive("page", "numbering", Literal::None);
//!
//! let doc = TypstDocument::new("Hello").with_settings(settings);
//! let source = doc.full_source();
//! assert!(source.ends_with("\n\nHello"));
//! ```
//!
//! ## Value formatting
//!
//! - Booleans, `auto` and `none` are emitted bare.
//! - Text starting with a digit (`12pt`, `100%`), starting with `"` or `(`,
//!   or containing `+` is emitted verbatim.
//! - Any other text is emitted as a quoted string.
//! - Extra directive values are emitted exactly as given.
//!
//! ## Modules
//!
//! - [`settings`]: Built-in fields, extra directives, preamble rendering
//! - [`codegen`]: Typed values and `#set` rule generation
//! - [`document`]: Body + settings pairing
//! - [`config`]: Process-wide default settings

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod codegen;
pub mod config;
pub mod document;
pub mod error;
pub mod prelude;
pub mod settings;

// =============================================================================
// Settings
// =============================================================================

pub use settings::{
    CjkLatinSpacing, Directive, ExtraDirectives, ExtraValue, Field, FieldValue, FontStyle,
    FontWeight, Input, Linebreaks, SettingsBuilder, SettingsWarning, Smart, TextDir,
    TypstSettings, WeightName,
};

// =============================================================================
// Values
// =============================================================================

pub use codegen::{Literal, ToTypst, Value};

// =============================================================================
// Infrastructure
// =============================================================================

pub use config::{Config, ConfigBuilder};
pub use document::{DocumentKind, TypstDocument};
pub use error::SettingsError;

/// Re-export of the typst crate used for value representation.
pub use typst;
