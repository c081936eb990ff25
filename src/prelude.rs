//! Prelude module for convenient imports.
//!
//! ```
//! use typst_preamble::prelude::*;
//! ```

// Settings
pub use crate::settings::{
    CjkLatinSpacing, ExtraValue, FontStyle, FontWeight, Linebreaks, SettingsBuilder, Smart,
    TextDir, TypstSettings, WeightName,
};

// Values
pub use crate::codegen::{Literal, ToTypst, Value};

// Documents
pub use crate::document::{DocumentKind, TypstDocument};

// Configuration
pub use crate::config::ConfigBuilder;

// Errors
pub use crate::error::SettingsError;
