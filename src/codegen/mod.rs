//! Typst code generation for `#set` rules.
//!
//! # Modules
//!
//! - [`value`] - typed directive values and the text classification rule
//! - [`source`] - Rust → Typst source rendering
//! - [`builder`] - `#set` rule construction
//! - [`literal`] - strict measurement parsing for diagnostics

mod builder;
mod literal;
mod source;
mod value;

// Values
pub use value::{is_verbatim, starts_with_digit, Literal, Value};

// Source generation
pub use source::ToTypst;

// Builders
pub use builder::{format_set_rule, DirectiveBuilder};

// Measurement parsing (text → Typst value)
pub use literal::{parse_angle, parse_length, parse_measurement, parse_ratio};
