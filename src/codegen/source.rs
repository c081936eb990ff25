//! Rendering Rust values as Typst source.
//!
//! Strings go through typst's own `Repr` so escaping matches the compiler.

use typst::foundations::{Repr, Str};

/// Convert a value to Typst source code.
///
/// # Example
///
/// ```
/// use typst_preamble::codegen::ToTypst;
///
/// assert_eq!("Arial".to_typst(), r#""Arial""#);
/// assert_eq!(r#"say "hi""#.to_typst(), r#""say \"hi\"""#);
/// ```
pub trait ToTypst {
    /// Generate the Typst source representation.
    fn to_typst(&self) -> String;
}

impl ToTypst for str {
    fn to_typst(&self) -> String {
        Str::from(self).repr().to_string()
    }
}

impl ToTypst for &str {
    fn to_typst(&self) -> String {
        (*self).to_typst()
    }
}

impl ToTypst for String {
    fn to_typst(&self) -> String {
        self.as_str().to_typst()
    }
}
