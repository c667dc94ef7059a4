//! Attribute and type system core for the lith intermediate representation.
//!
//! Attributes are immutable, structurally-compared values: scalar payloads
//! (`int`, `float_data`), parametrized types (`float_type`, `index`) and
//! typed float values (`float`). Kinds are registered explicitly into a
//! [`context::Context`], printed through `Display`, and parsed back with
//! the combinators in [`parser`] (enabled by the default `chumsky` feature).
//!
//! ```
//! use lithir::{attrs::FloatAttr, context::Context, dialects};
//!
//! let mut ctx = Context::new();
//! dialects::install_standard(&mut ctx).unwrap();
//!
//! let attr = FloatAttr::from_value_and_width(3.5, 32).unwrap();
//! assert_eq!(attr.to_string(), "float<3.5, float_type<32>>");
//! ```

pub mod attrs;
pub mod context;
pub mod dialects;
pub mod interner;
#[cfg(feature = "chumsky")]
pub mod parser;
pub mod utils;
