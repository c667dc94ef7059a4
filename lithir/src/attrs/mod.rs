//! Attributes module
//!
//! This module contains the canonical representation of attributes used by
//! the `lithir` crate. It exposes a small attribute system built on three
//! layers:
//!
//! - Scalar payloads: integers and raw-bit floats (see `scalar.rs`).
//! - Parametrized kinds: float types, the index marker, and float value
//!   attributes, each declaring per-position predicates (see `float.rs` and
//!   `params.rs`).
//! - The [`Attribute`] sum type tying everything together, with a recursive,
//!   depth-guarded verifier.
//!
//! Attribute values are immutable after construction, compare structurally,
//! and are freely shareable across threads. The formatting helpers live in
//! `fmt.rs`; the textual grammar they print is the one `crate::parser`
//! accepts.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::{EnumIs, EnumTryAs};

use crate::utils::{Error, Result};

pub mod float;
pub mod fmt;
pub mod params;
pub mod scalar;

pub use float::{FloatAttr, FloatType, IndexType, TypeSpec};
pub use scalar::{FloatData, IntAttr};

/// Maximum nesting depth the verifier follows before giving up with
/// [`Error::NestingTooDeep`]. Well-formed trees built by the checked
/// constructors stay at depth 3 or less; the guard exists for values
/// assembled through the unchecked constructors.
pub const MAX_ATTR_DEPTH: usize = 64;

/// A sum-type over every attribute this core can represent.
///
/// Equality, ordering and hashing are structural (bit-pattern semantics for
/// float payloads), so attributes can key ordered containers and be
/// deduplicated by [`crate::interner::Interner`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIs, EnumTryAs)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Attribute {
    /// Integer scalar payload (kind `int`).
    Int(IntAttr),

    /// Float scalar payload, bit-exact (kind `float_data`).
    Float(FloatData),

    /// Float type parametrized by its bit width (kind `float_type`).
    FloatType(FloatType),

    /// The distinguished index marker type (kind `index`).
    Index(IndexType),

    /// A float value paired with its type (kind `float`).
    FloatValue(FloatAttr),
}

macro_rules! attribute_from {
    ($typ:ty, $lbl:ident) => {
        impl From<$typ> for Attribute {
            fn from(value: $typ) -> Self {
                Attribute::$lbl(value)
            }
        }
    };
}

attribute_from! { IntAttr, Int }
attribute_from! { FloatData, Float }
attribute_from! { FloatType, FloatType }
attribute_from! { IndexType, Index }
attribute_from! { FloatAttr, FloatValue }

impl From<i64> for Attribute {
    fn from(value: i64) -> Self {
        Attribute::Int(IntAttr::new(value))
    }
}

impl From<f64> for Attribute {
    fn from(value: f64) -> Self {
        Attribute::Float(FloatData::new(value))
    }
}

impl Attribute {
    /// The registered kind name of this attribute.
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Attribute::Int(_) => IntAttr::KIND,
            Attribute::Float(_) => FloatData::KIND,
            Attribute::FloatType(_) => FloatType::KIND,
            Attribute::Index(_) => IndexType::KIND,
            Attribute::FloatValue(_) => FloatAttr::KIND,
        }
    }

    /// The child attributes (parameters) of this node. Scalar payloads and
    /// the index marker have none.
    pub fn children(&self) -> &[Attribute] {
        match self {
            Attribute::Int(_) | Attribute::Float(_) | Attribute::Index(_) => &[],
            Attribute::FloatType(float_type) => float_type.params(),
            Attribute::FloatValue(float_attr) => float_attr.params(),
        }
    }

    /// Verify this attribute tree recursively.
    ///
    /// Children are checked before the node's own shape and domain
    /// constraints, so the first error reported is the deepest one. The
    /// traversal is bounded by [`MAX_ATTR_DEPTH`]. Verification is
    /// idempotent and never mutates the value.
    pub fn verify(&self) -> Result<()> {
        self.verify_at_depth(0)
    }

    pub(crate) fn verify_at_depth(&self, depth: usize) -> Result<()> {
        if depth >= MAX_ATTR_DEPTH {
            return Err(Error::NestingTooDeep {
                limit: MAX_ATTR_DEPTH,
            });
        }

        match self {
            Attribute::Int(_) | Attribute::Float(_) => Ok(()),
            Attribute::Index(index) => index.verify(),
            Attribute::FloatType(float_type) => float_type.verify_at_depth(depth),
            Attribute::FloatValue(float_attr) => float_attr.verify_at_depth(depth),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_is_a_small_by_value_type() {
        // Parametrized kinds hold their children through a boxed slice;
        // `Attribute` must stay a couple of words so it can be passed and
        // nested by value.
        assert!(std::mem::size_of::<Attribute>() <= 4 * std::mem::size_of::<usize>());
    }

    #[test]
    fn nested_attributes_build_and_traverse() {
        let attr = Attribute::FloatValue(
            FloatAttr::from_value_and_width(3.5, 32).expect("builder should succeed"),
        );

        assert_eq!(attr.kind_name(), FloatAttr::KIND);
        assert_eq!(attr.children().len(), 2);
        assert_eq!(attr.children()[1].children().len(), 1);
        attr.verify().expect("well-formed tree should verify");
    }
}
