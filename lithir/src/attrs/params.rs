//! Declared parameter predicates for parametrized attribute kinds.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    attrs::Attribute,
    utils::{Error, Result},
};

/// Predicate on one parameter position of a parametrized kind.
///
/// Each parametrized kind declares a fixed slice of these; construction and
/// re-verification both run [`check_params`] against the same declaration,
/// so there is a single source of truth for what a well-formed parameter
/// list looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ParamKind {
    /// An `int` scalar payload.
    Int,

    /// A `float_data` scalar payload.
    Float,

    /// A `float_type` attribute.
    FloatType,

    /// The `index` marker type.
    Index,

    /// Either a `float_type` or the `index` marker.
    FloatTypeOrIndex,
}

impl ParamKind {
    /// Whether `attr` satisfies this predicate.
    pub fn admits(&self, attr: &Attribute) -> bool {
        match self {
            ParamKind::Int => attr.is_int(),
            ParamKind::Float => attr.is_float(),
            ParamKind::FloatType => attr.is_float_type(),
            ParamKind::Index => attr.is_index(),
            ParamKind::FloatTypeOrIndex => attr.is_float_type() || attr.is_index(),
        }
    }

    /// Short description used in diagnostics.
    pub const fn describe(&self) -> &'static str {
        match self {
            ParamKind::Int => "an `int` attribute",
            ParamKind::Float => "a `float_data` attribute",
            ParamKind::FloatType => "a `float_type` attribute",
            ParamKind::Index => "the `index` type",
            ParamKind::FloatTypeOrIndex => "a `float_type` or `index` attribute",
        }
    }
}

/// Check a parameter list against the predicates declared by `kind`.
///
/// Arity is checked first ([`Error::Shape`]), then every position in order
/// ([`Error::ParameterKind`] reports the first offending position).
pub fn check_params(
    kind: &'static str,
    declared: &[ParamKind],
    found: &[Attribute],
) -> Result<()> {
    if declared.len() != found.len() {
        return Err(Error::Shape {
            kind,
            expected: declared.len(),
            found: found.len(),
        });
    }

    for (position, (param_kind, attr)) in declared.iter().zip(found.iter()).enumerate() {
        if !param_kind.admits(attr) {
            return Err(Error::ParameterKind {
                kind,
                position,
                expected: param_kind.describe(),
                found: attr.kind_name(),
            });
        }
    }

    Ok(())
}
