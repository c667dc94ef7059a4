//! Pretty-print helpers for attributes.
//!
//! The forms printed here are canonical: `crate::parser` parses them back
//! into structurally equal values. Float payloads use Rust's `{:?}`
//! rendering of `f64`, which always carries a `.`, an exponent, `inf` or
//! `NaN`, so float and integer literals never collide.
use crate::attrs::{Attribute, FloatAttr, FloatData, FloatType, IndexType, IntAttr};

impl std::fmt::Display for IntAttr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl std::fmt::Display for FloatData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.value())
    }
}

impl std::fmt::Display for FloatType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}<{}>",
            FloatType::KIND,
            self.params()
                .iter()
                .map(|param| param.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

impl std::fmt::Display for IndexType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", IndexType::KIND)
    }
}

impl std::fmt::Display for FloatAttr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}<{}>",
            FloatAttr::KIND,
            self.params()
                .iter()
                .map(|param| param.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Attribute::Int(int_attr) => int_attr.fmt(f),
            Attribute::Float(float_data) => float_data.fmt(f),
            Attribute::FloatType(float_type) => float_type.fmt(f),
            Attribute::Index(index_type) => index_type.fmt(f),
            Attribute::FloatValue(float_attr) => float_attr.fmt(f),
        }
    }
}
