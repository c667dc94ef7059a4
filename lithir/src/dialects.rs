//! Installable groups of attribute kinds.
//!
//! Registration is explicit and ordered: nothing registers itself as a side
//! effect of being defined. Installing the same dialect twice fails with
//! [`Error::DuplicateKind`] and leaves the context unchanged up to the
//! offending entry.
use smallvec::SmallVec;

use crate::{
    attrs::{Attribute, FloatAttr, FloatData, FloatType, IndexType, IntAttr, params::check_params},
    context::{Context, KindEntry},
    utils::{Error, Result},
};

fn expect_kind(kind: &'static str, attr: &Attribute) -> Result<()> {
    if attr.kind_name() == kind {
        Ok(())
    } else {
        Err(Error::Normalization {
            kind,
            found: format!("an attribute of kind `{}`", attr.kind_name()),
        })
    }
}

macro_rules! kind_verifier {
    ($fn_name:ident, $kind:expr) => {
        fn $fn_name(attr: &Attribute) -> Result<()> {
            expect_kind($kind, attr)?;
            attr.verify()
        }
    };
}

kind_verifier! { verify_int, IntAttr::KIND }
kind_verifier! { verify_float_data, FloatData::KIND }
kind_verifier! { verify_index, IndexType::KIND }
kind_verifier! { verify_float_type, FloatType::KIND }
kind_verifier! { verify_float, FloatAttr::KIND }

// The scalar payload kinds are written as bare literals, never as
// `name<...>`, so their constructors reject every parameter list.
fn construct_int(_params: SmallVec<Attribute, 2>) -> Result<Attribute> {
    Err(Error::Normalization {
        kind: IntAttr::KIND,
        found: "a parameter list".to_string(),
    })
}

fn construct_float_data(_params: SmallVec<Attribute, 2>) -> Result<Attribute> {
    Err(Error::Normalization {
        kind: FloatData::KIND,
        found: "a parameter list".to_string(),
    })
}

fn construct_index(params: SmallVec<Attribute, 2>) -> Result<Attribute> {
    check_params(IndexType::KIND, IndexType::PARAMS, &params)?;
    Ok(Attribute::Index(IndexType))
}

fn construct_float_type(params: SmallVec<Attribute, 2>) -> Result<Attribute> {
    Ok(Attribute::FloatType(FloatType::new(params)?))
}

fn construct_float(params: SmallVec<Attribute, 2>) -> Result<Attribute> {
    Ok(Attribute::FloatValue(FloatAttr::new(params)?))
}

/// The kinds every context needs: scalar payloads and the index marker.
pub struct BuiltinDialect;

impl BuiltinDialect {
    /// Register `int`, `float_data` and `index` into `ctx`.
    pub fn install(ctx: &mut Context) -> Result<()> {
        ctx.register_kind(KindEntry {
            name: IntAttr::KIND,
            params: None,
            construct: construct_int,
            verify: verify_int,
        })?;
        ctx.register_kind(KindEntry {
            name: FloatData::KIND,
            params: None,
            construct: construct_float_data,
            verify: verify_float_data,
        })?;
        ctx.register_kind(KindEntry {
            name: IndexType::KIND,
            params: Some(IndexType::PARAMS),
            construct: construct_index,
            verify: verify_index,
        })?;
        Ok(())
    }
}

/// The float dialect: width-parametrized float types and float value
/// attributes.
pub struct FloatDialect;

impl FloatDialect {
    /// Register `float_type` and `float` into `ctx`.
    pub fn install(ctx: &mut Context) -> Result<()> {
        ctx.register_kind(KindEntry {
            name: FloatType::KIND,
            params: Some(FloatType::PARAMS),
            construct: construct_float_type,
            verify: verify_float_type,
        })?;
        ctx.register_kind(KindEntry {
            name: FloatAttr::KIND,
            params: Some(FloatAttr::PARAMS),
            construct: construct_float,
            verify: verify_float,
        })?;
        Ok(())
    }
}

/// Install [`BuiltinDialect`] then [`FloatDialect`].
pub fn install_standard(ctx: &mut Context) -> Result<()> {
    BuiltinDialect::install(ctx)?;
    FloatDialect::install(ctx)
}
