//! Parametrized float kinds: the width-parametrized `float_type`, the
//! `index` marker, and the `float` value attribute pairing a payload with
//! its type.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use strum::EnumIs;

use crate::{
    attrs::{
        Attribute,
        params::{ParamKind, check_params},
        scalar::{FloatData, IntAttr},
    },
    utils::{Error, Result},
};

/// A float type parametrized by its bit width (kind `float_type`).
///
/// The single parameter is an `int` attribute holding the width. The checked
/// constructor and [`FloatType::verify`] enforce the same domain: widths lie
/// in `MIN_WIDTH_BITS ..= MAX_WIDTH_BITS`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FloatType {
    // Boxed: parametrized kinds nest `Attribute`, which contains them by
    // value, so inline child storage would make the sum type infinitely
    // sized.
    params: Box<[Attribute]>,
}

impl FloatType {
    pub const KIND: &'static str = "float_type";
    pub const PARAMS: &'static [ParamKind] = &[ParamKind::Int];

    /// Smallest accepted bit width.
    pub const MIN_WIDTH_BITS: i64 = 1;
    /// Largest accepted bit width.
    pub const MAX_WIDTH_BITS: i64 = (1 << 23) - 1;

    /// Checked constructor: validates shape, parameter kinds, and the width
    /// domain. This is the single construction path; the registry's
    /// constructor for `float_type` and [`FloatType::from_width`] both land
    /// here.
    pub fn new(params: SmallVec<Attribute, 2>) -> Result<Self> {
        let this = Self::from_params_unchecked(params);
        this.verify_shallow()?;
        Ok(this)
    }

    /// Assembles a value without any checking. Intended for deserializers
    /// and tests; anything built this way must pass [`FloatType::verify`]
    /// before being treated as well-formed.
    pub fn from_params_unchecked(params: SmallVec<Attribute, 2>) -> Self {
        Self {
            params: params.into_iter().collect(),
        }
    }

    /// Builds a `float_type` from a raw width.
    pub fn from_width(width: i64) -> Result<Self> {
        Self::new(SmallVec::from_iter([Attribute::Int(IntAttr::new(width))]))
    }

    /// The parameter list.
    pub fn params(&self) -> &[Attribute] {
        &self.params
    }

    /// The bit width, when the parameter list has the declared shape.
    pub fn width(&self) -> Option<i64> {
        match self.params.first() {
            Some(Attribute::Int(width)) => Some(width.value()),
            _ => None,
        }
    }

    /// Re-checks this value and everything beneath it.
    pub fn verify(&self) -> Result<()> {
        self.verify_at_depth(0)
    }

    pub(crate) fn verify_at_depth(&self, depth: usize) -> Result<()> {
        for param in self.params.iter() {
            param.verify_at_depth(depth + 1)?;
        }
        self.verify_shallow()
    }

    fn verify_shallow(&self) -> Result<()> {
        check_params(Self::KIND, Self::PARAMS, &self.params)?;

        // After check_params the parameter is known to be an `int`.
        if let Some(width) = self.width() {
            if width < Self::MIN_WIDTH_BITS {
                return Err(Error::Domain {
                    kind: Self::KIND,
                    message: format!("width must be positive, got {}", width),
                });
            }

            if width > Self::MAX_WIDTH_BITS {
                return Err(Error::Domain {
                    kind: Self::KIND,
                    message: format!(
                        "width {} exceeds the maximum of {}",
                        width,
                        Self::MAX_WIDTH_BITS
                    ),
                });
            }
        }

        Ok(())
    }
}

/// The distinguished index marker type (kind `index`).
///
/// A parametrized kind with an empty parameter list; its textual form is the
/// bare identifier `index`. Float attributes use it to mark values typed by
/// the target word width rather than an explicit bit count.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IndexType;

impl IndexType {
    pub const KIND: &'static str = "index";
    pub const PARAMS: &'static [ParamKind] = &[];

    /// Nothing to check; the marker carries no payload.
    pub fn verify(&self) -> Result<()> {
        Ok(())
    }
}

/// A float value paired with its type (kind `float`).
///
/// Two parameters: a `float_data` payload and a type tag that is either a
/// `float_type` or the `index` marker.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FloatAttr {
    // Boxed for the same reason as `FloatType::params`.
    params: Box<[Attribute]>,
}

impl FloatAttr {
    pub const KIND: &'static str = "float";
    pub const PARAMS: &'static [ParamKind] = &[ParamKind::Float, ParamKind::FloatTypeOrIndex];

    /// Checked constructor; see [`FloatType::new`] for the contract.
    pub fn new(params: SmallVec<Attribute, 2>) -> Result<Self> {
        let this = Self::from_params_unchecked(params);
        this.verify_shallow()?;
        Ok(this)
    }

    /// Assembles a value without any checking; pair with [`FloatAttr::verify`].
    pub fn from_params_unchecked(params: SmallVec<Attribute, 2>) -> Self {
        Self {
            params: params.into_iter().collect(),
        }
    }

    /// Builds a `float` attribute from a payload and a type specification.
    ///
    /// The payload always canonicalizes into a `float_data` parameter. The
    /// type side accepts the closed [`TypeSpec`] set: a raw width (which
    /// builds the `float_type` through [`FloatType::from_width`], surfacing
    /// its domain errors), the index marker, or an existing type attribute.
    /// An existing attribute of any other kind fails with
    /// [`Error::Normalization`].
    pub fn from_value_and_width(value: f64, spec: impl Into<TypeSpec>) -> Result<Self> {
        let ty = match spec.into() {
            TypeSpec::Width(width) => Attribute::FloatType(FloatType::from_width(width)?),
            TypeSpec::Index => Attribute::Index(IndexType),
            TypeSpec::Existing(attr) => {
                if attr.is_float_type() || attr.is_index() {
                    attr
                } else {
                    return Err(Error::Normalization {
                        kind: Self::KIND,
                        found: format!("an attribute of kind `{}`", attr.kind_name()),
                    });
                }
            }
        };

        Self::new(SmallVec::from_iter([
            Attribute::Float(FloatData::new(value)),
            ty,
        ]))
    }

    /// The parameter list.
    pub fn params(&self) -> &[Attribute] {
        &self.params
    }

    /// The payload value, when the parameter list has the declared shape.
    pub fn value(&self) -> Option<f64> {
        match self.params.first() {
            Some(Attribute::Float(data)) => Some(data.value()),
            _ => None,
        }
    }

    /// The raw payload bits, when the parameter list has the declared shape.
    pub fn bits(&self) -> Option<u64> {
        match self.params.first() {
            Some(Attribute::Float(data)) => Some(data.bits()),
            _ => None,
        }
    }

    /// The type parameter.
    pub fn ty(&self) -> Option<&Attribute> {
        self.params.get(1)
    }

    /// Re-checks this value and everything beneath it, including the width
    /// domain of an embedded `float_type`.
    pub fn verify(&self) -> Result<()> {
        self.verify_at_depth(0)
    }

    pub(crate) fn verify_at_depth(&self, depth: usize) -> Result<()> {
        for param in self.params.iter() {
            param.verify_at_depth(depth + 1)?;
        }
        self.verify_shallow()
    }

    fn verify_shallow(&self) -> Result<()> {
        check_params(Self::KIND, Self::PARAMS, &self.params)
    }
}

/// The closed set of type inputs accepted by
/// [`FloatAttr::from_value_and_width`]. Matches on this enum are exhaustive;
/// adding an input form means extending it here and handling it everywhere.
#[derive(Debug, Clone, PartialEq, Eq, EnumIs)]
pub enum TypeSpec {
    /// Build a fresh `float_type` of this width.
    Width(i64),

    /// Use the index marker type.
    Index,

    /// Use an already-built type attribute; must be a `float_type` or the
    /// `index` marker.
    Existing(Attribute),
}

macro_rules! type_spec_from_int {
    ($typ:ty) => {
        impl From<$typ> for TypeSpec {
            fn from(width: $typ) -> Self {
                TypeSpec::Width(i64::from(width))
            }
        }
    };
}

type_spec_from_int! { i8 }
type_spec_from_int! { i16 }
type_spec_from_int! { i32 }
type_spec_from_int! { i64 }
type_spec_from_int! { u8 }
type_spec_from_int! { u16 }
type_spec_from_int! { u32 }

impl From<FloatType> for TypeSpec {
    fn from(ty: FloatType) -> Self {
        TypeSpec::Existing(Attribute::FloatType(ty))
    }
}

impl From<IndexType> for TypeSpec {
    fn from(_: IndexType) -> Self {
        TypeSpec::Index
    }
}

impl From<Attribute> for TypeSpec {
    fn from(attr: Attribute) -> Self {
        TypeSpec::Existing(attr)
    }
}
