//! Scalar payload attributes: integers and raw-bit floats.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An integer scalar payload (kind `int`).
///
/// This is the leaf that parametrized kinds use for numeric parameters such
/// as bit widths. The payload is a plain `i64`; domain restrictions (e.g.
/// positivity of a width) belong to the kind that embeds the parameter, not
/// to the scalar itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(transparent)]
pub struct IntAttr {
    value: i64,
}

impl IntAttr {
    pub const KIND: &'static str = "int";

    /// Creates a new `IntAttr` holding the given value.
    #[inline]
    pub const fn new(value: i64) -> Self {
        Self { value }
    }

    /// Returns the payload value.
    #[inline]
    pub const fn value(&self) -> i64 {
        self.value
    }
}

macro_rules! int_attr_from {
    ($typ:ty) => {
        impl From<$typ> for IntAttr {
            fn from(value: $typ) -> Self {
                IntAttr::new(i64::from(value))
            }
        }
    };
}

int_attr_from! { i8 }
int_attr_from! { i16 }
int_attr_from! { i32 }
int_attr_from! { i64 }
int_attr_from! { u8 }
int_attr_from! { u16 }
int_attr_from! { u32 }

/// A float scalar payload stored as raw IEEE-754 binary64 bits (kind
/// `float_data`).
///
/// Storing the bit pattern instead of the `f64` makes equality, ordering and
/// hashing total and structural: `0.0` and `-0.0` are distinct, and two NaNs
/// compare equal exactly when their payloads are bit-identical. The ordering
/// is representational, not numeric.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(transparent)]
pub struct FloatData {
    bits: u64,
}

impl FloatData {
    pub const KIND: &'static str = "float_data";

    /// Creates a new `FloatData` from a value. Every payload is accepted,
    /// including infinities and NaNs; the bits are preserved exactly.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self {
            bits: value.to_bits(),
        }
    }

    /// Creates a `FloatData` directly from a bit pattern.
    #[inline]
    pub const fn from_bits(bits: u64) -> Self {
        Self { bits }
    }

    /// The canonical quiet-NaN payload. This is what the textual `NaN`
    /// parses to; other NaN bit patterns are representable but do not
    /// round-trip through text.
    #[inline]
    pub const fn canonical_nan() -> Self {
        Self::new(f64::NAN)
    }

    /// Returns the payload as an `f64`.
    #[inline]
    pub const fn value(&self) -> f64 {
        f64::from_bits(self.bits)
    }

    /// Returns the raw bit pattern.
    #[inline]
    pub const fn bits(&self) -> u64 {
        self.bits
    }
}

impl From<f64> for FloatData {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<f32> for FloatData {
    fn from(value: f32) -> Self {
        Self::new(f64::from(value))
    }
}

impl std::fmt::Debug for FloatData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("FloatData").field(&self.value()).finish()
    }
}
