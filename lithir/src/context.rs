//! The kind registry.
//!
//! A [`Context`] maps kind names to [`KindEntry`] records. Registration is
//! an explicit, ordered call made while holding `&mut Context` (typically
//! through the installers in `crate::dialects`); afterwards the context is
//! only ever used through shared references, so no locking is involved.
use std::collections::BTreeMap;

use log::debug;
use smallvec::SmallVec;

use crate::{
    attrs::{Attribute, params::ParamKind},
    utils::{Error, Result},
};

/// Constructor registered for a kind: canonicalizes a parameter list into a
/// finished attribute, or explains why it cannot.
pub type ConstructFn = fn(SmallVec<Attribute, 2>) -> Result<Attribute>;

/// Verifier registered for a kind: re-checks an already-built attribute.
pub type VerifyFn = fn(&Attribute) -> Result<()>;

/// The declarative record describing one attribute kind.
#[derive(Debug, Clone, Copy)]
pub struct KindEntry {
    /// Registered kind name; unique within a context.
    pub name: &'static str,

    /// Declared parameter predicates, or `None` for data kinds whose
    /// textual form is a bare literal rather than `name<...>`.
    pub params: Option<&'static [ParamKind]>,

    /// The single construction path for this kind. Builders and the parser
    /// both end up here.
    pub construct: ConstructFn,

    /// Structural verifier for values of this kind.
    pub verify: VerifyFn,
}

/// A registry of attribute kinds.
///
/// Example:
///
/// ```rust
/// # use lithir::{attrs::IntAttr, context::Context, dialects};
/// let mut ctx = Context::new();
/// dialects::install_standard(&mut ctx).unwrap();
///
/// let attr = ctx
///     .construct("float_type", [IntAttr::new(32).into()].into_iter().collect())
///     .unwrap();
/// assert_eq!(attr.to_string(), "float_type<32>");
/// assert!(ctx.verify(&attr).is_ok());
/// ```
#[derive(Debug, Default)]
pub struct Context {
    kinds: BTreeMap<&'static str, KindEntry>,
}

impl Context {
    /// Create an empty context.
    pub fn new() -> Self {
        Default::default()
    }

    /// Register a kind.
    ///
    /// Fails with [`Error::DuplicateKind`] when a kind of the same name is
    /// already present; the existing entry is left untouched.
    pub fn register_kind(&mut self, entry: KindEntry) -> Result<()> {
        if self.kinds.contains_key(entry.name) {
            return Err(Error::DuplicateKind { name: entry.name });
        }

        debug!("Registered attribute kind `{}`.", entry.name);
        self.kinds.insert(entry.name, entry);
        Ok(())
    }

    /// Look up the entry registered under `name`.
    pub fn kind(&self, name: &str) -> Option<&KindEntry> {
        self.kinds.get(name)
    }

    /// Iterate over all registered kind names, in sorted order.
    pub fn kind_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.kinds.keys().copied()
    }

    /// Construct an attribute of kind `name` from a parameter list, through
    /// the kind's registered constructor.
    pub fn construct(&self, name: &str, params: SmallVec<Attribute, 2>) -> Result<Attribute> {
        match self.kinds.get(name) {
            Some(entry) => (entry.construct)(params),
            None => Err(Error::UnknownKind {
                name: name.to_string(),
            }),
        }
    }

    /// Verify an attribute through the verifier registered for its kind.
    ///
    /// Unlike [`Attribute::verify`] this fails with [`Error::UnknownKind`]
    /// when the attribute's kind was never registered here, which is the
    /// check generic IR plumbing wants before accepting foreign values.
    pub fn verify(&self, attr: &Attribute) -> Result<()> {
        match self.kinds.get(attr.kind_name()) {
            Some(entry) => (entry.verify)(attr),
            None => Err(Error::UnknownKind {
                name: attr.kind_name().to_string(),
            }),
        }
    }
}
