//! Structural interning of attributes.
//!
//! Attribute values are plain immutable data and work fine without any
//! interning; this module is for call sites that materialize the same
//! attributes over and over and want pointer-cheap clones and pointer
//! equality as a fast path.
use std::{
    collections::BTreeMap,
    hash::{DefaultHasher, Hash, Hasher},
    sync::Arc,
};

use log::{debug, info};
use parking_lot::RwLock;
use smallvec::SmallVec;

use crate::attrs::Attribute;

/// Deduplicates structurally equal attributes behind shared pointers.
///
/// The table is keyed by a 64-bit structural hash; each bucket holds the
/// attributes sharing that hash. Collisions are legal (they only cost a
/// linear scan of the bucket) and are logged when they happen.
///
/// Example:
///
/// ```rust
/// # use std::sync::Arc;
/// # use lithir::{attrs::{Attribute, FloatType}, interner::Interner};
/// let interner = Interner::new();
/// let a = interner.intern(Attribute::FloatType(FloatType::from_width(32).unwrap()));
/// let b = interner.intern(Attribute::FloatType(FloatType::from_width(32).unwrap()));
/// assert!(Arc::ptr_eq(&a, &b));
/// ```
#[derive(Debug, Default)]
pub struct Interner {
    buckets: RwLock<BTreeMap<u64, SmallVec<Arc<Attribute>, 1>>>,
}

impl Interner {
    fn hash_attr(attr: &Attribute) -> u64 {
        let mut hasher = DefaultHasher::new();
        attr.hash(&mut hasher);
        hasher.finish()
    }

    /// Create an empty interner.
    pub fn new() -> Self {
        Default::default()
    }

    /// Number of distinct attributes currently interned.
    pub fn len(&self) -> usize {
        self.buckets.read().values().map(|bucket| bucket.len()).sum()
    }

    /// Whether nothing has been interned yet.
    pub fn is_empty(&self) -> bool {
        self.buckets.read().is_empty()
    }

    /// Whether a structurally equal attribute has been interned already.
    pub fn contains(&self, attr: &Attribute) -> bool {
        let h = Self::hash_attr(attr);
        self.buckets
            .read()
            .get(&h)
            .is_some_and(|bucket| bucket.iter().any(|existing| existing.as_ref() == attr))
    }

    /// Return the shared pointer for `attr`, inserting it on first sight.
    ///
    /// # A note on concurrency
    /// This method takes an upgradable read lock on the table and upgrades
    /// it only when a new attribute must be inserted. As a result,
    ///  1) Multiple concurrent readers are allowed, but writers are exclusive.
    ///  2) Two threads interning equal attributes race for who inserts; both
    ///     always come back with the same shared pointer.
    pub fn intern(&self, attr: Attribute) -> Arc<Attribute> {
        let h = Self::hash_attr(&attr);

        let mut bucket_lock = self.buckets.upgradable_read();

        // Fast path: an equal attribute is already present.
        if let Some(bucket) = bucket_lock.get(&h) {
            for existing in bucket {
                if existing.as_ref() == &attr {
                    return Arc::clone(existing);
                }
            }
        }

        bucket_lock.with_upgraded(|buckets| {
            let shared = Arc::new(attr);

            if let Some(bucket) = buckets.get_mut(&h) {
                // Important: log collisions at info level with full context.
                info!(
                    "Detected a hash collision on hash 0x{:016x}. The following attributes collided:\n{}",
                    h,
                    bucket
                        .iter()
                        .map(|existing| format!(" - {}", existing))
                        .collect::<Vec<_>>()
                        .join("\n"),
                );
                bucket.push(Arc::clone(&shared));
            } else {
                // Normal insertion is a debug-level event.
                debug!("New attribute interned: {}.", shared);
                buckets.insert(h, SmallVec::from_iter([Arc::clone(&shared)]));
            }

            shared
        })
    }
}
