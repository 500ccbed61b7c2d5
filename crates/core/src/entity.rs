//! Entity trait: identity + continuity across state changes.

/// Catalog records that are looked up by identity (brands by name, products
/// by generated id).
pub trait Entity {
    /// Identity key; must be stable for the lifetime of the record.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
