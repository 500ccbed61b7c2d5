//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values. To
/// "change" one, construct a new value. In the catalog, `Price` and
/// `BrandName` are value objects; `Brand` and `Product` are entities.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
