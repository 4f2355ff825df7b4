//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**; they are defined entirely by their
//! attribute values. Two value objects with the same values are equal.

/// Marker trait for value objects.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: no identity (two value objects with same values are equal)
/// - **Entity**: has identity (two entities with the same id are the same entity,
///   and two entities with different ids are distinct even if every attribute matches)
///
/// Example:
/// - an article `{ art_nr: "A-1", width: 10.0 }` is a value object
/// - a storage location `{ id: StorageLocationId(...), name: "..." }` is an entity
///
/// ## Usage Pattern
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct Dimensions {
///     width: f64,
///     depth: f64,
/// }
///
/// impl ValueObject for Dimensions {}
///
/// let a = Dimensions { width: 1.0, depth: 2.0 };
/// let b = Dimensions { width: 1.0, depth: 2.0 };
/// assert_eq!(a, b);  // Equal by value, not identity
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
