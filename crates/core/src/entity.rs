//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Membership checks on collections of entities compare `id()`, never the
/// entity's attributes.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// True if both values denote the same entity.
    fn is_same_entity(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
