//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Entities embed their identifier explicitly (no shared base model); equality
/// stays derived per entity type.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Returns `true` when both values denote the same entity, regardless of state.
    fn same_identity(&self, other: &Self) -> bool
    where
        Self: Sized,
    {
        self.id() == other.id()
    }
}
