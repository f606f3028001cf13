//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// A stock entry is an entity: its quantity changes, yet two entries that share
/// a product name are still distinct.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;
}
