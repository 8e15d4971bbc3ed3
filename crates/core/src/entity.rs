//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Two entities with the same id are the same product, even if their other
/// fields differ (e.g. before and after an update).
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Ord + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;

    /// Identity comparison (ignores every field but the id).
    fn same_identity(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
