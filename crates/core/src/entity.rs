//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Records in the sales dataset are entities: they are identified by a stable
/// key, and their non-key fields may change over time without changing which
/// record they are.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
