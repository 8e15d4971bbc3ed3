//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity; two of them with the same attribute values
/// are equal. They are immutable: to "modify" one, build a new one.
///
/// - **Value Object**: `Totals { value, profit }`
/// - **Entity**: `Record { id, .. }` (see [`crate::Entity`])
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
