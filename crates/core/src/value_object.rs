//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**. They are defined entirely by their
//! attribute values, e.g. an [`AuditInfo`](crate::AuditInfo) stamp or a
//! template column's display settings.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new value.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct DispensingUnit(String);
///
/// impl ValueObject for DispensingUnit {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
