//! Shipment / proof-of-delivery domain module.
//!
//! Validation of delivered quantities before a POD is accepted, implemented as
//! deterministic domain logic (no IO, no storage).

pub mod pod;

pub use pod::{OrderPod, OrderPodLineItem, PodValidationError};
