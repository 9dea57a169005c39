//! `lmis-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the requisition and
//! shipment modules (no infrastructure concerns).

pub mod audit;
pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use audit::AuditInfo;
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{ColumnId, FacilityId, LineItemId, PeriodId, PodId, ProgramId, RequisitionId, UserId};
pub use value_object::ValueObject;
