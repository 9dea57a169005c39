//! Requisition (R&R) domain module.
//!
//! Template column resolution (per-program override with master fallback) and
//! assembly of requisitions into the sparse views consumed by approval lists,
//! detail screens, order screens and the REST export. Storage is reached only
//! through the [`RnrColumnStore`] port.

pub mod column;
pub mod dto;
pub mod rnr;
pub mod template;

pub use column::{ColumnSource, RnrColumn, RnrTemplate};
pub use dto::{RnrDto, RnrLineItemDto};
pub use rnr::{Rnr, RnrLineItem, RnrStatus};
pub use template::{RnrColumnStore, RnrTemplateService, TemplateError, TemplateStoreError};
