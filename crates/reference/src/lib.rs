//! Reference data module.
//!
//! Programs, facilities, processing periods and supplying depots are created and
//! maintained elsewhere; requisition and shipment logic only reads them.

pub mod facility;
pub mod period;
pub mod program;

pub use facility::{Facility, SupplyingDepot};
pub use period::ProcessingPeriod;
pub use program::Program;
