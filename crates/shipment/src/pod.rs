use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use lmis_core::{AuditInfo, DomainError, Entity, FacilityId, PeriodId, PodId, ProgramId, RequisitionId};

/// Why a delivery line was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PodValidationError {
    /// Product code or received quantity is missing.
    #[error("error.mandatory.fields.missing")]
    MissingMandatoryFields,

    /// Received quantity is negative.
    #[error("error.invalid.received.quantity")]
    InvalidReceivedQuantity,
}

impl PodValidationError {
    /// Message key understood by the presentation layer.
    pub fn message_key(self) -> &'static str {
        match self {
            PodValidationError::MissingMandatoryFields => "error.mandatory.fields.missing",
            PodValidationError::InvalidReceivedQuantity => "error.invalid.received.quantity",
        }
    }
}

impl From<PodValidationError> for DomainError {
    fn from(err: PodValidationError) -> Self {
        DomainError::validation(err.message_key())
    }
}

/// A line of a proof of delivery: what was shipped and what actually arrived.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPodLineItem {
    pub pod_id: Option<PodId>,
    pub product_code: Option<String>,
    pub quantity_received: Option<i32>,
    pub product_name: Option<String>,
    pub dispensing_unit: Option<String>,
    pub packs_to_ship: Option<i32>,
    pub quantity_shipped: Option<i32>,
    pub full_supply: Option<bool>,
    pub notes: Option<String>,
}

impl OrderPodLineItem {
    /// A line carrying only what the receiving facility enters; the shipment
    /// details are filled in later by the caller.
    pub fn received(pod_id: PodId, product_code: impl Into<String>, quantity_received: Option<i32>) -> Self {
        Self {
            pod_id: Some(pod_id),
            product_code: Some(product_code.into()),
            quantity_received,
            ..Self::default()
        }
    }

    /// Check the line before it is accepted. The first failing rule wins.
    ///
    /// Only product code and received quantity are checked.
    pub fn validate(&self) -> Result<(), PodValidationError> {
        let received = match (self.product_code.as_deref(), self.quantity_received) {
            (Some(code), Some(received)) if !code.is_empty() => received,
            _ => return Err(PodValidationError::MissingMandatoryFields),
        };

        if received < 0 {
            return Err(PodValidationError::InvalidReceivedQuantity);
        }
        Ok(())
    }
}

/// Proof-of-delivery document for a released order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPod {
    pub id: PodId,
    pub order_id: RequisitionId,
    pub facility_id: FacilityId,
    pub program_id: ProgramId,
    pub period_id: PeriodId,
    pub received_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub audit: AuditInfo,
    #[serde(default)]
    pub line_items: Vec<OrderPodLineItem>,
}

impl OrderPod {
    pub fn new(
        id: PodId,
        order_id: RequisitionId,
        facility_id: FacilityId,
        program_id: ProgramId,
        period_id: PeriodId,
    ) -> Self {
        Self {
            id,
            order_id,
            facility_id,
            program_id,
            period_id,
            received_date: None,
            audit: AuditInfo::default(),
            line_items: Vec::new(),
        }
    }

    /// Attach a line to this POD, stamping it with the POD id.
    pub fn add_line_item(&mut self, mut item: OrderPodLineItem) {
        item.pod_id = Some(self.id);
        self.line_items.push(item);
    }

    /// Validate every line in order; reports the index of the first bad line.
    pub fn validate(&self) -> Result<(), (usize, PodValidationError)> {
        for (idx, item) in self.line_items.iter().enumerate() {
            if let Err(err) = item.validate() {
                debug!(pod_id = %self.id, line = idx, error = err.message_key(), "rejected POD line item");
                return Err((idx, err));
            }
        }
        Ok(())
    }
}

impl Entity for OrderPod {
    type Id = PodId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
