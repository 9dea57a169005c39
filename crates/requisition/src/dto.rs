//! Requisition views.
//!
//! Each screen has its own field contract and its own entry point. Views are
//! sparse: a field an entry point does not own stays `None` and is omitted when
//! serialized.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use lmis_core::{FacilityId, ProgramId, RequisitionId};

use crate::rnr::{Rnr, RnrLineItem};

/// Flattened requisition view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RnrDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RequisitionId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program_id: Option<ProgramId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facility_id: Option<FacilityId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facility_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facility_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_code: Option<String>,
    #[serde(default)]
    pub emergency: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period_start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period_end_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplying_depot_name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub products: Vec<RnrLineItemDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl RnrDto {
    /// Approval list rows: base fields plus supplying depot name. No status.
    pub fn prepare_for_list_approval(requisitions: &[Rnr]) -> Vec<RnrDto> {
        requisitions.iter().map(Self::with_supplying_depot).collect()
    }

    /// Detail view rows: base fields plus status. No supplying depot name.
    pub fn prepare_for_view(requisitions: &[Rnr]) -> Vec<RnrDto> {
        requisitions
            .iter()
            .map(|rnr| {
                let mut dto = Self::populate_with_requisition(rnr);
                dto.status = Some(rnr.status().as_str().to_string());
                dto
            })
            .collect()
    }

    /// Order view: base fields, supplying depot name and the period name.
    pub fn prepare_for_order_view(requisition: &Rnr) -> RnrDto {
        let mut dto = Self::with_supplying_depot(requisition);
        dto.period_name = Some(requisition.period().name.clone());
        dto
    }

    /// REST export: codes instead of names, and every line item with
    /// non-full-supply lines first.
    pub fn prepare_for_rest(rnr: &Rnr) -> RnrDto {
        RnrDto {
            id: Some(rnr.id_typed()),
            agent_code: Some(rnr.facility().code.clone()),
            program_code: Some(rnr.program().code.clone()),
            period_start_date: Some(rnr.period().start_date),
            period_end_date: Some(rnr.period().end_date),
            status: Some(rnr.status().as_str().to_string()),
            emergency: rnr.is_emergency(),
            products: rnr
                .all_line_items_for_export()
                .map(RnrLineItemDto::from)
                .collect(),
            ..RnrDto::default()
        }
    }

    fn with_supplying_depot(requisition: &Rnr) -> RnrDto {
        let mut dto = Self::populate_with_requisition(requisition);
        if let Some(depot) = requisition.supplying_depot() {
            dto.supplying_depot_name = Some(depot.name.clone());
        }
        dto
    }

    fn populate_with_requisition(requisition: &Rnr) -> RnrDto {
        let program = requisition.program();
        let facility = requisition.facility();
        let period = requisition.period();

        RnrDto {
            id: Some(requisition.id_typed()),
            program_id: Some(program.id),
            program_name: Some(program.name.clone()),
            facility_id: Some(facility.id),
            facility_code: Some(facility.code.clone()),
            facility_name: Some(facility.name.clone()),
            submitted_date: requisition.submitted_date(),
            modified_date: requisition.modified_date(),
            period_start_date: Some(period.start_date),
            period_end_date: Some(period.end_date),
            emergency: requisition.is_emergency(),
            ..RnrDto::default()
        }
    }
}

/// Line item as exported to REST consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RnrLineItemDto {
    pub product_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dispensing_unit: Option<String>,
    pub full_supply: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beginning_balance: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity_received: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity_dispensed: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock_in_hand: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity_requested: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason_for_requested_quantity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calculated_order_quantity: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity_approved: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

impl From<&RnrLineItem> for RnrLineItemDto {
    fn from(item: &RnrLineItem) -> Self {
        Self {
            product_code: item.product_code.clone(),
            product: item.product.clone(),
            dispensing_unit: item.dispensing_unit.clone(),
            full_supply: item.full_supply,
            beginning_balance: item.beginning_balance,
            quantity_received: item.quantity_received,
            quantity_dispensed: item.quantity_dispensed,
            stock_in_hand: item.stock_in_hand,
            quantity_requested: item.quantity_requested,
            reason_for_requested_quantity: item.reason_for_requested_quantity.clone(),
            calculated_order_quantity: item.calculated_order_quantity,
            quantity_approved: item.quantity_approved,
            remarks: item.remarks.clone(),
        }
    }
}
