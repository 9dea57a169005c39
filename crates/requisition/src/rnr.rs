use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use lmis_core::{AuditInfo, DomainError, DomainResult, Entity, LineItemId, RequisitionId};
use lmis_reference::{Facility, ProcessingPeriod, Program, SupplyingDepot};

/// Requisition status lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RnrStatus {
    Initiated,
    Submitted,
    Authorized,
    InApproval,
    Approved,
    Released,
}

impl RnrStatus {
    /// Status name as exposed on views (e.g. `"IN_APPROVAL"`).
    pub fn as_str(self) -> &'static str {
        match self {
            RnrStatus::Initiated => "INITIATED",
            RnrStatus::Submitted => "SUBMITTED",
            RnrStatus::Authorized => "AUTHORIZED",
            RnrStatus::InApproval => "IN_APPROVAL",
            RnrStatus::Approved => "APPROVED",
            RnrStatus::Released => "RELEASED",
        }
    }
}

impl core::fmt::Display for RnrStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A product line on a requisition.
///
/// `full_supply` decides which partition of the requisition the line lives in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RnrLineItem {
    pub id: Option<LineItemId>,
    pub product_code: String,
    pub product: Option<String>,
    pub dispensing_unit: Option<String>,
    pub full_supply: bool,
    pub beginning_balance: Option<i32>,
    pub quantity_received: Option<i32>,
    pub quantity_dispensed: Option<i32>,
    pub stock_in_hand: Option<i32>,
    pub quantity_requested: Option<i32>,
    pub reason_for_requested_quantity: Option<String>,
    pub calculated_order_quantity: Option<i32>,
    pub quantity_approved: Option<i32>,
    pub remarks: Option<String>,
}

impl RnrLineItem {
    pub fn new(product_code: impl Into<String>, full_supply: bool) -> Self {
        Self {
            id: None,
            product_code: product_code.into(),
            product: None,
            dispensing_unit: None,
            full_supply,
            beginning_balance: None,
            quantity_received: None,
            quantity_dispensed: None,
            stock_in_hand: None,
            quantity_requested: None,
            reason_for_requested_quantity: None,
            calculated_order_quantity: None,
            quantity_approved: None,
            remarks: None,
        }
    }

    pub fn full_supply(product_code: impl Into<String>) -> Self {
        Self::new(product_code, true)
    }

    pub fn non_full_supply(product_code: impl Into<String>) -> Self {
        Self::new(product_code, false)
    }
}

/// Requisition and Report ("R&R") aggregate, as read by the view assembler.
///
/// Full-supply and non-full-supply lines are kept in two disjoint, ordered
/// partitions: a product code appears at most once across both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rnr {
    id: RequisitionId,
    program: Program,
    facility: Facility,
    period: ProcessingPeriod,
    supplying_depot: Option<SupplyingDepot>,
    emergency: bool,
    status: RnrStatus,
    submitted_date: Option<DateTime<Utc>>,
    audit: AuditInfo,
    full_supply_line_items: Vec<RnrLineItem>,
    non_full_supply_line_items: Vec<RnrLineItem>,
}

impl Rnr {
    pub fn new(
        id: RequisitionId,
        program: Program,
        facility: Facility,
        period: ProcessingPeriod,
        status: RnrStatus,
    ) -> Self {
        Self {
            id,
            program,
            facility,
            period,
            supplying_depot: None,
            emergency: false,
            status,
            submitted_date: None,
            audit: AuditInfo::default(),
            full_supply_line_items: Vec::new(),
            non_full_supply_line_items: Vec::new(),
        }
    }

    pub fn with_supplying_depot(mut self, depot: SupplyingDepot) -> Self {
        self.supplying_depot = Some(depot);
        self
    }

    pub fn with_emergency(mut self, emergency: bool) -> Self {
        self.emergency = emergency;
        self
    }

    pub fn with_submitted_date(mut self, submitted_date: DateTime<Utc>) -> Self {
        self.submitted_date = Some(submitted_date);
        self
    }

    pub fn with_audit(mut self, audit: AuditInfo) -> Self {
        self.audit = audit;
        self
    }

    /// Add a line to the partition matching its `full_supply` flag.
    pub fn add_line_item(&mut self, item: RnrLineItem) -> DomainResult<()> {
        if item.product_code.trim().is_empty() {
            return Err(DomainError::validation("line item product code cannot be empty"));
        }
        if self.line_item(&item.product_code).is_some() {
            return Err(DomainError::invariant(format!(
                "product {} already present on requisition {}",
                item.product_code, self.id
            )));
        }

        if item.full_supply {
            self.full_supply_line_items.push(item);
        } else {
            self.non_full_supply_line_items.push(item);
        }
        Ok(())
    }

    pub fn with_line_items(mut self, items: impl IntoIterator<Item = RnrLineItem>) -> DomainResult<Self> {
        for item in items {
            self.add_line_item(item)?;
        }
        Ok(self)
    }

    pub fn id_typed(&self) -> RequisitionId {
        self.id
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn facility(&self) -> &Facility {
        &self.facility
    }

    pub fn period(&self) -> &ProcessingPeriod {
        &self.period
    }

    pub fn supplying_depot(&self) -> Option<&SupplyingDepot> {
        self.supplying_depot.as_ref()
    }

    pub fn is_emergency(&self) -> bool {
        self.emergency
    }

    pub fn status(&self) -> RnrStatus {
        self.status
    }

    pub fn submitted_date(&self) -> Option<DateTime<Utc>> {
        self.submitted_date
    }

    pub fn modified_date(&self) -> Option<DateTime<Utc>> {
        self.audit.modified_date
    }

    pub fn audit(&self) -> &AuditInfo {
        &self.audit
    }

    pub fn full_supply_line_items(&self) -> &[RnrLineItem] {
        &self.full_supply_line_items
    }

    pub fn non_full_supply_line_items(&self) -> &[RnrLineItem] {
        &self.non_full_supply_line_items
    }

    pub fn line_item(&self, product_code: &str) -> Option<&RnrLineItem> {
        self.full_supply_line_items
            .iter()
            .chain(&self.non_full_supply_line_items)
            .find(|li| li.product_code == product_code)
    }

    /// All lines in export order: non-full-supply first, then full-supply,
    /// each partition in its own order.
    pub fn all_line_items_for_export(&self) -> impl Iterator<Item = &RnrLineItem> {
        self.non_full_supply_line_items
            .iter()
            .chain(&self.full_supply_line_items)
    }
}

impl Entity for Rnr {
    type Id = RequisitionId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
