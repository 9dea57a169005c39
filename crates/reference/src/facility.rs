use serde::{Deserialize, Serialize};

use lmis_core::{Entity, FacilityId};

/// A health facility submitting requisitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Facility {
    pub id: FacilityId,
    /// Facility code; also used as the agent code on REST exports.
    pub code: String,
    pub name: String,
}

impl Facility {
    pub fn new(id: FacilityId, code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id,
            code: code.into(),
            name: name.into(),
        }
    }
}

impl Entity for Facility {
    type Id = FacilityId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// The facility/warehouse that fulfils a requisition's order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplyingDepot {
    pub id: FacilityId,
    pub name: String,
}

impl SupplyingDepot {
    pub fn new(id: FacilityId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl From<&Facility> for SupplyingDepot {
    fn from(facility: &Facility) -> Self {
        Self::new(facility.id, facility.name.clone())
    }
}

impl Entity for SupplyingDepot {
    type Id = FacilityId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
