use serde::{Deserialize, Serialize};

use lmis_core::{Entity, ProgramId};

/// A health program (e.g. "HIV") that requisitions are raised against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    pub id: ProgramId,
    pub code: String,
    pub name: String,
}

impl Program {
    pub fn new(id: ProgramId, code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id,
            code: code.into(),
            name: name.into(),
        }
    }
}

impl Entity for Program {
    type Id = ProgramId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
