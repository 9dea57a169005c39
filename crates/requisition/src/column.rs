use serde::{Deserialize, Serialize};

use lmis_core::{ColumnId, ValueObject};

/// Where the value of a requisition column comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnSource {
    /// Entered by the user on the form.
    #[serde(rename = "U")]
    UserInput,
    /// Derived from other columns.
    #[serde(rename = "C")]
    Calculated,
    /// Pulled from reference data (e.g. product name).
    #[serde(rename = "R")]
    Reference,
}

impl ColumnSource {
    pub fn code(self) -> &'static str {
        match self {
            ColumnSource::UserInput => "U",
            ColumnSource::Calculated => "C",
            ColumnSource::Reference => "R",
        }
    }
}

/// A data-entry column of the requisition form.
///
/// Which program a column belongs to is decided by where it is stored (master
/// set or a program's own set), not by the column itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RnrColumn {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ColumnId>,
    pub name: String,
    pub label: String,
    pub indicator: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub position: u32,
    pub source: ColumnSource,
    pub visible: bool,
    #[serde(default)]
    pub mandatory: bool,
    #[serde(default)]
    pub formula_validation_required: bool,
}

impl ValueObject for RnrColumn {}

impl RnrColumn {
    /// A visible, non-mandatory column.
    pub fn new(
        name: impl Into<String>,
        label: impl Into<String>,
        indicator: impl Into<String>,
        position: u32,
        source: ColumnSource,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            label: label.into(),
            indicator: indicator.into(),
            description: None,
            position,
            source,
            visible: true,
            mandatory: false,
            formula_validation_required: false,
        }
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    pub fn mandatory(mut self) -> Self {
        self.mandatory = true;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

/// Ordered column set resolved for a program.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RnrTemplate {
    columns: Vec<RnrColumn>,
}

impl RnrTemplate {
    pub fn new(columns: Vec<RnrColumn>) -> Self {
        Self { columns }
    }

    /// `false` when no column is defined; the form shows "template not configured".
    pub fn is_configured(&self) -> bool {
        !self.columns.is_empty()
    }

    pub fn columns(&self) -> &[RnrColumn] {
        &self.columns
    }

    pub fn into_columns(self) -> Vec<RnrColumn> {
        self.columns
    }

    /// Visible columns, in template order.
    pub fn visible_columns(&self) -> impl Iterator<Item = &RnrColumn> {
        self.columns.iter().filter(|c| c.visible)
    }

    pub fn column(&self, name: &str) -> Option<&RnrColumn> {
        self.columns.iter().find(|c| c.name == name)
    }
}
