use std::collections::HashMap;
use std::sync::RwLock;

use anyhow::Context;
use tracing::debug;

use lmis_core::ProgramId;
use lmis_requisition::{RnrColumn, RnrColumnStore, TemplateStoreError};

use crate::config::TemplateStoreConfig;

#[derive(Debug, Default)]
struct Tables {
    master: Option<Vec<RnrColumn>>,
    programs: HashMap<ProgramId, Vec<RnrColumn>>,
}

/// In-memory template column store.
///
/// Intended for tests/dev. Master and program tables sit behind one lock, so
/// the existence check and the insert of a first-time template are a single
/// atomic step.
#[derive(Debug, Default)]
pub struct InMemoryRnrColumnStore {
    tables: RwLock<Tables>,
}

impl InMemoryRnrColumnStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_master_columns(columns: Vec<RnrColumn>) -> Self {
        Self {
            tables: RwLock::new(Tables {
                master: Some(columns),
                programs: HashMap::new(),
            }),
        }
    }

    /// Build a store seeded from the configured master template file, if any.
    pub fn from_config(config: &TemplateStoreConfig) -> anyhow::Result<Self> {
        let Some(path) = config.master_template_path.as_deref() else {
            return Ok(Self::new());
        };

        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading master template {}", path.display()))?;
        let columns: Vec<RnrColumn> = serde_json::from_str(&raw)
            .with_context(|| format!("parsing master template {}", path.display()))?;

        debug!(path = %path.display(), columns = columns.len(), "seeded master template");
        Ok(Self::with_master_columns(columns))
    }

    fn poisoned() -> TemplateStoreError {
        TemplateStoreError::Storage("lock poisoned".to_string())
    }
}

impl RnrColumnStore for InMemoryRnrColumnStore {
    fn has_program_template(&self, program_id: ProgramId) -> Result<bool, TemplateStoreError> {
        let tables = self.tables.read().map_err(|_| Self::poisoned())?;
        Ok(tables.programs.contains_key(&program_id))
    }

    fn fetch_master_columns(&self) -> Result<Option<Vec<RnrColumn>>, TemplateStoreError> {
        let tables = self.tables.read().map_err(|_| Self::poisoned())?;
        Ok(tables.master.clone())
    }

    fn fetch_program_columns(
        &self,
        program_id: ProgramId,
    ) -> Result<Option<Vec<RnrColumn>>, TemplateStoreError> {
        let tables = self.tables.read().map_err(|_| Self::poisoned())?;
        Ok(tables.programs.get(&program_id).cloned())
    }

    fn insert_program_columns(
        &self,
        program_id: ProgramId,
        columns: &[RnrColumn],
    ) -> Result<usize, TemplateStoreError> {
        let mut tables = self.tables.write().map_err(|_| Self::poisoned())?;

        match tables.programs.get(&program_id) {
            Some(existing) if existing.as_slice() == columns => {
                debug!(program_id = %program_id, "program template already stored");
                Ok(columns.len())
            }
            Some(_) => Err(TemplateStoreError::Conflict(program_id)),
            None => {
                tables.programs.insert(program_id, columns.to_vec());
                debug!(program_id = %program_id, columns = columns.len(), "stored program template");
                Ok(columns.len())
            }
        }
    }
}
