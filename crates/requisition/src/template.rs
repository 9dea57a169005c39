//! Requisition template resolution.
//!
//! A program uses its own column set once one has been stored for it; until then
//! it falls back to the master set. The switch is sticky: a program that has a
//! stored template never falls back again, even if its own set is empty.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info};

use lmis_core::ProgramId;

use crate::column::{RnrColumn, RnrTemplate};

/// Storage port for template columns.
///
/// Fetches may return `None` for "nothing stored"; the service normalizes that
/// to an empty sequence.
pub trait RnrColumnStore: Send + Sync {
    /// Whether the program has its own template.
    fn has_program_template(&self, program_id: ProgramId) -> Result<bool, TemplateStoreError>;

    /// The master (program-independent) column set, in order.
    fn fetch_master_columns(&self) -> Result<Option<Vec<RnrColumn>>, TemplateStoreError>;

    /// The program's own column set, in order.
    fn fetch_program_columns(
        &self,
        program_id: ProgramId,
    ) -> Result<Option<Vec<RnrColumn>>, TemplateStoreError>;

    /// Persist the program's column set in one operation.
    ///
    /// Returns the number of columns written. Implementations must make this a
    /// create-if-absent: re-inserting identical columns succeeds, inserting a
    /// different set for a program that already has one is a
    /// [`TemplateStoreError::Conflict`].
    fn insert_program_columns(
        &self,
        program_id: ProgramId,
        columns: &[RnrColumn],
    ) -> Result<usize, TemplateStoreError>;
}

impl<S> RnrColumnStore for Arc<S>
where
    S: RnrColumnStore + ?Sized,
{
    fn has_program_template(&self, program_id: ProgramId) -> Result<bool, TemplateStoreError> {
        (**self).has_program_template(program_id)
    }

    fn fetch_master_columns(&self) -> Result<Option<Vec<RnrColumn>>, TemplateStoreError> {
        (**self).fetch_master_columns()
    }

    fn fetch_program_columns(
        &self,
        program_id: ProgramId,
    ) -> Result<Option<Vec<RnrColumn>>, TemplateStoreError> {
        (**self).fetch_program_columns(program_id)
    }

    fn insert_program_columns(
        &self,
        program_id: ProgramId,
        columns: &[RnrColumn],
    ) -> Result<usize, TemplateStoreError> {
        (**self).insert_program_columns(program_id, columns)
    }
}

/// Template store operation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateStoreError {
    #[error("storage error: {0}")]
    Storage(String),

    #[error("program {0} already has a different template")]
    Conflict(ProgramId),
}

/// Error returned by [`RnrTemplateService`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error(transparent)]
    Store(#[from] TemplateStoreError),

    #[error("template for program {program_id} partially written ({written} of {expected} columns)")]
    PartialWrite {
        program_id: ProgramId,
        written: usize,
        expected: usize,
    },
}

/// Resolves and creates per-program requisition templates.
#[derive(Debug, Clone)]
pub struct RnrTemplateService<S> {
    store: S,
}

impl<S> RnrTemplateService<S>
where
    S: RnrColumnStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Columns for the program: its own set if it has one, the master set otherwise.
    ///
    /// Never fails for lack of data; an absent set resolves to an empty one.
    /// Store failures are returned as-is.
    pub fn fetch_all_columns(&self, program_id: ProgramId) -> Result<Vec<RnrColumn>, TemplateError> {
        let (tier, columns) = if self.store.has_program_template(program_id)? {
            ("program", self.store.fetch_program_columns(program_id)?)
        } else {
            ("master", self.store.fetch_master_columns()?)
        };

        let columns = columns.unwrap_or_default();
        debug!(
            program_id = %program_id,
            tier,
            columns = columns.len(),
            "resolved requisition template"
        );
        Ok(columns)
    }

    pub fn fetch_template(&self, program_id: ProgramId) -> Result<RnrTemplate, TemplateError> {
        self.fetch_all_columns(program_id).map(RnrTemplate::new)
    }

    /// Store `columns` as the program's own template.
    ///
    /// Columns are taken as already validated.
    pub fn create_template_for_program(
        &self,
        program_id: ProgramId,
        columns: Vec<RnrColumn>,
    ) -> Result<(), TemplateError> {
        let expected = columns.len();
        let written = self.store.insert_program_columns(program_id, &columns)?;
        if written != expected {
            return Err(TemplateError::PartialWrite {
                program_id,
                written,
                expected,
            });
        }

        info!(program_id = %program_id, columns = written, "created program requisition template");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    use proptest::prelude::*;

    use crate::column::ColumnSource;

    /// Minimal store for exercising the service in isolation.
    #[derive(Default)]
    struct FakeStore {
        master: Option<Vec<RnrColumn>>,
        programs: Mutex<HashMap<ProgramId, Option<Vec<RnrColumn>>>>,
        fail_with: Option<TemplateStoreError>,
        short_write: bool,
    }

    impl FakeStore {
        fn with_master(master: Option<Vec<RnrColumn>>) -> Self {
            Self {
                master,
                ..Self::default()
            }
        }

        fn define(&self, program_id: ProgramId, columns: Option<Vec<RnrColumn>>) {
            self.programs.lock().unwrap().insert(program_id, columns);
        }

        fn check(&self) -> Result<(), TemplateStoreError> {
            match &self.fail_with {
                Some(err) => Err(err.clone()),
                None => Ok(()),
            }
        }
    }

    impl RnrColumnStore for FakeStore {
        fn has_program_template(&self, program_id: ProgramId) -> Result<bool, TemplateStoreError> {
            self.check()?;
            Ok(self.programs.lock().unwrap().contains_key(&program_id))
        }

        fn fetch_master_columns(&self) -> Result<Option<Vec<RnrColumn>>, TemplateStoreError> {
            self.check()?;
            Ok(self.master.clone())
        }

        fn fetch_program_columns(
            &self,
            program_id: ProgramId,
        ) -> Result<Option<Vec<RnrColumn>>, TemplateStoreError> {
            self.check()?;
            Ok(self.programs.lock().unwrap().get(&program_id).cloned().flatten())
        }

        fn insert_program_columns(
            &self,
            program_id: ProgramId,
            columns: &[RnrColumn],
        ) -> Result<usize, TemplateStoreError> {
            self.check()?;
            let kept = if self.short_write && !columns.is_empty() {
                &columns[..columns.len() - 1]
            } else {
                columns
            };
            self.define(program_id, Some(kept.to_vec()));
            Ok(kept.len())
        }
    }

    fn col(name: &str, position: u32) -> RnrColumn {
        RnrColumn::new(name, name.to_uppercase(), name, position, ColumnSource::UserInput)
    }

    fn program(id: i64) -> ProgramId {
        ProgramId::new(id)
    }

    #[test]
    fn undefined_program_falls_back_to_master() {
        let master = vec![col("a", 1), col("b", 2), col("c", 3)];
        let service = RnrTemplateService::new(FakeStore::with_master(Some(master.clone())));

        assert_eq!(service.fetch_all_columns(program(7)).unwrap(), master);
    }

    #[test]
    fn defined_program_uses_its_own_columns() {
        let store = FakeStore::with_master(Some(vec![col("a", 1)]));
        store.define(program(1), Some(vec![col("d", 1), col("e", 2)]));
        let service = RnrTemplateService::new(store);

        let names: Vec<String> = service
            .fetch_all_columns(program(1))
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["d", "e"]);
    }

    #[test]
    fn emptied_program_template_does_not_fall_back() {
        let store = FakeStore::with_master(Some(vec![col("a", 1)]));
        store.define(program(1), Some(vec![]));
        let service = RnrTemplateService::new(store);

        assert!(service.fetch_all_columns(program(1)).unwrap().is_empty());
    }

    #[test]
    fn absent_sets_normalize_to_empty() {
        let store = FakeStore::with_master(None);
        store.define(program(2), None);
        let service = RnrTemplateService::new(store);

        assert!(service.fetch_all_columns(program(1)).unwrap().is_empty());
        assert!(service.fetch_all_columns(program(2)).unwrap().is_empty());
        assert!(!service.fetch_template(program(1)).unwrap().is_configured());
    }

    #[test]
    fn store_failure_is_not_masked_as_empty_template() {
        let store = FakeStore {
            fail_with: Some(TemplateStoreError::Storage("connection reset".to_string())),
            ..FakeStore::default()
        };
        let service = RnrTemplateService::new(store);

        let err = service.fetch_all_columns(program(1)).unwrap_err();
        assert_eq!(
            err,
            TemplateError::Store(TemplateStoreError::Storage("connection reset".to_string()))
        );

        let err = service
            .create_template_for_program(program(1), vec![col("a", 1)])
            .unwrap_err();
        assert!(matches!(err, TemplateError::Store(TemplateStoreError::Storage(_))));
    }

    #[test]
    fn partial_write_surfaces_as_failure() {
        let store = FakeStore {
            short_write: true,
            ..FakeStore::default()
        };
        let service = RnrTemplateService::new(store);

        let err = service
            .create_template_for_program(program(3), vec![col("a", 1), col("b", 2)])
            .unwrap_err();
        assert_eq!(
            err,
            TemplateError::PartialWrite {
                program_id: program(3),
                written: 1,
                expected: 2,
            }
        );
    }

    #[test]
    fn created_template_replaces_master_for_that_program_only() {
        let master = vec![col("a", 1), col("b", 2), col("c", 3)];
        let service = RnrTemplateService::new(FakeStore::with_master(Some(master.clone())));

        assert_eq!(service.fetch_all_columns(program(7)).unwrap(), master);

        service
            .create_template_for_program(program(7), vec![col("d", 1)])
            .unwrap();

        assert_eq!(service.fetch_all_columns(program(7)).unwrap(), vec![col("d", 1)]);
        assert_eq!(service.fetch_all_columns(program(8)).unwrap(), master);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 128,
            ..ProptestConfig::default()
        })]

        /// Property: an undefined program always sees the master set in master order.
        #[test]
        fn fallback_preserves_master_order(
            names in prop::collection::vec("[a-z]{1,8}", 0..12),
            program_id in 1i64..10_000
        ) {
            let master: Vec<RnrColumn> = names
                .iter()
                .enumerate()
                .map(|(i, n)| col(n, i as u32 + 1))
                .collect();
            let service = RnrTemplateService::new(FakeStore::with_master(Some(master.clone())));

            prop_assert_eq!(service.fetch_all_columns(program(program_id)).unwrap(), master);
        }

        /// Property: create followed by fetch returns the created columns unchanged.
        #[test]
        fn create_then_fetch_round_trips(
            names in prop::collection::vec("[a-z]{1,8}", 0..12),
            program_id in 1i64..10_000
        ) {
            let columns: Vec<RnrColumn> = names
                .iter()
                .enumerate()
                .map(|(i, n)| col(n, i as u32 + 1))
                .collect();
            let service = RnrTemplateService::new(FakeStore::with_master(Some(vec![col("master", 1)])));

            service.create_template_for_program(program(program_id), columns.clone()).unwrap();
            prop_assert_eq!(service.fetch_all_columns(program(program_id)).unwrap(), columns);
        }
    }
}
