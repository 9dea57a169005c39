use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use lmis_core::{DomainError, DomainResult, Entity, PeriodId};

/// A reporting period (e.g. "Jan 2013") that a requisition covers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingPeriod {
    pub id: PeriodId,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl ProcessingPeriod {
    pub fn new(
        id: PeriodId,
        name: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> DomainResult<Self> {
        if end_date < start_date {
            return Err(DomainError::validation("period end date precedes start date"));
        }
        Ok(Self {
            id,
            name: name.into(),
            start_date,
            end_date,
        })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

impl Entity for ProcessingPeriod {
    type Id = PeriodId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn rejects_inverted_dates() {
        let err = ProcessingPeriod::new(PeriodId::new(1), "Jan", date(2013, 1, 31), date(2013, 1, 1))
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn contains_is_inclusive() {
        let period =
            ProcessingPeriod::new(PeriodId::new(1), "Jan", date(2013, 1, 1), date(2013, 1, 31)).unwrap();
        assert!(period.contains(date(2013, 1, 1)));
        assert!(period.contains(date(2013, 1, 31)));
        assert!(!period.contains(date(2013, 2, 1)));
    }
}
