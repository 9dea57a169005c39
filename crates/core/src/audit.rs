//! Audit stamp embedded by entities that track who changed them and when.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::UserId;
use crate::value_object::ValueObject;

/// Creation/modification audit information.
///
/// Entities hold this by composition instead of inheriting audit columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditInfo {
    pub created_by: Option<UserId>,
    pub created_date: Option<DateTime<Utc>>,
    pub modified_by: Option<UserId>,
    pub modified_date: Option<DateTime<Utc>>,
}

impl ValueObject for AuditInfo {}

impl AuditInfo {
    /// Audit stamp for a freshly created record (creator is also the last modifier).
    pub fn created(by: UserId, at: DateTime<Utc>) -> Self {
        Self {
            created_by: Some(by),
            created_date: Some(at),
            modified_by: Some(by),
            modified_date: Some(at),
        }
    }

    /// Returns a copy stamped with a new modifier.
    pub fn modified(&self, by: UserId, at: DateTime<Utc>) -> Self {
        Self {
            modified_by: Some(by),
            modified_date: Some(at),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modified_keeps_creation_stamp() {
        let created_at = Utc::now();
        let audit = AuditInfo::created(UserId::new(1), created_at);
        let later = created_at + chrono::Duration::minutes(5);

        let updated = audit.modified(UserId::new(2), later);
        assert_eq!(updated.created_by, Some(UserId::new(1)));
        assert_eq!(updated.created_date, Some(created_at));
        assert_eq!(updated.modified_by, Some(UserId::new(2)));
        assert_eq!(updated.modified_date, Some(later));
    }
}
