//! Configuration loading and representation.

use std::path::PathBuf;

/// Environment variable naming a JSON file with the master template columns.
pub const MASTER_TEMPLATE_ENV: &str = "LMIS_MASTER_TEMPLATE";

/// Template store configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateStoreConfig {
    /// JSON array of columns seeding the master set. `None` leaves it absent.
    pub master_template_path: Option<PathBuf>,
}

impl TemplateStoreConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup (tests, layered config).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let master_template_path = lookup(MASTER_TEMPLATE_ENV)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        Self {
            master_template_path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_master_template_path() {
        let config = TemplateStoreConfig::from_lookup(|key| {
            (key == MASTER_TEMPLATE_ENV).then(|| "/etc/lmis/master.json".to_string())
        });
        assert_eq!(
            config.master_template_path,
            Some(PathBuf::from("/etc/lmis/master.json"))
        );
    }

    #[test]
    fn blank_value_means_unset() {
        let config = TemplateStoreConfig::from_lookup(|_| Some("  ".to_string()));
        assert_eq!(config, TemplateStoreConfig::default());
    }
}
