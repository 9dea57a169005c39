//! Infrastructure layer: storage adapters and configuration.

pub mod config;
pub mod template_store;


pub use config::TemplateStoreConfig;
pub use template_store::InMemoryRnrColumnStore;
