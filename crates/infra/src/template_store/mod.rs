//! Storage adapters for requisition template columns.

pub mod in_memory;

pub use in_memory::InMemoryRnrColumnStore;
