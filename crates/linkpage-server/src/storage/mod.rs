//! Storage layer
//!
//! Everything lives in process memory (DashMap). Restarting the server
//! drops all records and re-seeds the demo profile.

pub mod entity_store;
pub mod memory;
pub mod seed;

pub use entity_store::{Collection, EntityStore};
pub use memory::MemStorage;
