//! Linkpage Core Library
//!
//! Error taxonomy, input validation and the port traits (storage, payments)
//! that the server wires together.

// Re-export pure types from linkpage-types
pub use linkpage_types::*;

pub mod error;
pub mod ports;
pub mod validation;

pub use error::{LinkpageError, Result};
pub use ports::{ClientSecret, EntityCounts, PaymentProvider, Storage};
