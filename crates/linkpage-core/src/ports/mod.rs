//! Port traits (interfaces) for dependency injection

pub mod payment;
pub mod storage;

pub use payment::{ClientSecret, PaymentProvider};
pub use storage::{EntityCounts, Storage};
