//! Business logic services

pub mod payments;
pub mod stripe;

pub use payments::{PaymentService, TipDetails};
pub use stripe::StripeClient;
