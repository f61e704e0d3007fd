//! Booking core for the `booking` CLI
//!
//! The testable heart of the crate is a pair of pure functions: the pricing
//! calculator ([`pricing::calculate_total_price`] / [`pricing::quote_stay`]) and
//! the booking validator ([`validation::validate_booking_form`]). Everything else
//! is configuration and presentation around them.

pub mod config;
pub mod error;
pub mod logging;
pub mod pricing;
pub mod validation;

// Re-export key types for convenience
pub use config::RateTable;
pub use error::{BookingError, Result};
pub use pricing::{calculate_total_price, quote_stay, Quote, RoomType};
pub use validation::{validate_booking_form, BookingRequest, MAX_GUESTS, MIN_GUESTS};
