//! Pure validation logic for booking requests
//!
//! This module contains validation functions that can be tested in isolation
//! without requiring I/O operations or external dependencies. Each rule is a
//! standalone check; [`validate_booking_form`] aggregates them in a fixed order.

use crate::pricing::parse_date;

/// Guest count policy.
pub const MIN_GUESTS: u32 = 1;
pub const MAX_GUESTS: u32 = 4;

/// A proposed reservation, straight from form input. Transient: built per
/// submission attempt and discarded after processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    pub room_type: String,
    pub check_in: String,
    pub check_out: String,
    pub guests: u32,
}

/// Validates that check-out falls strictly after check-in.
///
/// Dates that fail to parse are skipped rather than flagged; this rule only
/// orders real calendar dates, and parse failures surface when the stay is
/// priced through the strict path.
pub fn check_date_order(check_in: &str, check_out: &str) -> std::result::Result<(), String> {
    match (parse_date(check_in), parse_date(check_out)) {
        (Some(first), Some(second)) if second <= first => {
            Err("Check-out date must be after check-in date".to_string())
        }
        _ => Ok(()),
    }
}

/// Validates the guest count against policy.
pub fn check_guest_count(guests: u32) -> std::result::Result<(), String> {
    if (MIN_GUESTS..=MAX_GUESTS).contains(&guests) {
        Ok(())
    } else {
        Err("Number of guests must be between 1 and 4".to_string())
    }
}

/// Run every booking rule over a request.
///
/// Rules are independent and always evaluated in the same order: date range
/// first, then guest count. An empty result means the request is valid. Room
/// type is deliberately not checked here; pricing owns that concern.
pub fn validate_booking_form(request: &BookingRequest) -> Vec<String> {
    let mut errors = Vec::new();

    if let Err(error) = check_date_order(&request.check_in, &request.check_out) {
        errors.push(error);
    }

    if let Err(error) = check_guest_count(request.guests) {
        errors.push(error);
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_order_accepts_forward_range() {
        assert!(check_date_order("2024-06-10", "2024-06-12").is_ok());
    }

    #[test]
    fn test_date_order_rejects_equal_dates() {
        assert!(check_date_order("2024-06-10", "2024-06-10").is_err());
    }

    #[test]
    fn test_date_order_rejects_reversed_range() {
        let err = check_date_order("2024-06-12", "2024-06-10").unwrap_err();
        assert_eq!(err, "Check-out date must be after check-in date");
    }

    #[test]
    fn test_date_order_skips_unparseable_dates() {
        assert!(check_date_order("not-a-date", "2024-06-10").is_ok());
        assert!(check_date_order("2024-06-10", "").is_ok());
        assert!(check_date_order("", "").is_ok());
    }

    #[test]
    fn test_guest_count_bounds() {
        assert!(check_guest_count(1).is_ok());
        assert!(check_guest_count(4).is_ok());
        assert!(check_guest_count(0).is_err());
        assert!(check_guest_count(5).is_err());
    }
}
