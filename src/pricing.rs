//! Pricing calculator
//!
//! Pure functions that turn a room type and a pair of calendar dates into a total
//! price. Two entry points exist: `calculate_total_price` keeps the lenient
//! form-facing contract (anything unpriceable yields 0), while `quote_stay`
//! reports every failure as a typed error and rejects reversed date ranges.

use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

use crate::config::RateTable;
use crate::error::{BookingError, Result};

/// Calendar date format accepted from form input.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Accommodation category with a fixed nightly rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoomType {
    Standard,
    Deluxe,
    Suite,
}

impl RoomType {
    pub const ALL: [RoomType; 3] = [RoomType::Standard, RoomType::Deluxe, RoomType::Suite];

    /// The lowercase key used in form input and rate files.
    pub fn as_key(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Deluxe => "deluxe",
            Self::Suite => "suite",
        }
    }

    /// Human-facing label, e.g. `Deluxe Room`.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Standard => "Standard Room",
            Self::Deluxe => "Deluxe Room",
            Self::Suite => "Suite Room",
        }
    }

    pub fn known_keys() -> Vec<String> {
        Self::ALL.iter().map(|r| r.as_key().to_string()).collect()
    }
}

impl FromStr for RoomType {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "standard" => Ok(Self::Standard),
            "deluxe" => Ok(Self::Deluxe),
            "suite" => Ok(Self::Suite),
            _ => Err(BookingError::unknown_room_type(s, Self::known_keys())),
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A priced stay produced by [`quote_stay`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    pub room_type: RoomType,
    pub nights: u64,
    pub nightly_rate: u64,
    pub total: u64,
}

/// Parse a calendar date from form input. Lenient: failures become `None`.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

/// Parse a calendar date, reporting missing or malformed input as an error.
pub fn parse_date_strict(field: &'static str, value: &str) -> Result<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(BookingError::missing_date(field));
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map_err(|e| BookingError::invalid_date(field, value, e))
}

/// Whole-day distance between two dates, insensitive to argument order.
pub fn nights_between(check_in: NaiveDate, check_out: NaiveDate) -> u64 {
    check_out
        .signed_duration_since(check_in)
        .num_days()
        .unsigned_abs()
}

/// Total price for a stay, from raw form input.
///
/// Unknown room types and missing or unparseable dates all price to 0 rather
/// than failing; callers that need a distinguishable failure use [`quote_stay`].
/// The date arguments are symmetric, so a reversed range still prices — the
/// booking validator is responsible for rejecting it.
pub fn calculate_total_price(
    rates: &RateTable,
    room_type: &str,
    check_in: &str,
    check_out: &str,
) -> u64 {
    let Some(rate) = rates.rate_for_key(room_type) else {
        return 0;
    };
    let (Some(first), Some(second)) = (parse_date(check_in), parse_date(check_out)) else {
        return 0;
    };
    nights_between(first, second) * rate
}

/// Price a stay, rejecting anything [`calculate_total_price`] would silently
/// zero out. Check-out must fall strictly after check-in.
pub fn quote_stay(
    rates: &RateTable,
    room_type: &str,
    check_in: &str,
    check_out: &str,
) -> Result<Quote> {
    let room_type = room_type.parse::<RoomType>()?;
    let check_in = parse_date_strict("check-in", check_in)?;
    let check_out = parse_date_strict("check-out", check_out)?;
    if check_out <= check_in {
        return Err(BookingError::invalid_date_order(check_in, check_out));
    }

    let nightly_rate = rates.rate(room_type);
    let nights = nights_between(check_in, check_out);
    Ok(Quote {
        room_type,
        nights,
        nightly_rate,
        total: nights * nightly_rate,
    })
}
