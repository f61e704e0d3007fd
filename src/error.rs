use chrono::NaiveDate;
use colored::Colorize;
use std::fmt;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BookingError>;

#[derive(Debug)]
pub enum BookingError {
    UnknownRoomType {
        room_type: String,
        known_types: Vec<String>,
    },
    MissingDate {
        field: &'static str,
    },
    InvalidDate {
        field: &'static str,
        value: String,
        source: chrono::ParseError,
    },
    InvalidDateOrder {
        check_in: NaiveDate,
        check_out: NaiveDate,
    },
    RatesFile {
        path: String,
        message: String,
    },
    IoError {
        operation: String,
        path: Option<String>,
        source: std::io::Error,
    },
    Other(anyhow::Error),
}

impl BookingError {
    pub fn unknown_room_type(room_type: impl Into<String>, known_types: Vec<String>) -> Self {
        Self::UnknownRoomType {
            room_type: room_type.into(),
            known_types,
        }
    }

    pub fn missing_date(field: &'static str) -> Self {
        Self::MissingDate { field }
    }

    pub fn invalid_date(
        field: &'static str,
        value: impl Into<String>,
        source: chrono::ParseError,
    ) -> Self {
        Self::InvalidDate {
            field,
            value: value.into(),
            source,
        }
    }

    pub fn invalid_date_order(check_in: NaiveDate, check_out: NaiveDate) -> Self {
        Self::InvalidDateOrder {
            check_in,
            check_out,
        }
    }

    pub fn rates_file(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::RatesFile {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn io_error(
        operation: impl Into<String>,
        path: Option<String>,
        source: std::io::Error,
    ) -> Self {
        Self::IoError {
            operation: operation.into(),
            path,
            source,
        }
    }
}

impl fmt::Display for BookingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownRoomType {
                room_type,
                known_types,
            } => {
                writeln!(
                    f,
                    "{} Unknown room type: {}",
                    "✗".red().bold(),
                    room_type.yellow()
                )?;
                write!(
                    f,
                    "  {} Available room types: {}",
                    "→".blue(),
                    known_types.join(", ")
                )
            }
            Self::MissingDate { field } => {
                write!(f, "{} Missing {} date", "✗".red().bold(), field.yellow())
            }
            Self::InvalidDate {
                field,
                value,
                source,
            } => {
                writeln!(
                    f,
                    "{} Invalid {} date: {}",
                    "✗".red().bold(),
                    field,
                    value.yellow()
                )?;
                writeln!(f, "  {} {}", "→".blue(), source)?;
                write!(f, "  {} Expected format: YYYY-MM-DD", "→".blue())
            }
            Self::InvalidDateOrder {
                check_in,
                check_out,
            } => {
                writeln!(
                    f,
                    "{} Check-out date must be after check-in date",
                    "✗".red().bold()
                )?;
                write!(
                    f,
                    "  {} Check-in: {}, check-out: {}",
                    "→".blue(),
                    check_in,
                    check_out
                )
            }
            Self::RatesFile { path, message } => {
                writeln!(f, "{} Invalid rate table: {}", "✗".red().bold(), message)?;
                write!(f, "  {} File: {}", "→".blue(), path.cyan())
            }
            Self::IoError {
                operation,
                path,
                source,
            } => {
                writeln!(f, "{} Failed to {}", "✗".red().bold(), operation)?;
                if let Some(path) = path {
                    writeln!(f, "  {} Path: {}", "→".blue(), path.cyan())?;
                }
                write!(f, "  {} {}", "→".blue(), source)
            }
            Self::Other(err) => write!(f, "{} {}", "✗".red().bold(), err),
        }
    }
}

impl std::error::Error for BookingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidDate { source, .. } => Some(source),
            Self::IoError { source, .. } => Some(source),
            Self::Other(err) => err.source(),
            _ => None,
        }
    }
}

impl From<anyhow::Error> for BookingError {
    fn from(err: anyhow::Error) -> Self {
        Self::Other(err)
    }
}

impl From<std::io::Error> for BookingError {
    fn from(err: std::io::Error) -> Self {
        Self::io_error("perform I/O operation", None, err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_unknown_room_type_display() {
        let err = BookingError::unknown_room_type(
            "penthouse",
            vec!["standard".into(), "deluxe".into(), "suite".into()],
        );
        let msg = err.to_string();
        assert!(msg.contains("Unknown room type"));
        assert!(msg.contains("penthouse"));
        assert!(msg.contains("standard, deluxe, suite"));
    }

    #[test]
    fn test_missing_date_display() {
        let err = BookingError::missing_date("check-in");
        assert!(err.to_string().contains("Missing check-in date"));
    }

    #[test]
    fn test_invalid_date_carries_source() {
        let parse_err = NaiveDate::parse_from_str("not-a-date", "%Y-%m-%d").unwrap_err();
        let err = BookingError::invalid_date("check-out", "not-a-date", parse_err);
        assert!(err.to_string().contains("not-a-date"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_invalid_date_order_display() {
        let err = BookingError::invalid_date_order(date("2024-06-12"), date("2024-06-10"));
        let msg = err.to_string();
        assert!(msg.contains("Check-out date must be after check-in date"));
        assert!(msg.contains("2024-06-12"));
    }

    #[test]
    fn test_rates_file_display() {
        let err = BookingError::rates_file("/tmp/rates.json", "nightly rates must be positive");
        let msg = err.to_string();
        assert!(msg.contains("rates.json"));
        assert!(msg.contains("nightly rates must be positive"));
    }
}
