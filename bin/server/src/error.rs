//! Domain error types for server operations.
//!
//! Server functions log the full error with structured fields, then convert
//! it with `into_server_error()`. Database details never reach the guest.
//! Validation failures carry their message through unchanged.

use leptos::server_fn::error::ServerFnError;
use makaya_core::{BookingError, ContactError};
use std::fmt;

/// Errors from reading the rooms and equipment catalog.
#[derive(Debug)]
pub enum CatalogError {
    /// Item or room was not found.
    NotFound { id: String },
    /// Invalid item or room ID format.
    InvalidId { id: String, reason: String },
    /// No category with this slug.
    UnknownCategory { slug: String },
    /// Date range for a search could not be parsed.
    InvalidDates { details: String },
    /// Database error while reading the catalog.
    DatabaseError { details: String },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { id } => write!(f, "catalog entry '{}' not found", id),
            Self::InvalidId { id, reason } => write!(f, "invalid id '{}': {}", id, reason),
            Self::UnknownCategory { slug } => write!(f, "unknown category '{}'", slug),
            Self::InvalidDates { details } => write!(f, "invalid search dates: {}", details),
            Self::DatabaseError { details } => write!(f, "catalog database error: {}", details),
        }
    }
}

impl CatalogError {
    /// Convert to a user-safe ServerFnError.
    pub fn into_server_error(self) -> ServerFnError {
        match &self {
            CatalogError::NotFound { .. } => ServerFnError::new("Not found"),
            CatalogError::InvalidId { .. } => ServerFnError::new("Invalid ID"),
            CatalogError::UnknownCategory { .. } => ServerFnError::new("Unknown category"),
            CatalogError::InvalidDates { .. } => {
                ServerFnError::new("Please choose a valid check-in and check-out date")
            }
            CatalogError::DatabaseError { .. } => ServerFnError::new("Database error"),
        }
    }
}

/// Errors from placing room bookings and equipment rentals.
#[derive(Debug)]
pub enum ReservationError {
    /// The booking form or cart failed validation.
    Rejected(BookingError),
    /// The room being booked does not exist.
    RoomNotFound { id: String },
    /// An item in the cart no longer exists.
    ItemNotFound { id: String },
    /// Invalid room or item ID format.
    InvalidId { id: String, reason: String },
    /// Stored cart data could not be read.
    CorruptCart { details: String },
    /// Database error while writing the booking.
    DatabaseError { details: String },
}

impl fmt::Display for ReservationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rejected(e) => write!(f, "booking rejected: {}", e),
            Self::RoomNotFound { id } => write!(f, "room '{}' not found", id),
            Self::ItemNotFound { id } => write!(f, "item '{}' not found", id),
            Self::InvalidId { id, reason } => write!(f, "invalid id '{}': {}", id, reason),
            Self::CorruptCart { details } => write!(f, "corrupt cart: {}", details),
            Self::DatabaseError { details } => {
                write!(f, "reservation database error: {}", details)
            }
        }
    }
}

impl From<BookingError> for ReservationError {
    fn from(e: BookingError) -> Self {
        Self::Rejected(e)
    }
}

impl ReservationError {
    /// Convert to a user-safe ServerFnError.
    pub fn into_server_error(self) -> ServerFnError {
        match &self {
            ReservationError::Rejected(e) => ServerFnError::new(e.to_string()),
            ReservationError::RoomNotFound { .. } => {
                ServerFnError::new("The selected room is no longer available")
            }
            ReservationError::ItemNotFound { .. } => {
                ServerFnError::new("An item in your cart is no longer available")
            }
            ReservationError::InvalidId { .. } => ServerFnError::new("Invalid ID"),
            ReservationError::CorruptCart { .. } => {
                ServerFnError::new("Your cart could not be read. Please add your items again.")
            }
            ReservationError::DatabaseError { .. } => {
                ServerFnError::new("Failed to create booking. Please try again.")
            }
        }
    }
}

/// Errors from submitting the contact form.
#[derive(Debug)]
pub enum MessageError {
    /// The form failed validation.
    Invalid(ContactError),
    /// Database error while storing the message.
    DatabaseError { details: String },
}

impl fmt::Display for MessageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid(e) => write!(f, "invalid contact message: {}", e),
            Self::DatabaseError { details } => {
                write!(f, "contact message database error: {}", details)
            }
        }
    }
}

impl MessageError {
    /// Convert to a user-safe ServerFnError.
    pub fn into_server_error(self) -> ServerFnError {
        match &self {
            MessageError::Invalid(e) => ServerFnError::new(e.to_string()),
            MessageError::DatabaseError { .. } => {
                ServerFnError::new("Failed to send your message. Please try again.")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(err: ServerFnError) -> String {
        match err {
            ServerFnError::ServerError(msg) => msg,
            other => panic!("unexpected error kind: {other:?}"),
        }
    }

    #[test]
    fn database_details_are_hidden() {
        let err = CatalogError::DatabaseError {
            details: "relation \"items\" does not exist".to_string(),
        };
        assert_eq!(message(err.into_server_error()), "Database error");

        let err = ReservationError::DatabaseError {
            details: "deadlock detected".to_string(),
        };
        assert!(!message(err.into_server_error()).contains("deadlock"));
    }

    #[test]
    fn validation_messages_reach_the_guest() {
        let err = ReservationError::from(BookingError::MissingField { field: "Email" });
        assert_eq!(message(err.into_server_error()), "Email is required");

        let err = MessageError::Invalid(ContactError::MissingField { field: "Message" });
        assert_eq!(message(err.into_server_error()), "Message is required");
    }

    #[test]
    fn display_keeps_details_for_logs() {
        let err = CatalogError::InvalidId {
            id: "itm_bogus".to_string(),
            reason: "invalid length".to_string(),
        };
        assert_eq!(err.to_string(), "invalid id 'itm_bogus': invalid length");
    }
}
