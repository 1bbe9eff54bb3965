//! Database repositories for the booking site.
//!
//! This module provides data access for:
//! - Rentable items and their categories
//! - Rooms
//! - Bookings for rooms and items
//! - Contact messages

pub mod booking;
pub mod contact;
pub mod item;
pub mod room;

pub use booking::{BookingRepository, ItemBookingOutcome};
pub use contact::ContactMessageRepository;
pub use item::ItemRepository;
pub use room::RoomRepository;

/// Builds the decode error returned when a stored value fails to parse.
pub(crate) fn invalid_data(message: String) -> sqlx::Error {
    sqlx::Error::Decode(Box::new(std::io::Error::new(
        std::io::ErrorKind::InvalidData,
        message,
    )))
}
