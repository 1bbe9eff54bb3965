//! Core domain types and booking rules for the Makaya BNB site.
//!
//! This crate is shared by the server and the WASM client, so it stays free
//! of any web framework or database code. It covers:
//!
//! - **Catalog**: rentable items, rooms, and the fixed activity categories
//! - **Dates and availability**: stay ranges, blocked-date expansion, and the
//!   calendar's range picker
//! - **Bookings**: guest contact details and booking form validation
//! - **Cart**: the browser-local list of tentative rentals awaiting checkout

pub mod availability;
pub mod booking;
pub mod cart;
pub mod catalog;
pub mod contact;
pub mod dates;
pub mod error;
pub mod id;
pub mod pricing;

pub use availability::{
    DayState, MonthGrid, RangeSelection, Refusal, SelectionOutcome, blocked_dates, is_range_free,
};
pub use booking::{
    Booking, BookingError, BookingStatus, BookingTarget, GuestContact, MAX_GUESTS_PER_BOOKING,
    MAX_RENTAL_DAYS, RoomBookingForm, RoomBookingRequest,
};
pub use cart::{
    CART_STORAGE_KEY, Cart, CartEntry, CartError, CartItem, CheckoutForm, CheckoutLine,
    CheckoutRequest,
};
pub use catalog::{Category, CategorySummary, GuestFilter, Item, Room, RoomSort, filter_rooms};
pub use contact::{ContactError, ContactForm, ContactMessage};
pub use dates::{DateRange, format_date, parse_date};
pub use error::Result;
pub use id::{BookingId, ContactMessageId, ItemId, ParseIdError, RoomId};
pub use pricing::{Money, format_price};
