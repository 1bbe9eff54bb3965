//! Bookings and the validation of booking forms.

use crate::catalog::Room;
use crate::dates::{DateRange, parse_date};
use crate::id::{BookingId, ItemId, RoomId};
use crate::pricing::{Money, room_total};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Largest party a single booking can be made for.
pub const MAX_GUESTS_PER_BOOKING: u32 = 6;

/// Longest equipment rental, in days, accepted at checkout.
pub const MAX_RENTAL_DAYS: u32 = 30;

/// Errors from validating or placing a booking.
///
/// The `Display` text is shown to guests as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    /// A required field was left empty.
    MissingField { field: &'static str },
    /// A date field could not be parsed.
    InvalidDate { field: &'static str, value: String },
    /// The email address is not plausible.
    InvalidEmail,
    /// Check-in is before today.
    CheckInInPast,
    /// Check-out is not after check-in.
    EmptyStay,
    /// The guest count could not be parsed or is zero.
    InvalidGuestCount { value: String },
    /// More guests than the room or the site allows.
    TooManyGuests { requested: u32, max: u32 },
    /// An equipment rental is longer than [`MAX_RENTAL_DAYS`].
    RentalTooLong { item: String, max: u32 },
    /// Some requested dates are already booked.
    DatesUnavailable { item: String },
    /// Checkout was attempted with nothing in the cart.
    EmptyCart,
    /// The total price does not fit in the price type.
    PriceOverflow,
}

impl fmt::Display for BookingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField { field } => write!(f, "{field} is required"),
            Self::InvalidDate { field, value } => {
                write!(f, "{field} '{value}' is not a valid date")
            }
            Self::InvalidEmail => write!(f, "please enter a valid email address"),
            Self::CheckInInPast => write!(f, "check-in cannot be in the past"),
            Self::EmptyStay => write!(f, "check-out must be after check-in"),
            Self::InvalidGuestCount { value } => {
                write!(f, "'{value}' is not a valid number of guests")
            }
            Self::TooManyGuests { requested, max } => {
                write!(f, "{requested} guests requested but at most {max} are allowed")
            }
            Self::RentalTooLong { item, max } => {
                write!(f, "{item} can be rented for at most {max} days")
            }
            Self::DatesUnavailable { item } => {
                write!(f, "{item} is already booked for some of the selected dates")
            }
            Self::EmptyCart => write!(f, "your cart is empty"),
            Self::PriceOverflow => write!(f, "the booking total is too large"),
        }
    }
}

impl std::error::Error for BookingError {}

/// Lifecycle of a booking request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
}

impl BookingStatus {
    /// Value stored in the database.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Whether bookings in this state hold their dates.
    #[must_use]
    pub const fn blocks_dates(&self) -> bool {
        !matches!(self, Self::Cancelled)
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(format!("unknown booking status '{other}'")),
        }
    }
}

/// What is being booked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "id", rename_all = "snake_case")]
pub enum BookingTarget {
    Room(RoomId),
    Item(ItemId),
}

/// Contact details of the guest making a booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestContact {
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
}

impl GuestContact {
    /// Validates and trims raw contact fields. Name and email are required.
    pub fn parse(full_name: &str, email: &str, phone: &str) -> Result<Self, BookingError> {
        let full_name = required("Full name", full_name)?;
        let email = required("Email", email)?;
        if !is_plausible_email(&email) {
            return Err(BookingError::InvalidEmail);
        }
        Ok(Self {
            full_name,
            email,
            phone: optional(phone),
        })
    }
}

/// Returns true for `something@something` without whitespace.
#[must_use]
pub fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

pub(crate) fn required(field: &'static str, value: &str) -> Result<String, BookingError> {
    let value = value.trim();
    if value.is_empty() {
        Err(BookingError::MissingField { field })
    } else {
        Ok(value.to_string())
    }
}

pub(crate) fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Raw input of the room booking page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomBookingForm {
    pub room_id: String,
    pub check_in: String,
    pub check_out: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub guests: String,
    pub special_requests: String,
}

impl RoomBookingForm {
    /// Whether every required field has a value.
    ///
    /// Used to enable the submit button; `validate` does the real checks.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        [
            &self.room_id,
            &self.check_in,
            &self.check_out,
            &self.full_name,
            &self.email,
            &self.phone,
            &self.guests,
        ]
        .iter()
        .all(|v| !v.trim().is_empty())
    }

    /// Nights between the entered dates, or 0 while they are missing,
    /// unparsable, or out of order.
    #[must_use]
    pub fn nights(&self) -> u32 {
        match (parse_date(&self.check_in), parse_date(&self.check_out)) {
            (Ok(check_in), Ok(check_out)) if check_out > check_in => {
                DateRange::new(check_in, check_out).nights()
            }
            _ => 0,
        }
    }

    /// Validates the form against the chosen room.
    pub fn validate(&self, room: &Room, today: NaiveDate) -> Result<RoomBookingRequest, BookingError> {
        required("Room", &self.room_id)?;
        let check_in_raw = required("Check-in", &self.check_in)?;
        let check_out_raw = required("Check-out", &self.check_out)?;
        let full_name = required("Full name", &self.full_name)?;
        let email = required("Email", &self.email)?;
        let phone = required("Phone", &self.phone)?;
        let guests_raw = required("Number of guests", &self.guests)?;

        let contact = GuestContact::parse(&full_name, &email, &phone)?;

        let check_in = parse_date(&check_in_raw).map_err(|_| BookingError::InvalidDate {
            field: "Check-in",
            value: check_in_raw.clone(),
        })?;
        let check_out = parse_date(&check_out_raw).map_err(|_| BookingError::InvalidDate {
            field: "Check-out",
            value: check_out_raw.clone(),
        })?;
        if check_in < today {
            return Err(BookingError::CheckInInPast);
        }
        if check_out <= check_in {
            return Err(BookingError::EmptyStay);
        }
        let stay = DateRange::new(check_in, check_out);

        let guests = match guests_raw.parse::<u32>() {
            Ok(n) if n > 0 => n,
            _ => return Err(BookingError::InvalidGuestCount { value: guests_raw }),
        };
        let max = room.max_guests.min(MAX_GUESTS_PER_BOOKING);
        if guests > max {
            return Err(BookingError::TooManyGuests {
                requested: guests,
                max,
            });
        }

        let total_price = room_total(room.price, stay.nights()).ok_or(BookingError::PriceOverflow)?;

        Ok(RoomBookingRequest {
            room_id: room.id,
            contact,
            guests,
            stay,
            total_price,
            special_requests: optional(&self.special_requests),
        })
    }
}

/// A validated room booking, ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomBookingRequest {
    pub room_id: RoomId,
    pub contact: GuestContact,
    pub guests: u32,
    pub stay: DateRange,
    pub total_price: Money,
    pub special_requests: Option<String>,
}

/// A booking record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: BookingId,
    pub target: BookingTarget,
    pub contact: GuestContact,
    pub guests: Option<u32>,
    pub stay: DateRange,
    pub total_price: Money,
    pub status: BookingStatus,
    pub special_requests: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// Creates a pending booking for a validated room request.
    #[must_use]
    pub fn for_room(request: RoomBookingRequest) -> Self {
        Self {
            id: BookingId::new(),
            target: BookingTarget::Room(request.room_id),
            contact: request.contact,
            guests: Some(request.guests),
            stay: request.stay,
            total_price: request.total_price,
            status: BookingStatus::Pending,
            special_requests: request.special_requests,
            created_at: Utc::now(),
        }
    }

    /// Creates a pending equipment rental booking.
    #[must_use]
    pub fn for_item(item_id: ItemId, contact: GuestContact, stay: DateRange, total_price: Money) -> Self {
        Self {
            id: BookingId::new(),
            target: BookingTarget::Item(item_id),
            contact,
            guests: None,
            stay,
            total_price,
            status: BookingStatus::Pending,
            special_requests: None,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn condo() -> Room {
        Room {
            id: RoomId::new(),
            name: "1BR Condo".to_string(),
            description: "Spacious one-bedroom with city view".to_string(),
            price: 2500,
            max_guests: 3,
            images: Vec::new(),
            created_at: Utc::now(),
        }
    }

    fn form(room: &Room) -> RoomBookingForm {
        RoomBookingForm {
            room_id: room.id.to_string(),
            check_in: "2026-11-02".to_string(),
            check_out: "2026-11-05".to_string(),
            full_name: " Juan dela Cruz ".to_string(),
            email: "juan@example.com".to_string(),
            phone: "+63 912 345 6789".to_string(),
            guests: "2".to_string(),
            special_requests: "   ".to_string(),
        }
    }

    fn today() -> NaiveDate {
        date(2026, 10, 18)
    }

    #[test]
    fn valid_form_computes_total() {
        let room = condo();
        let request = form(&room).validate(&room, today()).expect("valid");
        assert_eq!(request.room_id, room.id);
        assert_eq!(request.stay.nights(), 3);
        assert_eq!(request.total_price, 7500);
        assert_eq!(request.contact.full_name, "Juan dela Cruz");
        assert_eq!(request.special_requests, None);
    }

    #[test]
    fn missing_fields_are_reported_by_name() {
        let room = condo();
        let mut f = form(&room);
        f.phone = String::new();
        assert_eq!(
            f.validate(&room, today()),
            Err(BookingError::MissingField { field: "Phone" })
        );
        assert!(!f.is_complete());
    }

    #[test]
    fn check_out_must_follow_check_in() {
        let room = condo();
        let mut f = form(&room);
        f.check_out = f.check_in.clone();
        assert_eq!(f.validate(&room, today()), Err(BookingError::EmptyStay));
        assert_eq!(f.nights(), 0);
    }

    #[test]
    fn past_check_in_is_rejected() {
        let room = condo();
        let mut f = form(&room);
        f.check_in = "2026-10-17".to_string();
        assert_eq!(f.validate(&room, today()), Err(BookingError::CheckInInPast));
    }

    #[test]
    fn check_in_today_is_allowed() {
        let room = condo();
        let mut f = form(&room);
        f.check_in = "2026-10-18".to_string();
        let request = f.validate(&room, today()).expect("valid");
        assert_eq!(request.stay.nights(), 18);
    }

    #[test]
    fn guests_are_capped_by_room_capacity() {
        let room = condo();
        let mut f = form(&room);
        f.guests = "4".to_string();
        assert_eq!(
            f.validate(&room, today()),
            Err(BookingError::TooManyGuests {
                requested: 4,
                max: 3
            })
        );

        f.guests = "zero".to_string();
        assert!(matches!(
            f.validate(&room, today()),
            Err(BookingError::InvalidGuestCount { .. })
        ));
    }

    #[test]
    fn unparsable_dates_are_rejected() {
        let room = condo();
        let mut f = form(&room);
        f.check_out = "next week".to_string();
        assert_eq!(
            f.validate(&room, today()),
            Err(BookingError::InvalidDate {
                field: "Check-out",
                value: "next week".to_string()
            })
        );
    }

    #[test]
    fn nights_follow_the_entered_dates() {
        let room = condo();
        let mut f = form(&room);
        assert_eq!(f.nights(), 3);
        f.check_out = String::new();
        assert_eq!(f.nights(), 0);
    }

    #[test]
    fn contact_requires_plausible_email() {
        assert_eq!(
            GuestContact::parse("Ana", "ana.example.com", ""),
            Err(BookingError::InvalidEmail)
        );
        assert_eq!(
            GuestContact::parse("Ana", "", ""),
            Err(BookingError::MissingField { field: "Email" })
        );
        let contact = GuestContact::parse("Ana", "ana@example.com", "").expect("valid");
        assert_eq!(contact.phone, None);
    }

    #[test]
    fn email_plausibility() {
        assert!(is_plausible_email("a@b"));
        assert!(!is_plausible_email("@b"));
        assert!(!is_plausible_email("a@"));
        assert!(!is_plausible_email("a@b@c"));
        assert!(!is_plausible_email("a b@c"));
    }

    #[test]
    fn status_roundtrips_through_text() {
        for status in [
            BookingStatus::Pending,
            BookingStatus::Confirmed,
            BookingStatus::Cancelled,
        ] {
            assert_eq!(status.as_str().parse::<BookingStatus>(), Ok(status));
        }
        assert!(!BookingStatus::Cancelled.blocks_dates());
        assert!(BookingStatus::Pending.blocks_dates());
    }

    #[test]
    fn room_booking_starts_pending() {
        let room = condo();
        let request = form(&room).validate(&room, today()).expect("valid");
        let booking = Booking::for_room(request);
        assert_eq!(booking.status, BookingStatus::Pending);
        assert_eq!(booking.target, BookingTarget::Room(room.id));
        assert_eq!(booking.guests, Some(2));
    }
}
