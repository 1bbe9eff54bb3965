//! Shared types used across server functions and UI components.

use chrono::NaiveDate;
use makaya_core::{Category, DateRange, Item, Money, format_price};

/// An item together with the ranges it is already booked for.
///
/// `today` is the server's date, so the calendar renders the same days as
/// past on the server and after hydration.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct ItemAvailability {
    pub item: Item,
    pub booked: Vec<DateRange>,
    pub today: NaiveDate,
}

/// The items listed under one category.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct CategoryListing {
    pub category: Category,
    pub items: Vec<Item>,
}

/// Result of a successful room booking.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct BookingConfirmation {
    pub booking_id: String,
    pub email: String,
    pub total_price: Money,
}

impl BookingConfirmation {
    pub fn message(&self) -> String {
        format!(
            "Booking successful! Your booking ID is {}. We'll send a confirmation email to {}",
            self.booking_id, self.email
        )
    }
}

/// Result of a successful cart checkout.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct CheckoutConfirmation {
    pub booking_ids: Vec<String>,
    pub total: Money,
}

impl CheckoutConfirmation {
    pub fn message(&self) -> String {
        format!(
            "Booking confirmed! You will receive a confirmation email. Total: {}",
            format_price(self.total)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booking_confirmation_names_id_and_email() {
        let confirmation = BookingConfirmation {
            booking_id: "bkg_01JBH3BV4H15G5E4G7X0NTH82F".to_string(),
            email: "maria@example.com".to_string(),
            total_price: 4500,
        };
        assert_eq!(
            confirmation.message(),
            "Booking successful! Your booking ID is bkg_01JBH3BV4H15G5E4G7X0NTH82F. \
             We'll send a confirmation email to maria@example.com"
        );
    }

    #[test]
    fn checkout_confirmation_shows_total() {
        let confirmation = CheckoutConfirmation {
            booking_ids: vec!["bkg_a".to_string(), "bkg_b".to_string()],
            total: 3300,
        };
        assert!(confirmation.message().starts_with("Booking confirmed!"));
        assert!(confirmation.message().ends_with("₱3,300"));
    }
}
