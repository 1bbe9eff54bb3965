//! The browser-local cart of tentative equipment rentals.
//!
//! The cart lives in the guest's browser storage as a JSON array of
//! `{item, booking}` pairs and is only written by the tab the guest is
//! using. Nothing is reserved until checkout turns it into bookings.

use crate::booking::{Booking, BookingError, GuestContact, MAX_RENTAL_DAYS};
use crate::catalog::{Category, Item};
use crate::dates::DateRange;
use crate::error::Result;
use crate::id::ItemId;
use crate::pricing::{Money, rental_total};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Browser storage key holding the cart.
pub const CART_STORAGE_KEY: &str = "CartBooking";

/// Errors from reading or changing the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartError {
    /// Stored cart data could not be decoded.
    Corrupt { reason: String },
    /// The cart could not be encoded for storage.
    Encode { reason: String },
    /// No entry at the given position.
    NoSuchEntry { index: usize, len: usize },
}

impl fmt::Display for CartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Corrupt { reason } => write!(f, "cart data is corrupt: {reason}"),
            Self::Encode { reason } => write!(f, "failed to encode cart: {reason}"),
            Self::NoSuchEntry { index, len } => {
                write!(f, "no cart entry at position {index} (cart has {len})")
            }
        }
    }
}

impl std::error::Error for CartError {}

/// Snapshot of an item taken when it was added to the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub categories: Vec<Category>,
    /// Price per day at the time the snapshot was taken.
    pub price: Money,
    #[serde(default)]
    pub image: Option<String>,
}

impl From<&Item> for CartItem {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            categories: item.categories.clone(),
            price: item.price,
            image: item.image.clone(),
        }
    }
}

/// One item rented for one date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartEntry {
    pub item: CartItem,
    pub booking: DateRange,
}

impl CartEntry {
    #[must_use]
    pub fn new(item: CartItem, booking: DateRange) -> Self {
        Self { item, booking }
    }

    #[must_use]
    pub fn rental_days(&self) -> u32 {
        self.booking.rental_days()
    }

    /// Price for this entry. `None` on overflow.
    #[must_use]
    pub fn subtotal(&self) -> Option<Money> {
        rental_total(self.item.price, self.rental_days())
    }

    fn same_selection(&self, other: &CartEntry) -> bool {
        self.item.id == other.item.id && self.booking == other.booking
    }
}

/// Ordered list of cart entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry. Selecting the same item for the same dates again
    /// replaces the earlier entry and moves it to the end.
    pub fn add(&mut self, entry: CartEntry) {
        self.entries.retain(|e| !e.same_selection(&entry));
        self.entries.push(entry);
    }

    /// Removes and returns the entry at `index`.
    pub fn remove(&mut self, index: usize) -> std::result::Result<CartEntry, CartError> {
        if index >= self.entries.len() {
            return Err(CartError::NoSuchEntry {
                index,
                len: self.entries.len(),
            });
        }
        Ok(self.entries.remove(index))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all subtotals. `None` on overflow.
    #[must_use]
    pub fn total(&self) -> Option<Money> {
        self.entries
            .iter()
            .try_fold(0, |acc: Money, e| acc.checked_add(e.subtotal()?))
    }

    /// Replaces every item snapshot with current catalog data.
    ///
    /// Returns the id of the first item `lookup` no longer knows about.
    pub fn refresh_items<F>(&mut self, mut lookup: F) -> std::result::Result<(), ItemId>
    where
        F: FnMut(ItemId) -> Option<CartItem>,
    {
        for entry in &mut self.entries {
            entry.item = lookup(entry.item.id).ok_or(entry.item.id)?;
        }
        Ok(())
    }

    /// Encodes the cart for browser storage.
    pub fn to_json(&self) -> Result<String, CartError> {
        serde_json::to_string(self).map_err(|e| {
            CartError::Encode {
                reason: e.to_string(),
            }
            .into()
        })
    }

    /// Decodes a stored cart. Blank input is an empty cart.
    pub fn from_json(data: &str) -> Result<Self, CartError> {
        if data.trim().is_empty() {
            return Ok(Self::new());
        }
        serde_json::from_str(data).map_err(|e| {
            CartError::Corrupt {
                reason: e.to_string(),
            }
            .into()
        })
    }
}

/// Contact fields of the cart checkout form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutForm {
    pub full_name: String,
    pub email: String,
}

/// One booking to be created at checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutLine {
    pub item_name: String,
    pub booking: Booking,
}

/// A validated checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutRequest {
    pub contact: GuestContact,
    pub lines: Vec<CheckoutLine>,
    pub total: Money,
}

impl CheckoutForm {
    /// Validates the form and the cart it checks out.
    ///
    /// The cart comes from browser storage, so every entry is checked
    /// again: no rental may start before `today` or run longer than
    /// [`MAX_RENTAL_DAYS`]. Two entries for the same item with overlapping
    /// dates would book the item twice, so they are rejected too.
    pub fn validate(
        &self,
        cart: &Cart,
        today: NaiveDate,
    ) -> std::result::Result<CheckoutRequest, BookingError> {
        if cart.is_empty() {
            return Err(BookingError::EmptyCart);
        }
        let contact = GuestContact::parse(&self.full_name, &self.email, "")?;

        let entries = cart.entries();
        for entry in entries {
            if entry.booking.check_in < today {
                return Err(BookingError::CheckInInPast);
            }
            if entry.rental_days() > MAX_RENTAL_DAYS {
                return Err(BookingError::RentalTooLong {
                    item: entry.item.name.clone(),
                    max: MAX_RENTAL_DAYS,
                });
            }
        }
        for (i, a) in entries.iter().enumerate() {
            let clash = entries[i + 1..]
                .iter()
                .any(|b| a.item.id == b.item.id && a.booking.overlaps(&b.booking));
            if clash {
                return Err(BookingError::DatesUnavailable {
                    item: a.item.name.clone(),
                });
            }
        }

        let total = cart.total().ok_or(BookingError::PriceOverflow)?;
        let lines = entries
            .iter()
            .map(|entry| {
                let subtotal = entry.subtotal().ok_or(BookingError::PriceOverflow)?;
                Ok(CheckoutLine {
                    item_name: entry.item.name.clone(),
                    booking: Booking::for_item(entry.item.id, contact.clone(), entry.booking, subtotal),
                })
            })
            .collect::<std::result::Result<Vec<_>, BookingError>>()?;

        Ok(CheckoutRequest {
            contact,
            lines,
            total,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::{BookingStatus, BookingTarget};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn kayak() -> CartItem {
        CartItem {
            id: ItemId::new(),
            name: "Sit-on-top Kayak".to_string(),
            categories: vec![Category::WaterSports],
            price: 800,
            image: None,
        }
    }

    fn tent() -> CartItem {
        CartItem {
            id: ItemId::new(),
            name: "4-Person Tent".to_string(),
            categories: vec![Category::Camping, Category::Hiking],
            price: 450,
            image: Some("/images/tent.jpg".to_string()),
        }
    }

    fn today() -> NaiveDate {
        date(2026, 11, 1)
    }

    fn range(a: u32, b: u32) -> DateRange {
        DateRange::new(date(2026, 11, a), date(2026, 11, b))
    }

    #[test]
    fn add_replaces_identical_selection() {
        let kayak = kayak();
        let mut cart = Cart::new();
        cart.add(CartEntry::new(kayak.clone(), range(3, 5)));
        cart.add(CartEntry::new(tent(), range(3, 5)));
        cart.add(CartEntry::new(kayak.clone(), range(3, 5)));

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.entries()[1].item.id, kayak.id);
    }

    #[test]
    fn same_item_on_other_dates_is_a_new_entry() {
        let kayak = kayak();
        let mut cart = Cart::new();
        cart.add(CartEntry::new(kayak.clone(), range(3, 5)));
        cart.add(CartEntry::new(kayak, range(10, 11)));
        assert_eq!(cart.len(), 2);
    }

    #[test]
    fn totals_charge_per_rental_day() {
        let mut cart = Cart::new();
        cart.add(CartEntry::new(kayak(), range(3, 5)));
        cart.add(CartEntry::new(tent(), range(8, 8)));
        assert_eq!(cart.entries()[0].rental_days(), 3);
        assert_eq!(cart.entries()[0].subtotal(), Some(2400));
        assert_eq!(cart.total(), Some(2850));
    }

    #[test]
    fn remove_out_of_range_is_an_error() {
        let mut cart = Cart::new();
        cart.add(CartEntry::new(kayak(), range(3, 5)));
        assert_eq!(
            cart.remove(1),
            Err(CartError::NoSuchEntry { index: 1, len: 1 })
        );
        assert!(cart.remove(0).is_ok());
        assert!(cart.is_empty());
    }

    #[test]
    fn json_matches_stored_layout() {
        let mut cart = Cart::new();
        let tent = tent();
        cart.add(CartEntry::new(tent.clone(), range(3, 5)));
        let json = cart.to_json().expect("encode");

        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        let first = &value[0];
        assert_eq!(first["item"]["id"], tent.id.to_string());
        assert_eq!(first["item"]["categories"][1], "hiking");
        assert_eq!(first["booking"]["check_in"], "2026-11-03");
        assert_eq!(first["booking"]["check_out"], "2026-11-05");

        assert_eq!(Cart::from_json(&json).expect("decode"), cart);
    }

    #[test]
    fn blank_storage_is_an_empty_cart() {
        assert!(Cart::from_json("").expect("decode").is_empty());
        assert!(Cart::from_json("  \n").expect("decode").is_empty());
        assert!(Cart::from_json("[]").expect("decode").is_empty());
    }

    #[test]
    fn malformed_storage_is_corrupt() {
        assert!(Cart::from_json("{not json").is_err());
        assert!(Cart::from_json(r#"[{"item": 3}]"#).is_err());
    }

    #[test]
    fn refresh_items_reprices_and_reports_missing() {
        let kayak = kayak();
        let mut cart = Cart::new();
        cart.add(CartEntry::new(kayak.clone(), range(3, 5)));

        let mut current = kayak.clone();
        current.price = 900;
        cart.refresh_items(|id| (id == kayak.id).then(|| current.clone()))
            .expect("all items known");
        assert_eq!(cart.entries()[0].item.price, 900);

        let missing = cart.refresh_items(|_| None);
        assert_eq!(missing, Err(kayak.id));
    }

    #[test]
    fn checkout_builds_pending_item_bookings() {
        let kayak = kayak();
        let mut cart = Cart::new();
        cart.add(CartEntry::new(kayak.clone(), range(3, 5)));
        cart.add(CartEntry::new(tent(), range(3, 4)));

        let form = CheckoutForm {
            full_name: "Maria Santos".to_string(),
            email: "maria@example.com".to_string(),
        };
        let request = form.validate(&cart, today()).expect("valid checkout");
        assert_eq!(request.lines.len(), 2);
        assert_eq!(request.total, 2400 + 900);

        let first = &request.lines[0].booking;
        assert_eq!(first.target, BookingTarget::Item(kayak.id));
        assert_eq!(first.status, BookingStatus::Pending);
        assert_eq!(first.total_price, 2400);
        assert_eq!(first.contact.full_name, "Maria Santos");
    }

    #[test]
    fn checkout_requires_items_and_contact() {
        let form = CheckoutForm {
            full_name: "Maria Santos".to_string(),
            email: "maria@example.com".to_string(),
        };
        assert_eq!(form.validate(&Cart::new(), today()), Err(BookingError::EmptyCart));

        let mut cart = Cart::new();
        cart.add(CartEntry::new(kayak(), range(3, 5)));
        let nameless = CheckoutForm {
            full_name: "  ".to_string(),
            ..form
        };
        assert_eq!(
            nameless.validate(&cart, today()),
            Err(BookingError::MissingField { field: "Full name" })
        );
    }

    #[test]
    fn checkout_rejects_overlapping_entries_for_one_item() {
        let kayak = kayak();
        let mut cart = Cart::new();
        cart.add(CartEntry::new(kayak.clone(), range(3, 5)));
        cart.add(CartEntry::new(kayak, range(5, 7)));

        let form = CheckoutForm {
            full_name: "Maria Santos".to_string(),
            email: "maria@example.com".to_string(),
        };
        assert_eq!(
            form.validate(&cart, today()),
            Err(BookingError::DatesUnavailable {
                item: "Sit-on-top Kayak".to_string()
            })
        );
    }

    #[test]
    fn checkout_rejects_bad_email() {
        let mut cart = Cart::new();
        cart.add(CartEntry::new(kayak(), range(3, 5)));

        let form = CheckoutForm {
            full_name: "Maria Santos".to_string(),
            email: "maria.example.com".to_string(),
        };
        assert_eq!(form.validate(&cart, today()), Err(BookingError::InvalidEmail));
    }

    #[test]
    fn checkout_rejects_rentals_that_already_started() {
        let mut cart = Cart::new();
        cart.add(CartEntry::new(
            kayak(),
            DateRange::new(date(2020, 1, 1), date(2020, 1, 3)),
        ));
        cart.add(CartEntry::new(tent(), range(3, 4)));

        let form = CheckoutForm {
            full_name: "Maria Santos".to_string(),
            email: "maria@example.com".to_string(),
        };
        assert_eq!(form.validate(&cart, today()), Err(BookingError::CheckInInPast));

        // Starting today is fine.
        let mut cart = Cart::new();
        cart.add(CartEntry::new(kayak(), DateRange::single(today())));
        assert!(form.validate(&cart, today()).is_ok());
    }

    #[test]
    fn checkout_caps_rental_length() {
        let form = CheckoutForm {
            full_name: "Maria Santos".to_string(),
            email: "maria@example.com".to_string(),
        };

        let mut cart = Cart::new();
        cart.add(CartEntry::new(
            kayak(),
            DateRange::new(date(2026, 11, 1), date(9999, 12, 31)),
        ));
        assert_eq!(
            form.validate(&cart, today()),
            Err(BookingError::RentalTooLong {
                item: "Sit-on-top Kayak".to_string(),
                max: MAX_RENTAL_DAYS,
            })
        );

        let longest = DateRange::new(date(2026, 11, 1), date(2026, 11, 30));
        assert_eq!(longest.rental_days(), MAX_RENTAL_DAYS);
        let mut cart = Cart::new();
        cart.add(CartEntry::new(kayak(), longest));
        assert!(form.validate(&cart, today()).is_ok());
    }
}
