//! Rentable items, rooms, and activity categories.

use crate::id::{ItemId, RoomId};
use crate::pricing::Money;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fixed classification of equipment by activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Camping,
    WaterSports,
    Cycling,
    Hiking,
    WinterSports,
    Climbing,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 6] = [
        Category::Camping,
        Category::WaterSports,
        Category::Cycling,
        Category::Hiking,
        Category::WinterSports,
        Category::Climbing,
    ];

    /// URL slug, also the value stored in the database.
    #[must_use]
    pub const fn slug(&self) -> &'static str {
        match self {
            Self::Camping => "camping",
            Self::WaterSports => "water-sports",
            Self::Cycling => "cycling",
            Self::Hiking => "hiking",
            Self::WinterSports => "winter-sports",
            Self::Climbing => "climbing",
        }
    }

    /// Human-readable name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Camping => "Camping",
            Self::WaterSports => "Water Sports",
            Self::Cycling => "Cycling",
            Self::Hiking => "Hiking",
            Self::WinterSports => "Winter Sports",
            Self::Climbing => "Climbing",
        }
    }

    /// One-line blurb for the activity tiles.
    #[must_use]
    pub const fn tagline(&self) -> &'static str {
        match self {
            Self::Camping => "Tents, sleeping bags, and camp kitchens",
            Self::WaterSports => "Kayaks, paddle boards, and snorkel sets",
            Self::Cycling => "Mountain, road, and city bikes",
            Self::Hiking => "Packs, poles, and trail essentials",
            Self::WinterSports => "Skis, snowboards, and cold-weather gear",
            Self::Climbing => "Harnesses, ropes, and bouldering pads",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned for an unknown category slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCategoryError {
    pub slug: String,
}

impl fmt::Display for ParseCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category '{}'", self.slug)
    }
}

impl std::error::Error for ParseCategoryError {}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let slug = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.slug().eq_ignore_ascii_case(slug))
            .ok_or_else(|| ParseCategoryError {
                slug: slug.to_string(),
            })
    }
}

/// A rentable piece of equipment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    pub image: Option<String>,
    /// Rental price per day.
    pub price: Money,
    pub categories: Vec<Category>,
    pub created_at: DateTime<Utc>,
}

/// A room available for overnight stays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub description: String,
    /// Price per night.
    pub price: Money,
    pub max_guests: u32,
    pub images: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// A category with the number of items listed in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub category: Category,
    pub item_count: u32,
}

/// Guest-capacity filter on the rooms page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GuestFilter {
    #[default]
    All,
    AtLeast(u32),
}

impl GuestFilter {
    /// Options offered by the filter control as `(value, label)`.
    pub const OPTIONS: [(&'static str, &'static str); 6] = [
        ("all", "All rooms"),
        ("1", "1+ guests"),
        ("2", "2+ guests"),
        ("3", "3+ guests"),
        ("4", "4+ guests"),
        ("5", "5+ guests"),
    ];

    /// Parses a form value. Anything that is not a positive number means `All`.
    #[must_use]
    pub fn from_param(value: &str) -> Self {
        match value.trim().parse::<u32>() {
            Ok(n) if n > 0 => Self::AtLeast(n),
            _ => Self::All,
        }
    }

    /// The form value for this filter.
    #[must_use]
    pub fn as_param(&self) -> String {
        match self {
            Self::All => "all".to_string(),
            Self::AtLeast(n) => n.to_string(),
        }
    }

    #[must_use]
    pub fn matches(&self, room: &Room) -> bool {
        match self {
            Self::All => true,
            Self::AtLeast(n) => room.max_guests >= *n,
        }
    }
}

/// Sort order on the rooms page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RoomSort {
    #[default]
    Name,
    PriceLowToHigh,
    PriceHighToLow,
    /// Largest capacity first.
    MaxGuests,
}

impl RoomSort {
    /// Options offered by the sort control as `(value, label)`.
    pub const OPTIONS: [(&'static str, &'static str); 4] = [
        ("name", "Name"),
        ("price-low", "Price: Low to High"),
        ("price-high", "Price: High to Low"),
        ("guests", "Max Guests"),
    ];

    /// Parses a form value, falling back to `Name`.
    #[must_use]
    pub fn from_param(value: &str) -> Self {
        match value.trim() {
            "price-low" => Self::PriceLowToHigh,
            "price-high" => Self::PriceHighToLow,
            "guests" => Self::MaxGuests,
            _ => Self::Name,
        }
    }

    /// The form value for this sort order.
    #[must_use]
    pub const fn as_param(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::PriceLowToHigh => "price-low",
            Self::PriceHighToLow => "price-high",
            Self::MaxGuests => "guests",
        }
    }
}

/// Filters and sorts rooms for display.
///
/// Rooms that compare equal under `sort` stay in name order.
#[must_use]
pub fn filter_rooms(rooms: &[Room], filter: GuestFilter, sort: RoomSort) -> Vec<Room> {
    let mut shown: Vec<Room> = rooms.iter().filter(|r| filter.matches(r)).cloned().collect();
    shown.sort_by(|a, b| a.name.cmp(&b.name));
    match sort {
        RoomSort::Name => {}
        RoomSort::PriceLowToHigh => shown.sort_by_key(|r| r.price),
        RoomSort::PriceHighToLow => shown.sort_by_key(|r| std::cmp::Reverse(r.price)),
        RoomSort::MaxGuests => shown.sort_by_key(|r| std::cmp::Reverse(r.max_guests)),
    }
    shown
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(name: &str, price: Money, max_guests: u32) -> Room {
        Room {
            id: RoomId::new(),
            name: name.to_string(),
            description: String::new(),
            price,
            max_guests,
            images: Vec::new(),
            created_at: Utc::now(),
        }
    }

    fn names(rooms: &[Room]) -> Vec<&str> {
        rooms.iter().map(|r| r.name.as_str()).collect()
    }

    fn sample() -> Vec<Room> {
        vec![
            room("Studio Unit", 1500, 2),
            room("2BR Premium Suite", 3500, 5),
            room("1BR Condo", 2500, 3),
            room("Loft", 2500, 2),
        ]
    }

    #[test]
    fn category_slug_roundtrip() {
        for category in Category::ALL {
            assert_eq!(category.slug().parse::<Category>(), Ok(category));
        }
        assert_eq!("Water-Sports".parse::<Category>(), Ok(Category::WaterSports));
    }

    #[test]
    fn unknown_category_is_rejected() {
        let err = "skydiving".parse::<Category>().expect_err("not a category");
        assert_eq!(err.slug, "skydiving");
    }

    #[test]
    fn category_serializes_as_slug() {
        let json = serde_json::to_string(&Category::WinterSports).expect("serialize");
        assert_eq!(json, "\"winter-sports\"");
    }

    #[test]
    fn guest_filter_parses_form_values() {
        assert_eq!(GuestFilter::from_param("all"), GuestFilter::All);
        assert_eq!(GuestFilter::from_param("3"), GuestFilter::AtLeast(3));
        assert_eq!(GuestFilter::from_param("0"), GuestFilter::All);
        assert_eq!(GuestFilter::from_param("lots"), GuestFilter::All);
        assert_eq!(GuestFilter::AtLeast(4).as_param(), "4");
    }

    #[test]
    fn default_sort_is_by_name() {
        let shown = filter_rooms(&sample(), GuestFilter::All, RoomSort::Name);
        assert_eq!(
            names(&shown),
            vec!["1BR Condo", "2BR Premium Suite", "Loft", "Studio Unit"]
        );
    }

    #[test]
    fn guest_filter_keeps_rooms_with_enough_capacity() {
        let shown = filter_rooms(&sample(), GuestFilter::AtLeast(3), RoomSort::Name);
        assert_eq!(names(&shown), vec!["1BR Condo", "2BR Premium Suite"]);

        let none = filter_rooms(&sample(), GuestFilter::AtLeast(6), RoomSort::Name);
        assert!(none.is_empty());
    }

    #[test]
    fn price_sorts_break_ties_by_name() {
        let low = filter_rooms(&sample(), GuestFilter::All, RoomSort::PriceLowToHigh);
        assert_eq!(
            names(&low),
            vec!["Studio Unit", "1BR Condo", "Loft", "2BR Premium Suite"]
        );

        let high = filter_rooms(&sample(), GuestFilter::All, RoomSort::PriceHighToLow);
        assert_eq!(
            names(&high),
            vec!["2BR Premium Suite", "1BR Condo", "Loft", "Studio Unit"]
        );
    }

    #[test]
    fn capacity_sort_is_descending() {
        let shown = filter_rooms(&sample(), GuestFilter::All, RoomSort::MaxGuests);
        assert_eq!(
            names(&shown),
            vec!["2BR Premium Suite", "1BR Condo", "Loft", "Studio Unit"]
        );
    }

    #[test]
    fn unknown_sort_falls_back_to_name() {
        assert_eq!(RoomSort::from_param("popularity"), RoomSort::Name);
        assert_eq!(RoomSort::from_param("price-high"), RoomSort::PriceHighToLow);
    }
}
