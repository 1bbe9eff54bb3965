//! Strongly-typed ID types for catalog and booking records.
//!
//! All IDs use ULID format and display with a short type prefix
//! (`itm_01HZ...`), which is also how they are stored in the database.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ulid::Ulid;

/// Error returned when parsing an ID from a string fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError {
    /// The type of ID that failed to parse.
    pub id_type: &'static str,
    /// The reason for the parse failure.
    pub reason: String,
}

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse {}: {}", self.id_type, self.reason)
    }
}

impl std::error::Error for ParseIdError {}

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident, $prefix:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(Ulid);

        impl $name {
            /// Creates a new ID with a randomly generated ULID.
            #[must_use]
            pub fn new() -> Self {
                Self(Ulid::new())
            }

            /// Creates an ID from a ULID.
            #[must_use]
            pub const fn from_ulid(ulid: Ulid) -> Self {
                Self(ulid)
            }

            /// Returns the underlying ULID.
            #[must_use]
            pub const fn as_ulid(&self) -> Ulid {
                self.0
            }

            /// Returns the display and storage prefix.
            #[must_use]
            pub const fn prefix() -> &'static str {
                $prefix
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}_{}", $prefix, self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                let raw = s.strip_prefix(concat!($prefix, "_")).unwrap_or(s);

                Ulid::from_str(raw)
                    .map(Self)
                    .map_err(|e| ParseIdError {
                        id_type: stringify!($name),
                        reason: e.to_string(),
                    })
            }
        }

        // Serialized in the prefixed form so ids round-trip through
        // browser storage and URLs unchanged.
        impl Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                s.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

define_id!(
    /// Unique identifier for a rentable equipment item.
    ItemId,
    "itm"
);

define_id!(
    /// Unique identifier for a room.
    RoomId,
    "room"
);

define_id!(
    /// Unique identifier for a booking.
    BookingId,
    "bkg"
);

define_id!(
    /// Unique identifier for a message sent through the contact form.
    ContactMessageId,
    "msg"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_prefix() {
        assert!(ItemId::new().to_string().starts_with("itm_"));
        assert!(RoomId::new().to_string().starts_with("room_"));
        assert!(BookingId::new().to_string().starts_with("bkg_"));
    }

    #[test]
    fn parse_with_prefix() {
        let id = ItemId::new();
        let parsed: ItemId = id.to_string().parse().expect("should parse");
        assert_eq!(id, parsed);
    }

    #[test]
    fn parse_without_prefix() {
        let ulid = Ulid::new();
        let id: RoomId = ulid.to_string().parse().expect("should parse");
        assert_eq!(id.as_ulid(), ulid);
    }

    #[test]
    fn parse_rejects_other_prefix() {
        let item = ItemId::new();
        let result: Result<RoomId, _> = item.to_string().parse();
        let err = result.expect_err("item id is not a room id");
        assert_eq!(err.id_type, "RoomId");
    }

    #[test]
    fn serializes_as_prefixed_string() {
        let id = ItemId::new();
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, format!("\"{id}\""));
        let back: ItemId = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, id);
    }
}
