//! Repository for rooms.

use super::invalid_data;
use chrono::{DateTime, Utc};
use makaya_core::{Room, RoomId};
use sqlx::{FromRow, PgPool};
use std::str::FromStr;

/// Row type for room queries.
#[derive(FromRow)]
struct RoomRow {
    id: String,
    name: String,
    description: String,
    price: i64,
    max_guests: i32,
    images: Vec<String>,
    created_at: DateTime<Utc>,
}

impl RoomRow {
    fn try_into_room(self) -> Result<Room, sqlx::Error> {
        let id = RoomId::from_str(&self.id)
            .map_err(|e| invalid_data(format!("invalid room id '{}': {}", self.id, e)))?;
        let max_guests = u32::try_from(self.max_guests).map_err(|_| {
            invalid_data(format!(
                "room '{}' has invalid max_guests {}",
                self.id, self.max_guests
            ))
        })?;

        Ok(Room {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            max_guests,
            images: self.images,
            created_at: self.created_at,
        })
    }
}

/// Repository for room operations.
pub struct RoomRepository {
    pool: PgPool,
}

impl RoomRepository {
    /// Creates a new repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Lists all rooms, cheapest first.
    pub async fn list_all(&self) -> Result<Vec<Room>, sqlx::Error> {
        let rows: Vec<RoomRow> = sqlx::query_as(
            r#"
            SELECT id, name, description, price, max_guests, images, created_at
            FROM rooms
            ORDER BY price ASC, name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(|r| r.try_into_room()).collect()
    }

    /// Finds a room by ID.
    pub async fn find_by_id(&self, id: RoomId) -> Result<Option<Room>, sqlx::Error> {
        let row: Option<RoomRow> = sqlx::query_as(
            r#"
            SELECT id, name, description, price, max_guests, images, created_at
            FROM rooms
            WHERE id = $1
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.try_into_room()).transpose()
    }
}
