//! Repository for room bookings and equipment rentals.

use makaya_core::{Booking, BookingTarget, DateRange, ItemId};
use sqlx::{FromRow, PgExecutor, PgPool};
use std::collections::BTreeSet;

/// Row type for booked date ranges.
#[derive(FromRow)]
struct RangeRow {
    check_in: chrono::NaiveDate,
    check_out: chrono::NaiveDate,
}

/// Result of trying to book a set of items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemBookingOutcome {
    /// Every booking was written.
    Created,
    /// An item was booked by someone else for an overlapping range.
    Conflict { item_id: ItemId },
    /// An item no longer exists.
    MissingItem { item_id: ItemId },
}

/// Repository for booking operations.
pub struct BookingRepository {
    pool: PgPool,
}

impl BookingRepository {
    /// Creates a new repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Lists the date ranges of an item's active bookings.
    ///
    /// Cancelled bookings are left out because they do not block dates.
    pub async fn ranges_for_item(&self, item_id: ItemId) -> Result<Vec<DateRange>, sqlx::Error> {
        let rows: Vec<RangeRow> = sqlx::query_as(
            r#"
            SELECT check_in, check_out
            FROM bookings
            WHERE item_id = $1 AND status <> 'cancelled'
            ORDER BY check_in
            "#,
        )
        .bind(item_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| DateRange::new(r.check_in, r.check_out))
            .collect())
    }

    /// Stores a room booking.
    pub async fn create_room_booking(&self, booking: &Booking) -> Result<(), sqlx::Error> {
        insert_booking(&self.pool, booking).await
    }

    /// Stores a set of item bookings atomically.
    ///
    /// The booked item rows are locked for the duration of the transaction
    /// and availability is checked again under the lock. If any item is
    /// missing or already taken, nothing is written.
    pub async fn create_item_bookings(
        &self,
        bookings: &[Booking],
    ) -> Result<ItemBookingOutcome, sqlx::Error> {
        let item_ids: BTreeSet<ItemId> = bookings
            .iter()
            .filter_map(|b| match b.target {
                BookingTarget::Item(id) => Some(id),
                BookingTarget::Room(_) => None,
            })
            .collect();
        let id_strings: Vec<String> = item_ids.iter().map(|id| id.to_string()).collect();

        let mut tx = self.pool.begin().await?;

        // Lock in a stable order so concurrent checkouts cannot deadlock.
        let locked: Vec<String> = sqlx::query_scalar(
            r#"
            SELECT id
            FROM items
            WHERE id = ANY($1)
            ORDER BY id
            FOR UPDATE
            "#,
        )
        .bind(&id_strings)
        .fetch_all(&mut *tx)
        .await?;

        if let Some(missing) = item_ids
            .iter()
            .find(|id| !locked.contains(&id.to_string()))
        {
            return Ok(ItemBookingOutcome::MissingItem { item_id: *missing });
        }

        for booking in bookings {
            let BookingTarget::Item(item_id) = booking.target else {
                continue;
            };

            let taken: bool = sqlx::query_scalar(
                r#"
                SELECT EXISTS(
                    SELECT 1
                    FROM bookings
                    WHERE item_id = $1
                      AND status <> 'cancelled'
                      AND check_in <= $3
                      AND check_out >= $2
                )
                "#,
            )
            .bind(item_id.to_string())
            .bind(booking.stay.check_in)
            .bind(booking.stay.check_out)
            .fetch_one(&mut *tx)
            .await?;

            if taken {
                return Ok(ItemBookingOutcome::Conflict { item_id });
            }

            insert_booking(&mut *tx, booking).await?;
        }

        tx.commit().await?;
        Ok(ItemBookingOutcome::Created)
    }
}

async fn insert_booking<'e, E>(executor: E, booking: &Booking) -> Result<(), sqlx::Error>
where
    E: PgExecutor<'e>,
{
    let (room_id, item_id) = match booking.target {
        BookingTarget::Room(id) => (Some(id.to_string()), None),
        BookingTarget::Item(id) => (None, Some(id.to_string())),
    };
    let guests = booking.guests.and_then(|g| i32::try_from(g).ok());

    sqlx::query(
        r#"
        INSERT INTO bookings (
            id, room_id, item_id, full_name, email, phone, guests,
            special_requests, check_in, check_out, total_price, status, created_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
        "#,
    )
    .bind(booking.id.to_string())
    .bind(room_id)
    .bind(item_id)
    .bind(&booking.contact.full_name)
    .bind(&booking.contact.email)
    .bind(&booking.contact.phone)
    .bind(guests)
    .bind(&booking.special_requests)
    .bind(booking.stay.check_in)
    .bind(booking.stay.check_out)
    .bind(booking.total_price)
    .bind(booking.status.as_str())
    .bind(booking.created_at)
    .execute(executor)
    .await?;

    Ok(())
}
