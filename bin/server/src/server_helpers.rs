//! Helpers shared by server functions.

use leptos::prelude::*;
use sqlx::PgPool;

/// Gets the database pool from the request context.
pub fn get_db_pool() -> PgPool {
    expect_context::<PgPool>()
}

/// Today's date in the server's local time zone.
///
/// Booking validation compares check-in dates against this.
pub fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}
