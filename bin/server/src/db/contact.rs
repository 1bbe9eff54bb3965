//! Repository for contact form messages.

use makaya_core::ContactMessage;
use sqlx::PgPool;

/// Repository for contact message operations.
pub struct ContactMessageRepository {
    pool: PgPool,
}

impl ContactMessageRepository {
    /// Creates a new repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Stores a validated message.
    pub async fn create(&self, message: &ContactMessage) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO contact_messages (id, name, email, phone, subject, message, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(message.id.to_string())
        .bind(&message.name)
        .bind(&message.email)
        .bind(&message.phone)
        .bind(&message.subject)
        .bind(&message.message)
        .bind(message.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
