//! Repository for rentable items and their categories.

use super::invalid_data;
use chrono::{DateTime, Utc};
use makaya_core::{Category, CategorySummary, DateRange, Item, ItemId};
use sqlx::{FromRow, PgPool};
use std::collections::HashMap;
use std::str::FromStr;

/// Columns selected for every item query. Categories are aggregated so
/// each item is one row.
const ITEM_SELECT: &str = r#"
    SELECT
        i.id,
        i.name,
        i.description,
        i.image,
        i.price,
        i.created_at,
        COALESCE(
            array_agg(c.category ORDER BY c.category) FILTER (WHERE c.category IS NOT NULL),
            '{}'
        ) AS categories
    FROM items i
    LEFT JOIN item_categories c ON c.item_id = i.id
"#;

/// Row type for item queries.
#[derive(FromRow)]
struct ItemRow {
    id: String,
    name: String,
    description: String,
    image: Option<String>,
    price: i64,
    created_at: DateTime<Utc>,
    categories: Vec<String>,
}

impl ItemRow {
    fn try_into_item(self) -> Result<Item, sqlx::Error> {
        let id = ItemId::from_str(&self.id)
            .map_err(|e| invalid_data(format!("invalid item id '{}': {}", self.id, e)))?;

        let mut categories = self
            .categories
            .iter()
            .map(|slug| {
                Category::from_str(slug).map_err(|e| {
                    invalid_data(format!("item '{}' has {}", self.id, e))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        categories.sort();

        Ok(Item {
            id,
            name: self.name,
            description: self.description,
            image: self.image,
            price: self.price,
            categories,
            created_at: self.created_at,
        })
    }
}

/// Row type for per-category counts.
#[derive(FromRow)]
struct CategoryCountRow {
    category: String,
    item_count: i64,
}

/// Repository for item operations.
pub struct ItemRepository {
    pool: PgPool,
}

impl ItemRepository {
    /// Creates a new repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Lists every item, ordered by name.
    pub async fn list_all(&self) -> Result<Vec<Item>, sqlx::Error> {
        let rows: Vec<ItemRow> = sqlx::query_as(&format!(
            "{ITEM_SELECT} GROUP BY i.id ORDER BY i.name"
        ))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(|r| r.try_into_item()).collect()
    }

    /// Finds an item by ID.
    pub async fn find_by_id(&self, id: ItemId) -> Result<Option<Item>, sqlx::Error> {
        let row: Option<ItemRow> = sqlx::query_as(&format!(
            "{ITEM_SELECT} WHERE i.id = $1 GROUP BY i.id"
        ))
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.try_into_item()).transpose()
    }

    /// Finds several items by ID. Unknown IDs are skipped.
    pub async fn find_by_ids(&self, ids: &[ItemId]) -> Result<Vec<Item>, sqlx::Error> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let id_strings: Vec<String> = ids.iter().map(|id| id.to_string()).collect();
        let rows: Vec<ItemRow> = sqlx::query_as(&format!(
            "{ITEM_SELECT} WHERE i.id = ANY($1) GROUP BY i.id ORDER BY i.name"
        ))
        .bind(&id_strings)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(|r| r.try_into_item()).collect()
    }

    /// Lists the items tagged with `category`, ordered by name.
    ///
    /// Each returned item still carries all of its categories.
    pub async fn list_by_category(&self, category: Category) -> Result<Vec<Item>, sqlx::Error> {
        let rows: Vec<ItemRow> = sqlx::query_as(&format!(
            r#"{ITEM_SELECT}
            WHERE EXISTS (
                SELECT 1 FROM item_categories f
                WHERE f.item_id = i.id AND f.category = $1
            )
            GROUP BY i.id
            ORDER BY i.name"#
        ))
        .bind(category.slug())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(|r| r.try_into_item()).collect()
    }

    /// Counts items per category. Every category is listed, empty ones
    /// with a count of zero.
    pub async fn category_counts(&self) -> Result<Vec<CategorySummary>, sqlx::Error> {
        let rows: Vec<CategoryCountRow> = sqlx::query_as(
            r#"
            SELECT category, COUNT(*) AS item_count
            FROM item_categories
            GROUP BY category
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let mut counts = HashMap::with_capacity(rows.len());
        for row in rows {
            let category = Category::from_str(&row.category)
                .map_err(|e| invalid_data(format!("category count row has {}", e)))?;
            counts.insert(category, u32::try_from(row.item_count).unwrap_or(u32::MAX));
        }

        Ok(Category::ALL
            .iter()
            .map(|category| CategorySummary {
                category: *category,
                item_count: counts.get(category).copied().unwrap_or(0),
            })
            .collect())
    }

    /// Lists items with no active booking on any date of `range`.
    pub async fn list_available(&self, range: DateRange) -> Result<Vec<Item>, sqlx::Error> {
        let rows: Vec<ItemRow> = sqlx::query_as(&format!(
            r#"{ITEM_SELECT}
            WHERE NOT EXISTS (
                SELECT 1 FROM bookings b
                WHERE b.item_id = i.id
                  AND b.status <> 'cancelled'
                  AND b.check_in <= $2
                  AND b.check_out >= $1
            )
            GROUP BY i.id
            ORDER BY i.name"#
        ))
        .bind(range.check_in)
        .bind(range.check_out)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(|r| r.try_into_item()).collect()
    }
}
