//! Activity categories and the per-category item listings.

use super::{ErrorNotice, ItemCard};
use crate::types::CategoryListing;
use leptos::prelude::*;
use leptos_router::{hooks::use_params, params::Params};
use makaya_core::CategorySummary;

/// Server function to list every category with its item count.
#[server]
pub async fn list_categories() -> Result<Vec<CategorySummary>, ServerFnError> {
    use crate::db::ItemRepository;
    use crate::error::CatalogError;
    use crate::server_helpers::get_db_pool;

    let repo = ItemRepository::new(get_db_pool());
    repo.category_counts().await.map_err(|e| {
        tracing::error!(error = %e, "Failed to count items per category");
        CatalogError::DatabaseError {
            details: e.to_string(),
        }
        .into_server_error()
    })
}

/// Server function to list the items in one category.
#[server]
pub async fn list_items_in_category(slug: String) -> Result<CategoryListing, ServerFnError> {
    use crate::db::ItemRepository;
    use crate::error::CatalogError;
    use crate::server_helpers::get_db_pool;
    use makaya_core::Category;
    use std::str::FromStr;

    let category = Category::from_str(&slug).map_err(|e| {
        tracing::debug!(error = %e, slug = %slug, "Unknown category");
        CatalogError::UnknownCategory { slug: slug.clone() }.into_server_error()
    })?;

    let repo = ItemRepository::new(get_db_pool());
    let items = repo.list_by_category(category).await.map_err(|e| {
        tracing::error!(
            error = %e,
            category = category.slug(),
            "Failed to list items in category"
        );
        CatalogError::DatabaseError {
            details: e.to_string(),
        }
        .into_server_error()
    })?;

    Ok(CategoryListing { category, items })
}

/// Grid of activity categories.
#[component]
pub fn ActivityPage() -> impl IntoView {
    let categories = Resource::new(|| (), |_| list_categories());

    view! {
        <div class="activity-page">
            <section class="page-header">
                <h1>"Activities & Rentals"</h1>
                <p class="lead">
                    "Pick an activity to browse the equipment we rent out by the day."
                </p>
            </section>

            <Suspense fallback=move || view! { <p>"Loading categories..."</p> }>
                {move || {
                    categories
                        .get()
                        .map(|result| match result {
                            Ok(summaries) => view! {
                                <div class="tile-grid">
                                    {summaries
                                        .into_iter()
                                        .map(|summary| view! { <CategoryTile summary=summary/> })
                                        .collect_view()}
                                </div>
                            }
                                .into_any(),
                            Err(e) => view! { <ErrorNotice message=e.to_string()/> }.into_any(),
                        })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn CategoryTile(summary: CategorySummary) -> impl IntoView {
    let category = summary.category;
    let count = match summary.item_count {
        1 => "1 item".to_string(),
        n => format!("{n} items"),
    };

    view! {
        <a href=format!("/activity/{}", category.slug()) class="card tile">
            <h3 class="card-title">{category.name()}</h3>
            <p class="card-description">{category.tagline()}</p>
            <span class="badge">{count}</span>
        </a>
    }
}

#[derive(Params, PartialEq, Clone, Debug)]
pub struct CategoryParams {
    pub slug: Option<String>,
}

/// Items listed under the category named in the URL.
#[component]
pub fn CategoryPage() -> impl IntoView {
    let params = use_params::<CategoryParams>();
    let slug = Signal::derive(move || params.get().ok().and_then(|p| p.slug));

    let listing = Resource::new(
        move || slug.get(),
        |slug| async move {
            match slug {
                Some(slug) => list_items_in_category(slug).await,
                None => Err(ServerFnError::new("No category selected")),
            }
        },
    );

    view! {
        <div class="category-page">
            <a href="/activity" class="back-link">"← All activities"</a>
            <Suspense fallback=move || view! { <p>"Loading items..."</p> }>
                {move || {
                    listing
                        .get()
                        .map(|result| match result {
                            Ok(listing) => view! { <CategoryItems listing=listing/> }.into_any(),
                            Err(e) => view! { <ErrorNotice message=e.to_string()/> }.into_any(),
                        })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn CategoryItems(listing: CategoryListing) -> impl IntoView {
    let category = listing.category;

    view! {
        <section class="page-header">
            <h1>{category.name()}</h1>
            <p class="lead">{category.tagline()}</p>
        </section>
        {if listing.items.is_empty() {
            view! {
                <div class="empty-state">
                    <p>"Nothing is listed in this category yet."</p>
                    <a href="/activity" class="button button--outline">"Browse other activities"</a>
                </div>
            }
                .into_any()
        } else {
            view! {
                <div class="card-grid">
                    {listing
                        .items
                        .into_iter()
                        .map(|item| view! { <ItemCard item=item/> })
                        .collect_view()}
                </div>
            }
                .into_any()
        }}
    }
}
