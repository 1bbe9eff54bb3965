//! Search for equipment free over a date range.

use super::{ErrorNotice, ItemCard};
use leptos::prelude::*;
use makaya_core::Item;

/// Server function to list the items with no booking overlapping the range.
///
/// The dates may be given in either order.
#[server]
pub async fn search_available_items(
    check_in: String,
    check_out: String,
) -> Result<Vec<Item>, ServerFnError> {
    use crate::db::ItemRepository;
    use crate::error::CatalogError;
    use crate::server_helpers::get_db_pool;
    use makaya_core::{DateRange, parse_date};

    let parse = |value: &str| {
        parse_date(value).map_err(|e| {
            tracing::debug!(error = %e, value = %value, "Invalid search date");
            CatalogError::InvalidDates {
                details: format!("'{value}': {e}"),
            }
            .into_server_error()
        })
    };
    let range = DateRange::new(parse(&check_in)?, parse(&check_out)?);

    let repo = ItemRepository::new(get_db_pool());
    let items = repo.list_available(range).await.map_err(|e| {
        tracing::error!(error = %e, range = %range, "Failed to search available items");
        CatalogError::DatabaseError {
            details: e.to_string(),
        }
        .into_server_error()
    })?;

    tracing::debug!(range = %range, results = items.len(), "Searched available items");
    Ok(items)
}

/// Date-range search over the rental catalog.
#[component]
pub fn SearchPage() -> impl IntoView {
    let (check_in, set_check_in) = signal(String::new());
    let (check_out, set_check_out) = signal(String::new());
    let (submitted, set_submitted) = signal(Option::<(String, String)>::None);

    let results = Resource::new(
        move || submitted.get(),
        |query| async move {
            match query {
                Some((check_in, check_out)) => {
                    search_available_items(check_in, check_out).await.map(Some)
                }
                None => Ok(None),
            }
        },
    );

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let (from, to) = (check_in.get_untracked(), check_out.get_untracked());
        if !from.is_empty() && !to.is_empty() {
            set_submitted.set(Some((from, to)));
        }
    };

    view! {
        <div class="search-page">
            <section class="page-header">
                <h1>"Find Available Gear"</h1>
                <p class="lead">"Choose your dates to see what's free to rent."</p>
            </section>

            <form class="card search-form" on:submit=on_submit>
                <div class="form-row">
                    <label>
                        "From"
                        <input
                            type="date"
                            required
                            prop:value=check_in
                            on:input=move |ev| set_check_in.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "To"
                        <input
                            type="date"
                            required
                            prop:value=check_out
                            on:input=move |ev| set_check_out.set(event_target_value(&ev))
                        />
                    </label>
                </div>
                <button
                    type="submit"
                    class="button button--primary"
                    disabled=move || check_in.get().is_empty() || check_out.get().is_empty()
                >
                    "Search"
                </button>
            </form>

            <Suspense fallback=move || view! { <p>"Searching..."</p> }>
                {move || {
                    results
                        .get()
                        .map(|result| match result {
                            Ok(None) => ().into_any(),
                            Ok(Some(items)) if items.is_empty() => view! {
                                <div class="empty-state">
                                    <p>"Everything is booked for those dates. Try a different range."</p>
                                </div>
                            }
                                .into_any(),
                            Ok(Some(items)) => view! {
                                <p class="muted">
                                    {format!("{} item(s) available", items.len())}
                                </p>
                                <div class="card-grid">
                                    {items
                                        .into_iter()
                                        .map(|item| view! { <ItemCard item=item/> })
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
