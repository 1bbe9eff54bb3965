//! Availability calendar for a single item.

use super::ErrorNotice;
use crate::cart_storage::CartState;
use crate::components::{AvailabilityCalendar, CalendarLegend, DateRangeBar};
use crate::types::ItemAvailability;
use leptos::prelude::*;
use leptos_router::{
    hooks::{use_navigate, use_params},
    params::Params,
};
use makaya_core::{CartEntry, CartItem, RangeSelection, blocked_dates, format_price};

/// Server function to get an item and the date ranges it is booked for.
#[server]
pub async fn get_item_availability(item_id: String) -> Result<ItemAvailability, ServerFnError> {
    use crate::db::{BookingRepository, ItemRepository};
    use crate::error::CatalogError;
    use crate::server_helpers::{get_db_pool, today};
    use makaya_core::ItemId;
    use std::str::FromStr;

    let id = ItemId::from_str(&item_id).map_err(|e| {
        tracing::debug!(error = %e, item_id = %item_id, "Invalid item ID format");
        CatalogError::InvalidId {
            id: item_id.clone(),
            reason: e.to_string(),
        }
        .into_server_error()
    })?;

    let db_pool = get_db_pool();
    let item = ItemRepository::new(db_pool.clone())
        .find_by_id(id)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, item_id = %id, "Failed to load item");
            CatalogError::DatabaseError {
                details: e.to_string(),
            }
            .into_server_error()
        })?
        .ok_or_else(|| {
            tracing::debug!(item_id = %id, "Item not found");
            CatalogError::NotFound { id: id.to_string() }.into_server_error()
        })?;

    let booked = BookingRepository::new(db_pool)
        .ranges_for_item(id)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, item_id = %id, "Failed to load item bookings");
            CatalogError::DatabaseError {
                details: e.to_string(),
            }
            .into_server_error()
        })?;

    Ok(ItemAvailability {
        item,
        booked,
        today: today(),
    })
}

#[derive(Params, PartialEq, Clone, Debug)]
pub struct ReserveParams {
    pub id: Option<String>,
}

/// Lets the guest pick rental dates for an item and add it to the cart.
#[component]
pub fn ReservePage() -> impl IntoView {
    let params = use_params::<ReserveParams>();
    let item_id = Signal::derive(move || params.get().ok().and_then(|p| p.id));

    let availability = Resource::new(
        move || item_id.get(),
        |id| async move {
            match id {
                Some(id) => get_item_availability(id).await,
                None => Err(ServerFnError::new("No item selected")),
            }
        },
    );

    view! {
        <div class="reserve-page">
            <section class="page-header">
                <h1>"Check Availability"</h1>
                <p class="lead">"Select your rental dates. Red dates are already booked."</p>
            </section>
            <Suspense fallback=move || view! { <p>"Loading calendar..."</p> }>
                {move || {
                    availability
                        .get()
                        .map(|result| match result {
                            Ok(availability) => view! { <Reservation availability=availability/> }
                                .into_any(),
                            Err(e) => view! { <ErrorNotice message=e.to_string()/> }.into_any(),
                        })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn Reservation(availability: ItemAvailability) -> impl IntoView {
    let cart = CartState::expect();
    let navigate = use_navigate();

    let ItemAvailability {
        item,
        booked,
        today,
    } = availability;
    let blocked = blocked_dates(&booked);
    let cart_item = StoredValue::new(CartItem::from(&item));

    let selection = RwSignal::new(RangeSelection::default());
    let (notice, set_notice) = signal(Option::<&'static str>::None);
    let range = move || selection.with(RangeSelection::range);

    let on_continue = move |_| {
        let Some(range) = selection.with_untracked(RangeSelection::range) else {
            return;
        };
        let entry = CartEntry::new(cart_item.get_value(), range);
        cart.update(|c| c.add(entry));
        navigate("/cart", Default::default());
    };

    view! {
        <div class="reserve-grid">
            <div class="card item-summary">
                {item.image.clone().map(|src| view! { <img class="card-image" src=src alt=item.name.clone()/> })}
                <div class="card-body">
                    <h2 class="card-title">{item.name.clone()}</h2>
                    <p class="card-description">{item.description.clone()}</p>
                    <p class="price">
                        {format_price(item.price)} <span class="muted">" / day"</span>
                    </p>
                </div>
            </div>

            <div class="card">
                <AvailabilityCalendar
                    blocked=blocked
                    today=today
                    selection=selection
                    notice=set_notice
                />
                <CalendarLegend/>
                {move || notice.get().map(|text| view! { <p class="notice notice--error">{text}</p> })}
                {move || range().map(|range| view! { <DateRangeBar range=range/> })}
                <button
                    type="button"
                    class="button button--primary button--block"
                    disabled=move || range().is_none()
                    on:click=on_continue
                >
                    "Continue to Booking"
                </button>
            </div>
        </div>
    }
}
