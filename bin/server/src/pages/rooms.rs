//! Rooms page component and server functions.

use super::ErrorNotice;
use leptos::prelude::*;
use makaya_core::{GuestFilter, Room, RoomSort, filter_rooms, format_price};

/// Amenities included with every room. Room cards show the first three.
static ROOM_AMENITIES: [&str; 6] = [
    "High-Speed WiFi",
    "Air Conditioning",
    "Free Coffee",
    "Free Parking",
    "Pool Access",
    "Full Kitchen",
];

/// Server function to list all rooms, cheapest first.
#[server]
pub async fn list_rooms() -> Result<Vec<Room>, ServerFnError> {
    use crate::db::RoomRepository;
    use crate::error::CatalogError;
    use crate::server_helpers::get_db_pool;

    let repo = RoomRepository::new(get_db_pool());
    repo.list_all().await.map_err(|e| {
        tracing::error!(error = %e, "Failed to list rooms");
        CatalogError::DatabaseError {
            details: e.to_string(),
        }
        .into_server_error()
    })
}

/// Room listing with guest filter and sort.
#[component]
pub fn RoomsPage() -> impl IntoView {
    let rooms = Resource::new(|| (), |_| list_rooms());
    let (guests, set_guests) = signal(GuestFilter::All);
    let (sort, set_sort) = signal(RoomSort::Name);

    let clear_filters = move |_| {
        set_guests.set(GuestFilter::All);
        set_sort.set(RoomSort::Name);
    };

    view! {
        <div class="rooms-page">
            <section class="page-header">
                <h1>"Our Rooms"</h1>
                <p class="lead">
                    "Choose from our selection of beautifully designed spaces. Each room comes with premium amenities for your comfort."
                </p>
            </section>

            <div class="filters">
                <label>
                    "Guests"
                    <select
                        prop:value=move || guests.get().as_param()
                        on:change=move |ev| {
                            set_guests.set(GuestFilter::from_param(&event_target_value(&ev)))
                        }
                    >
                        {GuestFilter::OPTIONS
                            .iter()
                            .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                            .collect_view()}
                    </select>
                </label>
                <label>
                    "Sort by"
                    <select
                        prop:value=move || sort.get().as_param()
                        on:change=move |ev| set_sort.set(RoomSort::from_param(&event_target_value(&ev)))
                    >
                        {RoomSort::OPTIONS
                            .iter()
                            .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                            .collect_view()}
                    </select>
                </label>
            </div>

            <Suspense fallback=move || view! { <p>"Loading rooms..."</p> }>
                {move || {
                    rooms.get().map(|result| {
                        match result {
                            Ok(all) => {
                                let shown = filter_rooms(&all, guests.get(), sort.get());
                                let count = shown.len();
                                let noun = if count == 1 { "room" } else { "rooms" };
                                if shown.is_empty() {
                                    view! {
                                        <p class="muted">{format!("Showing {count} {noun}")}</p>
                                        <div class="empty-state">
                                            <p>"No rooms found matching your criteria."</p>
                                            <button
                                                type="button"
                                                class="button button--outline"
                                                on:click=clear_filters
                                            >
                                                "Clear Filters"
                                            </button>
                                        </div>
                                    }
                                        .into_any()
                                } else {
                                    view! {
                                        <p class="muted">{format!("Showing {count} {noun}")}</p>
                                        <div class="card-grid">
                                            {shown
                                                .into_iter()
                                                .map(|room| view! { <RoomCard room=room/> })
                                                .collect_view()}
                                        </div>
                                    }
                                        .into_any()
                                }
                            }
                            Err(e) => view! { <ErrorNotice message=e.to_string()/> }.into_any(),
                        }
                    })
                }}
            </Suspense>

            <section class="section">
                <h2 class="section-title">"All Rooms Include"</h2>
                <div class="tile-grid tile-grid--compact">
                    {ROOM_AMENITIES
                        .iter()
                        .map(|amenity| view! { <div class="amenity"><strong>{*amenity}</strong></div> })
                        .collect_view()}
                </div>
            </section>
        </div>
    }
}

#[component]
fn RoomCard(room: Room) -> impl IntoView {
    let href = format!("/booking?room={}", room.id);

    view! {
        <div class="card room-card">
            {match room.images.first() {
                Some(src) => view! { <img class="card-image" src=src.clone() alt=room.name.clone()/> }
                    .into_any(),
                None => view! { <div class="card-image card-image--placeholder"></div> }.into_any(),
            }}
            <div class="card-body">
                <h3 class="card-title">{room.name.clone()}</h3>
                <p class="card-description">{room.description.clone()}</p>
                <p class="price">
                    {format_price(room.price)} <span class="muted">" / night"</span>
                </p>
                <span class="badge">{format!("Up to {} guests", room.max_guests)}</span>
                <p class="amenity-line">
                    <strong>"Amenities: "</strong>
                    {ROOM_AMENITIES[..3].join(" · ")}
                </p>
            </div>
            <a href=href class="button button--primary">"Book Now"</a>
        </div>
    }
}
