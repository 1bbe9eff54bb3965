//! Page components for the application.
//!
//! Each page is a Leptos component that renders a specific route,
//! along with any server functions specific to that page.

pub mod about;
pub mod activity;
pub mod booking;
pub mod cart;
pub mod contact;
pub mod home;
pub mod reserve;
pub mod rooms;
pub mod search;

// Re-export all page components for convenient access
pub use about::AboutPage;
pub use activity::{ActivityPage, CategoryPage};
pub use booking::BookingPage;
pub use cart::CartPage;
pub use contact::ContactPage;
pub use home::HomePage;
pub use reserve::ReservePage;
pub use rooms::RoomsPage;
pub use search::SearchPage;

use leptos::prelude::*;
use makaya_core::{Item, format_price};

/// Card for a rentable item, linking to its availability calendar.
#[component]
pub(crate) fn ItemCard(item: Item) -> impl IntoView {
    let href = format!("/reserve/{}", item.id);
    let categories = item
        .categories
        .iter()
        .map(|c| view! { <span class="badge">{c.name()}</span> })
        .collect_view();

    view! {
        <div class="card item-card">
            {match item.image {
                Some(src) => view! { <img class="card-image" src=src alt=item.name.clone()/> }
                    .into_any(),
                None => view! { <div class="card-image card-image--placeholder"></div> }.into_any(),
            }}
            <div class="card-body">
                <h3 class="card-title">{item.name.clone()}</h3>
                <div class="badges">{categories}</div>
                <p class="card-description">{item.description}</p>
                <p class="price">
                    {format_price(item.price)} <span class="muted">" / day"</span>
                </p>
            </div>
            <a href=href class="button button--primary">"Check Availability"</a>
        </div>
    }
}

/// Inline error shown when a server function fails.
#[component]
pub(crate) fn ErrorNotice(message: String) -> impl IntoView {
    view! { <p class="notice notice--error">{message}</p> }
}
