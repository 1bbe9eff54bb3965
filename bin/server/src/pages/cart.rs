//! Cart review and checkout.

use crate::cart_storage::CartState;
use crate::types::CheckoutConfirmation;
use leptos::prelude::*;
use leptos::task::spawn_local;
use makaya_core::{CartEntry, CheckoutForm, format_price};

/// Server function to turn the guest's cart into bookings.
///
/// The cart arrives as its stored JSON. Item names and prices are taken from
/// the database rather than the client's snapshot.
#[server]
pub async fn checkout_cart(
    form: CheckoutForm,
    cart_json: String,
) -> Result<CheckoutConfirmation, ServerFnError> {
    use crate::db::{BookingRepository, ItemBookingOutcome, ItemRepository};
    use crate::error::ReservationError;
    use crate::server_helpers::{get_db_pool, today};
    use makaya_core::{BookingError, Cart, CartItem, ItemId};
    use std::collections::HashMap;

    let mut cart = Cart::from_json(&cart_json).map_err(|report| {
        tracing::debug!(error = %report, "Rejected unreadable cart");
        ReservationError::CorruptCart {
            details: report.to_string(),
        }
        .into_server_error()
    })?;

    let db_pool = get_db_pool();
    let ids: Vec<ItemId> = cart.entries().iter().map(|e| e.item.id).collect();
    let items: HashMap<ItemId, CartItem> = ItemRepository::new(db_pool.clone())
        .find_by_ids(&ids)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, items = ids.len(), "Failed to load cart items");
            ReservationError::DatabaseError {
                details: e.to_string(),
            }
            .into_server_error()
        })?
        .iter()
        .map(|item| (item.id, CartItem::from(item)))
        .collect();

    cart.refresh_items(|id| items.get(&id).cloned())
        .map_err(|missing| {
            tracing::debug!(item_id = %missing, "Cart references a missing item");
            ReservationError::ItemNotFound {
                id: missing.to_string(),
            }
            .into_server_error()
        })?;

    let request = form.validate(&cart, today()).map_err(|e| {
        tracing::debug!(error = %e, entries = cart.len(), "Rejected checkout");
        ReservationError::from(e).into_server_error()
    })?;

    let bookings: Vec<_> = request.lines.iter().map(|l| l.booking.clone()).collect();
    let outcome = BookingRepository::new(db_pool)
        .create_item_bookings(&bookings)
        .await
        .map_err(|e| {
            tracing::error!(
                error = %e,
                bookings = bookings.len(),
                "Failed to create item bookings"
            );
            ReservationError::DatabaseError {
                details: e.to_string(),
            }
            .into_server_error()
        })?;

    match outcome {
        ItemBookingOutcome::Created => {}
        ItemBookingOutcome::Conflict { item_id } => {
            let item = request
                .lines
                .iter()
                .find(|l| l.booking.target == makaya_core::BookingTarget::Item(item_id))
                .map(|l| l.item_name.clone())
                .unwrap_or_else(|| item_id.to_string());
            tracing::info!(item_id = %item_id, "Checkout lost a race for item dates");
            return Err(
                ReservationError::from(BookingError::DatesUnavailable { item }).into_server_error(),
            );
        }
        ItemBookingOutcome::MissingItem { item_id } => {
            tracing::debug!(item_id = %item_id, "Item removed during checkout");
            return Err(ReservationError::ItemNotFound {
                id: item_id.to_string(),
            }
            .into_server_error());
        }
    }

    let booking_ids: Vec<String> = bookings.iter().map(|b| b.id.to_string()).collect();
    tracing::info!(
        bookings = booking_ids.len(),
        total = request.total,
        email = %request.contact.email,
        "Checked out cart"
    );

    Ok(CheckoutConfirmation {
        booking_ids,
        total: request.total,
    })
}

static CONFIRMATION_TERMS: [&str; 3] = [
    "Your rental dates will be reserved for the listed items",
    "Payment is settled on pickup at the front desk",
    "A confirmation email will be sent to the address above",
];

/// Lists the cart's entries and checks them out.
#[component]
pub fn CartPage() -> impl IntoView {
    let cart = CartState::expect();
    let (full_name, set_full_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (submitting, set_submitting) = signal(false);
    let (result, set_result) = signal(Option::<Result<String, String>>::None);

    let count = move || cart.with(|c| c.len());
    let total = move || cart.with(|c| c.total());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = CheckoutForm {
            full_name: full_name.get_untracked(),
            email: email.get_untracked(),
        };
        let cart_json = match cart.with_untracked(|c| c.to_json()) {
            Ok(json) => json,
            Err(report) => {
                tracing::error!(error = %report, "Failed to encode cart for checkout");
                set_result.set(Some(Err("Your cart could not be read.".to_string())));
                return;
            }
        };
        set_submitting.set(true);
        set_result.set(None);
        spawn_local(async move {
            match checkout_cart(form, cart_json).await {
                Ok(confirmation) => {
                    cart.clear();
                    set_full_name.set(String::new());
                    set_email.set(String::new());
                    set_result.set(Some(Ok(confirmation.message())));
                }
                Err(e) => set_result.set(Some(Err(e.to_string()))),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="cart-page">
            <section class="page-header">
                <h1>"Complete your booking"</h1>
            </section>

            {move || {
                result
                    .get()
                    .map(|r| match r {
                        Ok(text) => view! { <p class="notice notice--success">{text}</p> }.into_any(),
                        Err(text) => view! { <p class="notice notice--error">{text}</p> }.into_any(),
                    })
            }}

            <div class="cart-grid">
                <div class="card">
                    <div class="card-header">
                        <h2 class="card-title">{move || format!("Your Items ({})", count())}</h2>
                        <a href="/activity" class="button button--outline">"Add more items"</a>
                    </div>
                    {move || {
                        if count() == 0 {
                            view! { <p class="muted">"Your cart is empty"</p> }.into_any()
                        } else {
                            let entries = cart.with(|c| c.entries().to_vec());
                            entries
                                .into_iter()
                                .enumerate()
                                .map(|(index, entry)| view! { <CartRow index=index entry=entry/> })
                                .collect_view()
                                .into_any()
                        }
                    }}
                </div>

                <form class="card summary-card" on:submit=on_submit>
                    <h2 class="card-title">"Booking Summary"</h2>
                    <div class="summary-row summary-row--total">
                        <span>"Total"</span>
                        <span class="price">
                            {move || total().map(format_price).unwrap_or_default()}
                        </span>
                    </div>
                    <label>
                        "Full Name"
                        <input
                            type="text"
                            placeholder="John Doe"
                            required
                            prop:value=full_name
                            on:input=move |ev| set_full_name.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Email"
                        <input
                            type="email"
                            placeholder="john@example.com"
                            required
                            prop:value=email
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                    </label>
                    <div class="terms">
                        <p><strong>"By confirming this booking:"</strong></p>
                        <ul>
                            {CONFIRMATION_TERMS
                                .iter()
                                .map(|term| view! { <li>{*term}</li> })
                                .collect_view()}
                        </ul>
                    </div>
                    <button
                        type="submit"
                        class="button button--primary button--block"
                        disabled=move || submitting.get() || count() == 0
                    >
                        {move || if submitting.get() { "Confirming..." } else { "Confirm Booking" }}
                    </button>
                </form>
            </div>
        </div>
    }
}

#[component]
fn CartRow(index: usize, entry: CartEntry) -> impl IntoView {
    let cart = CartState::expect();
    let days = match entry.rental_days() {
        1 => "1 day".to_string(),
        n => format!("{n} days"),
    };
    let categories = entry
        .item
        .categories
        .iter()
        .map(|c| c.name())
        .collect::<Vec<_>>()
        .join(", ");
    let subtotal = entry.subtotal().map(format_price).unwrap_or_default();

    let on_remove = move |_| {
        cart.update(|c| {
            if let Err(e) = c.remove(index) {
                tracing::warn!(error = %e, "Failed to remove cart entry");
            }
        });
    };

    view! {
        <div class="cart-row">
            {entry.item.image.clone().map(|src| view! { <img class="cart-thumb" src=src alt=entry.item.name.clone()/> })}
            <div class="cart-row-body">
                <h3>{entry.item.name.clone()}</h3>
                <p class="muted small">{categories}</p>
                <p>{entry.booking.to_string()}</p>
                <p class="muted small">{days}</p>
            </div>
            <div class="cart-row-side">
                <span class="price">{subtotal}</span>
                <button type="button" class="button button--outline" on:click=on_remove>
                    "Remove"
                </button>
            </div>
        </div>
    }
}
