//! Room booking page component and server functions.

use super::ErrorNotice;
use super::rooms::list_rooms;
use crate::types::BookingConfirmation;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_query_map;
use makaya_core::{
    MAX_GUESTS_PER_BOOKING, Room, RoomBookingForm, dates::DATE_FORMAT, format_price,
    pricing::room_total,
};

/// Server function to book a room.
#[server]
pub async fn create_room_booking(
    form: RoomBookingForm,
) -> Result<BookingConfirmation, ServerFnError> {
    use crate::db::{BookingRepository, RoomRepository};
    use crate::error::ReservationError;
    use crate::server_helpers::{get_db_pool, today};
    use makaya_core::{Booking, BookingError, RoomId};
    use std::str::FromStr;

    if form.room_id.trim().is_empty() {
        return Err(
            ReservationError::from(BookingError::MissingField { field: "Room" })
                .into_server_error(),
        );
    }

    let room_id = RoomId::from_str(&form.room_id).map_err(|e| {
        tracing::debug!(
            error = %e,
            room_id = %form.room_id,
            "Invalid room ID format"
        );
        ReservationError::InvalidId {
            id: form.room_id.clone(),
            reason: e.to_string(),
        }
        .into_server_error()
    })?;

    let db_pool = get_db_pool();
    let room = RoomRepository::new(db_pool.clone())
        .find_by_id(room_id)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, room_id = %room_id, "Failed to load room");
            ReservationError::DatabaseError {
                details: e.to_string(),
            }
            .into_server_error()
        })?
        .ok_or_else(|| {
            tracing::debug!(room_id = %room_id, "Room not found");
            ReservationError::RoomNotFound {
                id: room_id.to_string(),
            }
            .into_server_error()
        })?;

    let request = form.validate(&room, today()).map_err(|e| {
        tracing::debug!(error = %e, room_id = %room_id, "Rejected room booking");
        ReservationError::from(e).into_server_error()
    })?;

    let booking = Booking::for_room(request);
    BookingRepository::new(db_pool)
        .create_room_booking(&booking)
        .await
        .map_err(|e| {
            tracing::error!(
                error = %e,
                booking_id = %booking.id,
                room_id = %room_id,
                "Failed to create room booking"
            );
            ReservationError::DatabaseError {
                details: e.to_string(),
            }
            .into_server_error()
        })?;

    tracing::info!(
        booking_id = %booking.id,
        room_id = %room_id,
        check_in = %booking.stay.check_in,
        check_out = %booking.stay.check_out,
        total_price = booking.total_price,
        "Created room booking"
    );

    Ok(BookingConfirmation {
        booking_id: booking.id.to_string(),
        email: booking.contact.email,
        total_price: booking.total_price,
    })
}

/// Room booking form with a live price summary.
#[component]
pub fn BookingPage() -> impl IntoView {
    let query = use_query_map();
    let rooms = Resource::new(|| (), |_| list_rooms());

    let form = RwSignal::new(RoomBookingForm {
        guests: "1".to_string(),
        ..RoomBookingForm::default()
    });
    let (submitting, set_submitting) = signal(false);
    let (result, set_result) = signal(Option::<Result<String, String>>::None);

    // Preselect the room from `?room=` once.
    Effect::new(move || {
        if let Some(room_id) = query.with(|q| q.get("room")) {
            form.update(|f| {
                if f.room_id.is_empty() {
                    f.room_id = room_id;
                }
            });
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let submitted = form.get_untracked();
        set_submitting.set(true);
        set_result.set(None);
        spawn_local(async move {
            match create_room_booking(submitted).await {
                Ok(confirmation) => {
                    form.set(RoomBookingForm {
                        guests: "1".to_string(),
                        ..RoomBookingForm::default()
                    });
                    set_result.set(Some(Ok(confirmation.message())));
                }
                Err(e) => set_result.set(Some(Err(e.to_string()))),
            }
            set_submitting.set(false);
        });
    };

    // Read in the browser only, so server HTML and hydration agree.
    let (today, set_today) = signal(String::new());
    Effect::new(move || {
        set_today.set(chrono::Local::now().format(DATE_FORMAT).to_string());
    });
    let check_out_floor = move || form.with(|f| check_out_min(&f.check_in, &today.get()));

    view! {
        <div class="booking-page">
            <section class="page-header">
                <h1>"Book Your Stay"</h1>
                <p class="lead">
                    "Complete the form below to reserve your room. We'll confirm your booking via email."
                </p>
            </section>

            <Suspense fallback=move || view! { <p>"Loading rooms..."</p> }>
                {move || {
                    rooms.get().map(|loaded| match loaded {
                        Err(e) => view! { <ErrorNotice message=e.to_string()/> }.into_any(),
                        Ok(rooms) => {
                            let rooms = StoredValue::new(rooms);
                            let selected = move || {
                                let id = form.with(|f| f.room_id.clone());
                                rooms.with_value(|all| {
                                    all.iter().find(|r| r.id.to_string() == id).cloned()
                                })
                            };
                            view! {
                                <form class="booking-grid" on:submit=on_submit>
                                    <div class="stack">
                                        <div class="card">
                                            <h2 class="card-title">"1. Select Room"</h2>
                                            <p class="card-description">"Choose your preferred accommodation"</p>
                                            <select
                                                prop:value=move || form.with(|f| f.room_id.clone())
                                                on:change=move |ev| form.update(|f| f.room_id = event_target_value(&ev))
                                            >
                                                <option value="">"Select a room"</option>
                                                {rooms.with_value(|all| {
                                                    all.iter()
                                                        .map(|room| {
                                                            let label = format!(
                                                                "{} - {}/night (up to {} guests)",
                                                                room.name,
                                                                format_price(room.price),
                                                                room.max_guests,
                                                            );
                                                            view! { <option value=room.id.to_string()>{label}</option> }
                                                        })
                                                        .collect_view()
                                                })}
                                            </select>
                                            {move || selected().map(|room| view! { <SelectedRoom room=room/> })}
                                        </div>

                                        <div class="card">
                                            <h2 class="card-title">"2. Select Dates"</h2>
                                            <p class="card-description">"Choose your check-in and check-out dates"</p>
                                            <div class="form-row">
                                                <label>
                                                    "Check-in"
                                                    <input
                                                        type="date"
                                                        required
                                                        min=today
                                                        prop:value=move || form.with(|f| f.check_in.clone())
                                                        on:input=move |ev| form.update(|f| f.check_in = event_target_value(&ev))
                                                    />
                                                </label>
                                                <label>
                                                    "Check-out"
                                                    <input
                                                        type="date"
                                                        required
                                                        min=check_out_floor
                                                        prop:value=move || form.with(|f| f.check_out.clone())
                                                        on:input=move |ev| form.update(|f| f.check_out = event_target_value(&ev))
                                                    />
                                                </label>
                                            </div>
                                            {move || {
                                                let nights = form.with(RoomBookingForm::nights);
                                                (nights > 0).then(|| {
                                                    let (check_in, check_out) =
                                                        form.with(|f| (f.check_in.clone(), f.check_out.clone()));
                                                    view! {
                                                        <div class="date-summary">
                                                            <p class="nights">{nights_label(nights)} " selected"</p>
                                                            <p class="muted">{format!("{check_in} - {check_out}")}</p>
                                                        </div>
                                                    }
                                                })
                                            }}
                                        </div>

                                        <div class="card">
                                            <h2 class="card-title">"3. Guest Information"</h2>
                                            <label>
                                                "Full Name *"
                                                <input
                                                    type="text"
                                                    placeholder="John Doe"
                                                    required
                                                    prop:value=move || form.with(|f| f.full_name.clone())
                                                    on:input=move |ev| form.update(|f| f.full_name = event_target_value(&ev))
                                                />
                                            </label>
                                            <div class="form-row">
                                                <label>
                                                    "Email *"
                                                    <input
                                                        type="email"
                                                        placeholder="john@example.com"
                                                        required
                                                        prop:value=move || form.with(|f| f.email.clone())
                                                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                                                    />
                                                </label>
                                                <label>
                                                    "Phone *"
                                                    <input
                                                        type="tel"
                                                        placeholder="+63 XXX XXX XXXX"
                                                        required
                                                        prop:value=move || form.with(|f| f.phone.clone())
                                                        on:input=move |ev| form.update(|f| f.phone = event_target_value(&ev))
                                                    />
                                                </label>
                                            </div>
                                            <label>
                                                "Number of Guests *"
                                                <select
                                                    prop:value=move || form.with(|f| f.guests.clone())
                                                    on:change=move |ev| form.update(|f| f.guests = event_target_value(&ev))
                                                >
                                                    {(1..=MAX_GUESTS_PER_BOOKING)
                                                        .map(|n| {
                                                            let label = if n == 1 {
                                                                "1 Guest".to_string()
                                                            } else {
                                                                format!("{n} Guests")
                                                            };
                                                            view! { <option value=n.to_string()>{label}</option> }
                                                        })
                                                        .collect_view()}
                                                </select>
                                            </label>
                                            <label>
                                                "Special Requests (Optional)"
                                                <textarea
                                                    rows="4"
                                                    placeholder="Any special requirements or requests?"
                                                    prop:value=move || form.with(|f| f.special_requests.clone())
                                                    on:input=move |ev| form.update(|f| f.special_requests = event_target_value(&ev))
                                                ></textarea>
                                            </label>
                                        </div>
                                    </div>

                                    <div class="card summary-card">
                                        <h2 class="card-title">"Booking Summary"</h2>
                                        {move || match selected() {
                                            None => view! {
                                                <p class="muted">"Select a room to see pricing"</p>
                                            }
                                                .into_any(),
                                            Some(room) => view! { <PriceSummary room=room form=form/> }.into_any(),
                                        }}
                                        <button
                                            type="submit"
                                            class="button button--primary button--block"
                                            disabled=move || submitting.get() || !form.with(RoomBookingForm::is_complete)
                                        >
                                            {move || if submitting.get() { "Booking..." } else { "Confirm Booking" }}
                                        </button>
                                        {move || {
                                            result
                                                .get()
                                                .map(|r| match r {
                                                    Ok(text) => view! { <p class="notice notice--success">{text}</p> }.into_any(),
                                                    Err(text) => view! { <p class="notice notice--error">{text}</p> }.into_any(),
                                                })
                                        }}
                                        <p class="muted small">
                                            "Your booking will be pending until confirmed by our team. You'll receive a confirmation email within 24 hours."
                                        </p>
                                    </div>
                                </form>
                            }
                                .into_any()
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn SelectedRoom(room: Room) -> impl IntoView {
    view! {
        <div class="room-info">
            <h4>{room.name}</h4>
            <p class="muted">{room.description}</p>
            <div class="badges">
                <span class="badge">{format!("Up to {} guests", room.max_guests)}</span>
                <span class="price">{format!("{}/night", format_price(room.price))}</span>
            </div>
        </div>
    }
}

#[component]
fn PriceSummary(room: Room, form: RwSignal<RoomBookingForm>) -> impl IntoView {
    let name = room.name.clone();
    let price = room.price;

    view! {
        <div class="summary">
            <div>
                <p class="muted small">"Room"</p>
                <p><strong>{name}</strong></p>
            </div>
            {move || {
                let check_in = form.with(|f| f.check_in.clone());
                (!check_in.is_empty()).then(|| view! {
                    <div>
                        <p class="muted small">"Check-in"</p>
                        <p>{check_in}</p>
                    </div>
                })
            }}
            {move || {
                let check_out = form.with(|f| f.check_out.clone());
                (!check_out.is_empty()).then(|| view! {
                    <div>
                        <p class="muted small">"Check-out"</p>
                        <p>{check_out}</p>
                    </div>
                })
            }}
            {move || {
                let nights = form.with(RoomBookingForm::nights);
                let total = room_total(price, nights)?;
                (nights > 0).then(|| view! {
                    <div class="summary-row">
                        <span>{format!("{} × {}", format_price(price), nights_label(nights))}</span>
                        <span>{format_price(total)}</span>
                    </div>
                    <div class="summary-row summary-row--total">
                        <span>"Total"</span>
                        <span class="price">{format_price(total)}</span>
                    </div>
                })
            }}
        </div>
    }
}

/// Earliest allowed check-out: the chosen check-in, else today.
fn check_out_min(check_in: &str, today: &str) -> String {
    if check_in.is_empty() {
        today.to_string()
    } else {
        check_in.to_string()
    }
}

fn nights_label(nights: u32) -> String {
    if nights == 1 {
        "1 night".to_string()
    } else {
        format!("{nights} nights")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nights_label_pluralizes() {
        assert_eq!(nights_label(1), "1 night");
        assert_eq!(nights_label(3), "3 nights");
    }

    #[test]
    fn check_out_cannot_precede_check_in() {
        assert_eq!(check_out_min("", "2026-11-01"), "2026-11-01");
        assert_eq!(check_out_min("2026-11-05", "2026-11-01"), "2026-11-05");
        // Before hydration there is no date yet.
        assert_eq!(check_out_min("", ""), "");
    }
}
