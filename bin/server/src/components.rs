//! Reusable view components.

use chrono::{Datelike, NaiveDate};
use leptos::prelude::*;
use makaya_core::{DateRange, DayState, MonthGrid, RangeSelection, SelectionOutcome};
use std::collections::BTreeSet;

/// A card that links to one way of searching for equipment.
#[component]
pub fn FeatureCard(
    title: &'static str,
    description: &'static str,
    href: &'static str,
    #[prop(default = "Get Started")] button_text: &'static str,
) -> impl IntoView {
    view! {
        <div class="card feature-card">
            <h3 class="card-title">{title}</h3>
            <p class="card-description">{description}</p>
            <a href=href class="button button--primary">{button_text}</a>
        </div>
    }
}

/// Month calendar for picking a rental range around booked dates.
///
/// Past and booked days are disabled. Picks that are refused leave a
/// message in `notice`.
#[component]
pub fn AvailabilityCalendar(
    blocked: BTreeSet<NaiveDate>,
    today: NaiveDate,
    selection: RwSignal<RangeSelection>,
    notice: WriteSignal<Option<&'static str>>,
) -> impl IntoView {
    let blocked = StoredValue::new(blocked);
    let first_month = MonthGrid::containing(today);
    let month = RwSignal::new(first_month);

    let pick = move |date: NaiveDate| {
        let mut current = selection.get_untracked();
        let outcome = blocked.with_value(|b| current.pick(date, today, b));
        selection.set(current);
        match outcome {
            SelectionOutcome::Refused(refusal) => notice.set(Some(refusal.message())),
            SelectionOutcome::Started(_) | SelectionOutcome::Completed(_) => notice.set(None),
        }
    };

    view! {
        <div class="calendar">
            <div class="calendar-nav">
                <button
                    type="button"
                    class="calendar-nav-button"
                    aria-label="Previous month"
                    disabled=move || month.get() == first_month
                    on:click=move |_| month.update(|m| *m = m.previous())
                >
                    "‹"
                </button>
                <h3 class="calendar-label">{move || month.get().label()}</h3>
                <button
                    type="button"
                    class="calendar-nav-button"
                    aria-label="Next month"
                    on:click=move |_| month.update(|m| *m = m.next())
                >
                    "›"
                </button>
            </div>
            <div class="calendar-grid">
                {MonthGrid::WEEKDAYS
                    .iter()
                    .map(|day| view! { <div class="calendar-weekday">{*day}</div> })
                    .collect_view()}
                {move || {
                    let current = selection.get();
                    month
                        .get()
                        .weeks()
                        .into_iter()
                        .flatten()
                        .map(|cell| match cell {
                            Some(date) => {
                                let state = blocked
                                    .with_value(|b| DayState::of(date, today, b, &current));
                                view! {
                                    <button
                                        type="button"
                                        class=state.css_class()
                                        disabled=!state.is_selectable()
                                        on:click=move |_| pick(date)
                                    >
                                        {date.day()}
                                    </button>
                                }
                                    .into_any()
                            }
                            None => view! { <div class="day day--blank"></div> }.into_any(),
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

/// Color key for the availability calendar.
#[component]
pub fn CalendarLegend() -> impl IntoView {
    view! {
        <div class="calendar-legend">
            <div class="legend-item">
                <span class="legend-swatch legend-swatch--selected"></span>
                <span>"Selected"</span>
            </div>
            <div class="legend-item">
                <span class="legend-swatch legend-swatch--booked"></span>
                <span>"Booked"</span>
            </div>
            <div class="legend-item">
                <span class="legend-swatch legend-swatch--available"></span>
                <span>"Available"</span>
            </div>
        </div>
    }
}

/// Shows the picked range, e.g. "Selected: Oct 20, 2026 - Oct 22, 2026".
#[component]
pub fn DateRangeBar(range: DateRange) -> impl IntoView {
    view! {
        <div class="date-range-bar">
            <p>
                <span>"Selected: "</span>
                <strong>{range.to_string()}</strong>
            </p>
        </div>
    }
}
