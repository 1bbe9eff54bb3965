//! Home page component.

use crate::components::FeatureCard;
use leptos::prelude::*;

/// The home page component.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <section class="hero">
                <h1>"How would you like to search?"</h1>
                <p class="lead">"Choose your preferred way to find and book equipment"</p>
            </section>
            <section class="section">
                <div class="section-header">
                    <h2>"Premium Amenities"</h2>
                    <p>"Everything you need for a comfortable and memorable stay"</p>
                </div>
                <div class="tile-grid">
                    <FeatureCard
                        title="Search by Activity"
                        description="Browse by activity category, select a specific item, and check its availability calendar to book your preferred dates."
                        href="/activity"
                    />
                    <FeatureCard
                        title="Search by Date"
                        description="Choose your desired rental dates first, then browse all available items across different categories that match your schedule."
                        href="/search"
                    />
                </div>
            </section>
            <section class="section cta">
                <h2>"Staying over?"</h2>
                <p>"Rooms for solo travelers, couples, and families in the heart of Manila."</p>
                <a href="/rooms" class="button button--outline">"View Rooms"</a>
            </section>
        </div>
    }
}
