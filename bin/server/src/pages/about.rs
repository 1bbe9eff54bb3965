//! About page component.

use crate::app::BUSINESS_NAME;
use leptos::prelude::*;

static VALUES: [(&str, &str); 4] = [
    (
        "Home Away From Home",
        "We create a warm, welcoming atmosphere where you can relax and feel comfortable during your stay.",
    ),
    (
        "Safety & Security",
        "Your safety is our priority. We maintain high standards of cleanliness and security at all times.",
    ),
    (
        "Exceptional Service",
        "Our team is dedicated to providing friendly, professional service to make your stay memorable.",
    ),
    (
        "Quality Accommodation",
        "Premium amenities and comfortable spaces designed for both leisure and business travelers.",
    ),
];

static AMENITIES: [(&str, &str); 8] = [
    ("High-Speed WiFi", "Unlimited fiber internet access"),
    ("Air Conditioning", "Climate control in every room"),
    ("Free Coffee & Tea", "Complimentary beverages"),
    ("Free Parking", "Secure parking space for guests"),
    ("Swimming Pool", "Access to our beautiful pool"),
    ("Full Kitchen", "Fully equipped cooking facilities"),
    ("Smart TV", "Netflix and cable TV"),
    ("24/7 Access", "Self check-in available"),
];

/// House rules as `(rule, allowed)`.
static HOUSE_RULES: [(&str, bool); 7] = [
    ("Check-in: 2:00 PM", true),
    ("Check-out: 12:00 PM", true),
    ("Quiet hours: 10 PM - 7 AM", true),
    ("Additional guests: ₱500/night", true),
    ("No smoking inside units", false),
    ("No parties or events", false),
    ("No pets allowed", false),
];

static CHECK_IN_NOTES: [&str; 3] = [
    "Early check-in available upon request",
    "Valid ID required",
    "Self check-in instructions provided",
];

static CHECK_OUT_NOTES: [&str; 3] = [
    "Late check-out available (₱500 fee)",
    "Leave keys in designated area",
    "Luggage storage available",
];

static LOCATION: [(&str, [&str; 3]); 3] = [
    (
        "Business Districts",
        ["10 mins to Makati CBD", "15 mins to BGC", "20 mins to Ortigas Center"],
    ),
    (
        "Attractions",
        ["5 mins to shopping malls", "15 mins to Rizal Park", "25 mins to SM Mall of Asia"],
    ),
    (
        "Transportation",
        [
            "5 mins walk to MRT station",
            "Easy access to major highways",
            "Airport transfer available",
        ],
    ),
];

fn bullet_list(lines: &'static [&'static str]) -> impl IntoView {
    view! {
        <ul class="bullet-list">
            {lines.iter().map(|line| view! { <li>{*line}</li> }).collect_view()}
        </ul>
    }
}

/// About page: story, values, amenities, house rules, and location.
#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="about-page">
            <section class="page-header">
                <span class="badge">{format!("About {BUSINESS_NAME}")}</span>
                <h1>"Your Home Away From Home in Manila"</h1>
            </section>

            <section class="section story">
                <h2>"Our Story"</h2>
                <p>
                    "Makaya BNB started with a few rooms and a simple idea: guests should feel \
                     at home the moment they arrive. Today we welcome travelers from around the \
                     world, and we rent out the gear they need to explore beyond the city."
                </p>
            </section>

            <section class="section">
                <div class="section-header">
                    <h2>"What We Stand For"</h2>
                    <p>
                        "Our core values guide everything we do, from property maintenance to guest service"
                    </p>
                </div>
                <div class="tile-grid">
                    {VALUES
                        .iter()
                        .map(|(title, description)| {
                            view! {
                                <div class="card">
                                    <h3 class="card-title">{*title}</h3>
                                    <p class="card-description">{*description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="section">
                <div class="section-header">
                    <h2>"Premium Amenities"</h2>
                    <p>"Everything you need for a comfortable and convenient stay"</p>
                </div>
                <div class="tile-grid tile-grid--compact">
                    {AMENITIES
                        .iter()
                        .map(|(title, description)| {
                            view! {
                                <div class="amenity">
                                    <strong>{*title}</strong>
                                    <span class="muted">{*description}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="section" id="house-rules">
                <div class="section-header">
                    <h2>"House Rules"</h2>
                    <p>"Please review our policies to ensure a pleasant stay for all guests"</p>
                </div>
                <ul class="rules">
                    {HOUSE_RULES
                        .iter()
                        .map(|(rule, allowed)| {
                            let class = if *allowed { "rule rule--allowed" } else { "rule rule--denied" };
                            view! { <li class=class>{*rule}</li> }
                        })
                        .collect_view()}
                </ul>
                <div class="card">
                    <h3 class="card-title">"Check-in & Check-out"</h3>
                    <div class="two-column">
                        <div>
                            <h4>"Check-in"</h4>
                            {bullet_list(&CHECK_IN_NOTES)}
                        </div>
                        <div>
                            <h4>"Check-out"</h4>
                            {bullet_list(&CHECK_OUT_NOTES)}
                        </div>
                    </div>
                </div>
            </section>

            <section class="section">
                <div class="section-header">
                    <h2>"Perfect Location"</h2>
                    <p>"Strategically situated in Manila for easy access to key destinations"</p>
                </div>
                <div class="tile-grid">
                    {LOCATION
                        .iter()
                        .map(|(title, lines)| {
                            view! {
                                <div class="card">
                                    <h3 class="card-title">{*title}</h3>
                                    {bullet_list(lines)}
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="section cta">
                <h3>"Ready to Experience Makaya BNB?"</h3>
                <p>"Book your stay today and discover why guests love staying with us"</p>
                <div class="actions">
                    <a href="/booking" class="button button--primary">"Book Now"</a>
                    <a href="/rooms" class="button button--outline">"View Rooms"</a>
                </div>
            </section>
        </div>
    }
}
