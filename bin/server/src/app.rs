//! Main Leptos application component and routing.

use crate::cart_storage::CartState;
use crate::pages::{
    AboutPage, ActivityPage, BookingPage, CartPage, CategoryPage, ContactPage, HomePage,
    ReservePage, RoomsPage, SearchPage,
};
use chrono::Datelike;
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

pub const BUSINESS_NAME: &str = "Makaya BNB";
pub const CONTACT_EMAIL: &str = "info@makayabnb.com";
pub const CONTACT_PHONE: &str = "+63 XXX XXX XXXX";
pub const ADDRESS: &str = "Manila, Philippines";

/// Social profiles as `(name, url)`.
pub const SOCIAL_LINKS: [(&str, &str); 3] =
    [("Facebook", "#"), ("Instagram", "#"), ("Twitter", "#")];

/// The main application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    CartState::provide();

    view! {
        <Title text=BUSINESS_NAME/>
        <Router>
            <Header/>
            <main class="container">
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=HomePage/>
                    <Route path=path!("/about") view=AboutPage/>
                    <Route path=path!("/contact") view=ContactPage/>
                    <Route path=path!("/rooms") view=RoomsPage/>
                    <Route path=path!("/booking") view=BookingPage/>
                    <Route path=path!("/activity") view=ActivityPage/>
                    <Route path=path!("/activity/:slug") view=CategoryPage/>
                    <Route path=path!("/search") view=SearchPage/>
                    <Route path=path!("/reserve/:id") view=ReservePage/>
                    <Route path=path!("/cart") view=CartPage/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}

/// Navigation header with the cart count.
#[component]
fn Header() -> impl IntoView {
    let cart = CartState::expect();
    let count = move || cart.with(|c| c.len());

    view! {
        <header class="header">
            <div class="header-left">
                <a href="/" class="logo">{BUSINESS_NAME}</a>
            </div>
            <nav class="nav">
                <a href="/">"Home"</a>
                <a href="/rooms">"Rooms"</a>
                <a href="/activity">"Activities"</a>
                <a href="/search">"Search"</a>
                <a href="/about">"About"</a>
                <a href="/contact">"Contact"</a>
            </nav>
            <div class="header-right">
                <a href="/cart" class="cart-link">
                    "Cart"
                    <span class="cart-count" class:cart-count--empty=move || count() == 0>
                        {count}
                    </span>
                </a>
                <a href="/booking" class="button button--primary">"Book Now"</a>
            </div>
        </header>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let year = chrono::Local::now().year();

    view! {
        <footer class="footer">
            <div class="footer-grid">
                <div>
                    <h3>{BUSINESS_NAME}</h3>
                    <p class="muted">
                        "Your home away from home in Manila, with gear for every adventure."
                    </p>
                </div>
                <div>
                    <h4>"Quick Links"</h4>
                    <ul>
                        <li><a href="/rooms">"Rooms"</a></li>
                        <li><a href="/booking">"Book Now"</a></li>
                        <li><a href="/about">"About Us"</a></li>
                    </ul>
                </div>
                <div>
                    <h4>"Contact"</h4>
                    <ul>
                        <li>"Email: " {CONTACT_EMAIL}</li>
                        <li>"Phone: " {CONTACT_PHONE}</li>
                        <li>"Address: " {ADDRESS}</li>
                    </ul>
                </div>
                <div>
                    <h4>"Follow Us"</h4>
                    <ul>
                        {SOCIAL_LINKS
                            .iter()
                            .map(|(name, url)| view! { <li><a href=*url>{*name}</a></li> })
                            .collect_view()}
                    </ul>
                </div>
            </div>
            <p class="footer-copyright">
                {format!("© {year} {BUSINESS_NAME}. All rights reserved.")}
            </p>
        </footer>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="empty-state">
            <h1>"Page not found"</h1>
            <p>"The page you are looking for does not exist."</p>
            <a href="/" class="button button--outline">"Back to home"</a>
        </div>
    }
}
