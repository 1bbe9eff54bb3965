//! The guest's cart, kept in browser local storage.
//!
//! During server rendering there is no storage, so every page renders with
//! an empty cart and picks up the stored one after hydration.

use leptos::prelude::*;
use makaya_core::Cart;

/// Reads the stored cart. Unreadable data is logged and treated as empty.
pub fn load() -> Cart {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = local_storage() else {
            return Cart::new();
        };
        let data = storage
            .get_item(makaya_core::CART_STORAGE_KEY)
            .ok()
            .flatten()
            .unwrap_or_default();
        match Cart::from_json(&data) {
            Ok(cart) => cart,
            Err(report) => {
                tracing::warn!(error = %report, "Discarding unreadable cart");
                Cart::new()
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Cart::new()
    }
}

/// Writes the cart to storage.
pub fn save(cart: &Cart) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = local_storage() else {
            return;
        };
        let json = match cart.to_json() {
            Ok(json) => json,
            Err(report) => {
                tracing::error!(error = %report, "Failed to encode cart");
                return;
            }
        };
        logged_write(
            "save cart",
            storage.set_item(makaya_core::CART_STORAGE_KEY, &json),
        );
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = cart;
    }
}

/// Removes the stored cart.
pub fn remove() {
    #[cfg(feature = "hydrate")]
    if let Some(storage) = local_storage() {
        logged_write(
            "remove cart",
            storage.remove_item(makaya_core::CART_STORAGE_KEY),
        );
    }
}

/// Logs a failed storage write. Returns whether the write went through.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn logged_write<E: std::fmt::Debug>(
    action: &'static str,
    result: std::result::Result<(), E>,
) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            tracing::error!(action, error = ?e, "Local storage write failed");
            false
        }
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Reactive handle to the cart, shared through context.
///
/// Every change goes through this handle so storage and the header count
/// stay in step.
#[derive(Clone, Copy)]
pub struct CartState {
    cart: RwSignal<Cart>,
}

impl CartState {
    /// Creates the cart state and provides it to child components.
    pub fn provide() -> Self {
        let state = Self {
            cart: RwSignal::new(Cart::new()),
        };
        provide_context(state);
        // Effects only run in the browser, after hydration.
        Effect::new(move || state.cart.set(load()));
        state
    }

    /// Gets the cart state provided by the app.
    pub fn expect() -> Self {
        expect_context::<Self>()
    }

    /// Reads the cart, tracking changes.
    pub fn with<R>(&self, f: impl FnOnce(&Cart) -> R) -> R {
        self.cart.with(f)
    }

    /// Reads the cart without tracking changes.
    pub fn with_untracked<R>(&self, f: impl FnOnce(&Cart) -> R) -> R {
        self.cart.with_untracked(f)
    }

    /// Changes the cart and persists the result.
    pub fn update(&self, f: impl FnOnce(&mut Cart)) {
        self.cart.update(f);
        self.cart.with_untracked(save);
    }

    /// Empties the cart and its storage.
    pub fn clear(&self) {
        self.cart.update(Cart::clear);
        remove();
    }
}

#[cfg(all(test, not(feature = "hydrate")))]
mod tests {
    use super::*;

    #[test]
    fn server_side_cart_is_empty() {
        assert!(load().is_empty());
    }

    #[test]
    fn failed_storage_writes_are_reported() {
        assert!(logged_write::<String>("save cart", Ok(())));
        assert!(!logged_write("remove cart", Err("quota exceeded")));
    }
}
