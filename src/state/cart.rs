//! Shopping cart state, refreshed after sign-in.
//!
//! The auth machine never calls the cart service. It bumps a sign-in
//! generation counter and this module subscribes; the fetch is
//! fire-and-forget, so a failure logs and leaves the cart empty.

#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

use leptos::prelude::*;

use crate::net::types::CartItem;
use crate::state::auth::Auth;

/// Cart contents for the nav badge and checkout screens.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CartState {
    pub items: Vec<CartItem>,
    pub loading: bool,
}

impl CartState {
    /// Number of items, shown as the nav badge.
    #[must_use]
    pub fn count(&self) -> usize {
        self.items.len()
    }
}

/// Refresh the cart every time the sign-in counter advances.
pub fn subscribe_to_sign_in(auth: Auth, cart: RwSignal<CartState>) {
    Effect::new(move || {
        if auth.signed_in().get() == 0 {
            return;
        }
        cart.update(|c| c.loading = true);
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_cart().await {
                Ok(items) => cart.set(CartState {
                    items,
                    loading: false,
                }),
                Err(err) => {
                    leptos::logging::warn!("cart fetch failed: {err}");
                    cart.update(|c| c.loading = false);
                }
            }
        });
    });
}
