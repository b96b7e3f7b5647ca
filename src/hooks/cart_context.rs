// ============================================================================
// CART CONTEXT - One cart shared by every page
// ============================================================================
// Created seeded when the app mounts; read and written by the menu, cart and
// checkout pages; cleared when an order is confirmed.
// ============================================================================

use yew::prelude::*;

use crate::stores::CartStore;

pub type CartContext = UseReducerHandle<CartStore>;

#[derive(Properties, PartialEq)]
pub struct CartProviderProps {
    pub children: Children,
}

#[function_component(CartProvider)]
pub fn cart_provider(props: &CartProviderProps) -> Html {
    let cart = use_reducer(CartStore::seeded);

    html! {
        <ContextProvider<CartContext> context={cart}>
            {props.children.clone()}
        </ContextProvider<CartContext>>
    }
}

/// The shared cart; outside a provider a detached empty cart is used
#[hook]
pub fn use_cart() -> CartContext {
    let shared = use_context::<CartContext>();
    let detached = use_reducer(CartStore::default);

    shared.unwrap_or_else(|| {
        log::warn!("⚠️ use_cart called outside CartProvider, using a detached cart");
        detached
    })
}
