// ============================================================================
// CART VIEW - Line items, special instructions, summary
// ============================================================================

use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::{Link, OrderSummary};
use crate::hooks::{use_cart, use_navigator};
use crate::models::cart::MIN_QUANTITY;
use crate::routes::Route;
use crate::stores::CartAction;
use crate::utils::format_price;

/// Raw quantity input; anything that is not a number counts as the minimum
pub fn parse_quantity(raw: &str) -> i64 {
    raw.trim().parse().unwrap_or(MIN_QUANTITY as i64)
}

#[function_component(CartView)]
pub fn cart_view() -> Html {
    let cart = use_cart();
    let navigator = use_navigator();
    let totals = cart.totals();

    use_effect_with((), |_| {
        log::info!("🛒 Cart page mounted");
        || ()
    });

    if cart.is_empty() {
        return html! {
            <div class="page cart-page">
                <div class="empty-state">
                    <span class="empty-icon">{"🛒"}</span>
                    <h2>{"Your cart is empty"}</h2>
                    <p>{"Looks like you haven't added anything yet."}</p>
                    <Link to={Route::listing()} class={classes!("btn", "btn-primary")}>{"Start shopping"}</Link>
                </div>
            </div>
        };
    }

    let on_instructions = {
        let cart = cart.clone();
        Callback::from(move |e: InputEvent| {
            let text = e.target_unchecked_into::<HtmlTextAreaElement>().value();
            cart.dispatch(CartAction::SetInstructions(text));
        })
    };
    let on_checkout = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| navigator.emit(Route::Checkout))
    };

    html! {
        <div class="page cart-page">
            <h1>{"Your Cart"}</h1>
            <div class="cart-layout">
                <section class="cart-items">
                    { for cart.items.iter().map(|item| {
                        let id = item.id().to_string();
                        let dispatch = |action: CartAction| {
                            let cart = cart.clone();
                            Callback::from(move |_: MouseEvent| cart.dispatch(action.clone()))
                        };
                        let on_quantity = {
                            let cart = cart.clone();
                            let dish_id = id.clone();
                            Callback::from(move |e: Event| {
                                let raw = e.target_unchecked_into::<HtmlInputElement>().value();
                                cart.dispatch(CartAction::SetQuantity {
                                    dish_id: dish_id.clone(),
                                    quantity: parse_quantity(&raw),
                                });
                            })
                        };
                        html! {
                            <div key={id.clone()} class="cart-item">
                                <img src={item.dish.image_url.clone()} alt={item.dish.name.clone()} />
                                <div class="cart-item-info">
                                    <h4>{item.dish.name.clone()}</h4>
                                    <span class="unit-price">{format_price(item.dish.price)}</span>
                                </div>
                                <div class="quantity-stepper">
                                    <button
                                        class="btn-qty"
                                        disabled={item.quantity <= MIN_QUANTITY}
                                        onclick={dispatch(CartAction::Decrement(id.clone()))}
                                    >
                                        {"−"}
                                    </button>
                                    <input
                                        type="number"
                                        min="1"
                                        value={item.quantity.to_string()}
                                        onchange={on_quantity}
                                    />
                                    <button class="btn-qty" onclick={dispatch(CartAction::Increment(id.clone()))}>{"+"}</button>
                                </div>
                                <span class="line-total">{format_price(item.line_total())}</span>
                                <button class="btn-remove" onclick={dispatch(CartAction::Remove(id.clone()))} aria-label="Remove">
                                    {"🗑"}
                                </button>
                            </div>
                        }
                    }) }

                    <label class="instructions">
                        {"Special instructions"}
                        <textarea
                            placeholder="Any allergies or delivery notes?"
                            value={cart.special_instructions.clone()}
                            oninput={on_instructions}
                        />
                    </label>
                </section>

                <OrderSummary totals={totals.clone()}>
                    <button class="btn btn-primary btn-block" disabled={totals.is_empty()} onclick={on_checkout}>
                        {"Proceed to checkout"}
                    </button>
                    <Link to={Route::listing()} class={classes!("btn", "btn-link")}>{"Continue shopping"}</Link>
                </OrderSummary>
            </div>
        </div>
    }
}
