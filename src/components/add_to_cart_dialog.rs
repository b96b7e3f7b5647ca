use yew::prelude::*;

use crate::models::cart::MIN_QUANTITY;
use crate::models::Dish;
use crate::utils::format_price;

#[derive(Properties, PartialEq, Clone)]
pub struct AddToCartDialogProps {
    pub dish: Dish,
    pub on_confirm: Callback<(Dish, u32)>,
    pub on_close: Callback<()>,
}

/// Quantity picker shown before a dish goes into the cart
#[function_component(AddToCartDialog)]
pub fn add_to_cart_dialog(props: &AddToCartDialogProps) -> Html {
    let quantity = use_state(|| MIN_QUANTITY);

    let decrement = {
        let quantity = quantity.clone();
        Callback::from(move |_: MouseEvent| quantity.set(quantity.saturating_sub(1).max(MIN_QUANTITY)))
    };
    let increment = {
        let quantity = quantity.clone();
        Callback::from(move |_: MouseEvent| quantity.set(quantity.saturating_add(1)))
    };
    let confirm = {
        let quantity = quantity.clone();
        let dish = props.dish.clone();
        let cb = props.on_confirm.clone();
        Callback::from(move |_: MouseEvent| cb.emit((dish.clone(), *quantity)))
    };
    let close = {
        let cb = props.on_close.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="modal-backdrop" onclick={close.clone()}>
            <div class="modal" role="dialog" aria-modal="true" onclick={keep_open}>
                <div class="modal-header">
                    <h3>{props.dish.name.clone()}</h3>
                    <button class="btn-close" onclick={close.clone()} aria-label="Close">{"×"}</button>
                </div>
                <img class="modal-image" src={props.dish.image_url.clone()} alt={props.dish.name.clone()} />
                <p>{props.dish.description.clone()}</p>
                <div class="quantity-stepper">
                    <button class="btn-qty" onclick={decrement} disabled={*quantity <= MIN_QUANTITY}>{"−"}</button>
                    <span class="qty-value">{*quantity}</span>
                    <button class="btn-qty" onclick={increment}>{"+"}</button>
                </div>
                <div class="modal-footer">
                    <button class="btn btn-secondary" onclick={close}>{"Cancel"}</button>
                    <button class="btn btn-primary" onclick={confirm}>
                        {format!("Add to cart • {}", format_price(props.dish.line_price(*quantity)))}
                    </button>
                </div>
            </div>
        </div>
    }
}
