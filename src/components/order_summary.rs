use yew::prelude::*;

use crate::models::CartTotals;
use crate::utils::{format_discount, format_price};

#[derive(Properties, PartialEq, Clone)]
pub struct OrderSummaryProps {
    pub totals: CartTotals,
    #[prop_or_default]
    pub promo_label: Option<String>,
    #[prop_or_default]
    pub children: Children,
}

/// Totals block shared by the cart and checkout pages; children go below
#[function_component(OrderSummary)]
pub fn order_summary(props: &OrderSummaryProps) -> Html {
    let t = &props.totals;

    html! {
        <aside class="order-summary">
            <h3>{"Order Summary"}</h3>
            <div class="summary-row">
                <span>{format!("Subtotal ({} items)", t.item_count)}</span>
                <span>{format_price(t.subtotal)}</span>
            </div>
            <div class="summary-row">
                <span>{"Delivery fee"}</span>
                <span>{format_price(t.delivery_fee)}</span>
            </div>
            <div class="summary-row">
                <span>{"Taxes"}</span>
                <span>{format_price(t.tax)}</span>
            </div>
            if t.has_discount() {
                <div class="summary-row discount">
                    <span>{format!("Discount ({})", props.promo_label.clone().unwrap_or_default())}</span>
                    <span>{format_discount(t.discount)}</span>
                </div>
            }
            <div class="summary-row total">
                <span>{"Total"}</span>
                <span>{format_price(t.total)}</span>
            </div>
            {props.children.clone()}
        </aside>
    }
}
