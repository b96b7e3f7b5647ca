// ============================================================================
// CHECKOUT VIEW - Address, payment, promo code, place order
// ============================================================================

use gloo_timers::callback::Timeout;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::{Link, OrderSummary};
use crate::config::CONFIG;
use crate::error::{CheckoutError, CheckoutField, PromoError};
use crate::hooks::{use_cart, use_checkout_form, use_navigator, use_toast};
use crate::models::checkout::US_STATES;
use crate::models::{demo, AddressBook, AddressInput, AddressKind, PaymentInput, PaymentKind, PromoCode};
use crate::routes::Route;
use crate::services::place_order;
use crate::stores::{CartAction, Toast, ToastKind};
use crate::utils::format_price;

#[derive(Properties, PartialEq, Clone)]
struct FieldProps {
    label: AttrValue,
    field: CheckoutField,
    value: String,
    #[prop_or_default]
    placeholder: AttrValue,
    #[prop_or_default]
    error: Option<String>,
    on_change: Callback<(CheckoutField, String)>,
}

/// Text input with its inline error
#[function_component(FormField)]
fn form_field(props: &FieldProps) -> Html {
    let oninput = {
        let cb = props.on_change.clone();
        let field = props.field;
        Callback::from(move |e: InputEvent| cb.emit((field, e.target_unchecked_into::<HtmlInputElement>().value())))
    };

    html! {
        <label class={classes!("form-field", props.error.is_some().then_some("invalid"))}>
            <span>{props.label.clone()}</span>
            <input type="text" value={props.value.clone()} placeholder={props.placeholder.clone()} {oninput} />
            if let Some(error) = &props.error {
                <span class="field-error">{error.clone()}</span>
            }
        </label>
    }
}

#[function_component(CheckoutView)]
pub fn checkout_view() -> Html {
    let cart = use_cart();
    let toast = use_toast();
    let navigator = use_navigator();
    let address_book = use_memo((), |_| AddressBook::new(demo::saved_addresses()));
    let default_address = address_book.default_address().map(|a| a.id.clone());
    let checkout = use_checkout_form(default_address);
    let redirect = use_mut_ref(|| None::<Timeout>);
    let placed = use_state(|| false);

    {
        let redirect = redirect.clone();
        use_effect_with((), move |_| {
            log::info!("💳 Checkout page mounted");
            move || {
                // Cleanup: a pending redirect dies with the page
                redirect.borrow_mut().take();
            }
        });
    }

    let totals = cart.totals();
    let form = (*checkout.form).clone();

    // ---- Address ----
    let on_address_kind = |kind: AddressKind| {
        let cb = checkout.set_address_kind.clone();
        Callback::from(move |_: Event| cb.emit(kind))
    };
    let on_state = {
        let cb = checkout.set_field.clone();
        Callback::from(move |e: Event| {
            cb.emit((CheckoutField::State, e.target_unchecked_into::<HtmlSelectElement>().value()))
        })
    };

    let address_block = match &form.address {
        AddressInput::Saved { id } => html! {
            <div class="saved-addresses">
                { for address_book.addresses().iter().map(|a| {
                    let onchange = {
                        let cb = checkout.set_field.clone();
                        let value = a.id.clone();
                        Callback::from(move |_: Event| cb.emit((CheckoutField::SavedAddress, value.clone())))
                    };
                    html! {
                        <label key={a.id.clone()} class="radio-card">
                            <input type="radio" name="saved-address" checked={id.as_deref() == Some(a.id.as_str())} {onchange} />
                            <span>{a.one_line()}</span>
                        </label>
                    }
                }) }
                if let Some(error) = checkout.error(CheckoutField::SavedAddress) {
                    <span class="field-error">{error}</span>
                }
            </div>
        },
        AddressInput::New(address) => html! {
            <div class="new-address">
                <FormField label="Street" field={CheckoutField::Street} value={address.street.clone()}
                    placeholder="123 Main St" error={checkout.error(CheckoutField::Street)} on_change={checkout.set_field.clone()} />
                <FormField label="City" field={CheckoutField::City} value={address.city.clone()}
                    error={checkout.error(CheckoutField::City)} on_change={checkout.set_field.clone()} />
                <label class={classes!("form-field", checkout.error(CheckoutField::State).is_some().then_some("invalid"))}>
                    <span>{"State"}</span>
                    <select onchange={on_state}>
                        <option value="" selected={address.state.is_empty()}>{"Select state"}</option>
                        { for US_STATES.iter().map(|s| html! {
                            <option value={*s} selected={address.state == *s}>{*s}</option>
                        }) }
                    </select>
                    if let Some(error) = checkout.error(CheckoutField::State) {
                        <span class="field-error">{error}</span>
                    }
                </label>
                <FormField label="ZIP code" field={CheckoutField::Zip} value={address.zip.clone()}
                    placeholder="12345" error={checkout.error(CheckoutField::Zip)} on_change={checkout.set_field.clone()} />
            </div>
        },
    };

    // ---- Payment ----
    let payment_block = match &form.payment {
        PaymentInput::Card(card) => html! {
            <div class="card-fields">
                <FormField label="Card number" field={CheckoutField::CardNumber} value={card.number.clone()}
                    placeholder="1234567812345678" error={checkout.error(CheckoutField::CardNumber)} on_change={checkout.set_field.clone()} />
                <FormField label="Expiry (MM/YY)" field={CheckoutField::CardExpiry} value={card.expiry.clone()}
                    placeholder="MM/YY" error={checkout.error(CheckoutField::CardExpiry)} on_change={checkout.set_field.clone()} />
                <FormField label="CVV" field={CheckoutField::CardCvv} value={card.cvv.clone()}
                    placeholder="123" error={checkout.error(CheckoutField::CardCvv)} on_change={checkout.set_field.clone()} />
            </div>
        },
        PaymentInput::Wallet => html! { <p class="payment-note">{"You will be redirected to PayPal after placing the order."}</p> },
        PaymentInput::Cash => html! { <p class="payment-note">{"Please have the exact amount ready for the rider."}</p> },
    };

    // ---- Promo ----
    let on_promo_input = {
        let cb = checkout.set_promo_code.clone();
        Callback::from(move |e: InputEvent| cb.emit(e.target_unchecked_into::<HtmlInputElement>().value()))
    };
    let on_apply_promo = {
        let cart = cart.clone();
        let show = toast.show.clone();
        let code = form.promo_code.clone();
        Callback::from(move |_: MouseEvent| match PromoCode::parse(&code) {
            Ok(promo) => {
                let message = format!("{} off your subtotal.", promo.percent_label());
                cart.dispatch(CartAction::ApplyPromo(promo));
                show.emit(Toast::new(ToastKind::Success, "Promo code applied", message));
            }
            Err(PromoError::Empty) => {
                show.emit(Toast::new(ToastKind::Info, "Promo code", PromoError::Empty.to_string()));
            }
            Err(e @ PromoError::Invalid(_)) => {
                log::warn!("🚫 Rejected promo code {:?}", code.trim());
                cart.dispatch(CartAction::ClearPromo);
                show.emit(Toast::new(ToastKind::Error, "Promo code", e.to_string()));
            }
        })
    };

    // ---- Submit ----
    let on_place_order = {
        let cart = cart.clone();
        let show = toast.show.clone();
        let mark_submitted = checkout.mark_submitted.clone();
        let redirect = redirect.clone();
        let placed = placed.clone();
        let form = form.clone();
        Callback::from(move |_: MouseEvent| {
            mark_submitted.emit(());
            match place_order(&form, &cart.items, cart.promo.as_ref(), &cart.special_instructions) {
                Ok(order) => {
                    cart.dispatch(CartAction::Clear);
                    placed.set(true);
                    show.emit(Toast::new(
                        ToastKind::Success,
                        "Order placed!",
                        format!("Order {} is on its way to the kitchen.", order.order_id),
                    ));

                    let navigator = navigator.clone();
                    let route = Route::OrderTracking {
                        order_id: Some(order.order_id),
                    };
                    *redirect.borrow_mut() = Some(Timeout::new(CONFIG.timer_config.redirect_delay_ms, move || {
                        navigator.emit(route);
                    }));
                }
                Err(CheckoutError::EmptyCart) => {
                    show.emit(Toast::new(ToastKind::Error, "Cannot place order", CheckoutError::EmptyCart.to_string()));
                }
                Err(CheckoutError::Invalid(_)) => {
                    show.emit(Toast::new(
                        ToastKind::Error,
                        "Cannot place order",
                        "Please fix the highlighted fields.",
                    ));
                }
            }
        })
    };

    if totals.is_empty() && !*placed {
        return html! {
            <div class="page checkout-page">
                <div class="empty-state">
                    <h2>{"Your cart is empty"}</h2>
                    <Link to={Route::listing()} class={classes!("btn", "btn-primary")}>{"Browse restaurants"}</Link>
                </div>
            </div>
        };
    }

    html! {
        <div class="page checkout-page">
            <h1>{"Checkout"}</h1>
            <div class="checkout-layout">
                <div class="checkout-forms">
                    <section class="card">
                        <h2>{"Delivery Address"}</h2>
                        <div class="radio-row">
                            <label>
                                <input type="radio" name="address-type" checked={form.address.kind() == AddressKind::Saved}
                                    onchange={on_address_kind(AddressKind::Saved)} />
                                {"Saved address"}
                            </label>
                            <label>
                                <input type="radio" name="address-type" checked={form.address.kind() == AddressKind::New}
                                    onchange={on_address_kind(AddressKind::New)} />
                                {"New address"}
                            </label>
                        </div>
                        {address_block}
                    </section>

                    <section class="card">
                        <h2>{"Payment Method"}</h2>
                        <div class="radio-row">
                            { for PaymentKind::ALL.iter().map(|kind| {
                                let onchange = {
                                    let cb = checkout.set_payment_kind.clone();
                                    let kind = *kind;
                                    Callback::from(move |_: Event| cb.emit(kind))
                                };
                                html! {
                                    <label key={kind.value()}>
                                        <input type="radio" name="payment" value={kind.value()}
                                            checked={form.payment.kind() == *kind} {onchange} />
                                        {kind.label()}
                                    </label>
                                }
                            }) }
                        </div>
                        {payment_block}
                    </section>

                    <section class="card promo-card">
                        <h2>{"Promo Code"}</h2>
                        <div class="promo-row">
                            <input type="text" placeholder="Enter promo code" value={form.promo_code.clone()} oninput={on_promo_input} />
                            <button class="btn btn-secondary" onclick={on_apply_promo}>{"Apply"}</button>
                        </div>
                        if let Some(promo) = &cart.promo {
                            <p class="promo-applied">{format!("{} applied: {} off", promo.code, promo.percent_label())}</p>
                        }
                    </section>
                </div>

                <OrderSummary totals={totals.clone()} promo_label={cart.promo.as_ref().map(|p| p.code.clone())}>
                    <ul class="summary-items">
                        { for cart.items.iter().map(|item| {
                            let on_remove = {
                                let cart = cart.clone();
                                let id = item.id().to_string();
                                Callback::from(move |_: MouseEvent| cart.dispatch(CartAction::Remove(id.clone())))
                            };
                            html! {
                                <li key={item.id().to_string()}>
                                    <span>{format!("{} x {}", item.quantity, item.dish.name)}</span>
                                    <span>{format_price(item.line_total())}</span>
                                    <button class="btn-remove" onclick={on_remove} aria-label="Remove">{"×"}</button>
                                </li>
                            }
                        }) }
                    </ul>
                    <button class="btn btn-primary btn-block" disabled={totals.is_empty() || *placed} onclick={on_place_order}>
                        { if *placed { "Redirecting..." } else { "Place order" } }
                    </button>
                </OrderSummary>
            </div>
        </div>
    }
}
