// ============================================================================
// USER PROFILE VIEW - Account tabs
// ============================================================================

use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::Link;
use crate::hooks::use_toast;
use crate::models::{demo, AddressBook, NotificationPreferences, UserProfile};
use crate::routes::Route;
use crate::services::{save_notification_preferences, save_profile};
use crate::stores::{Toast, ToastKind};
use crate::utils::format_price;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProfileTab {
    Profile,
    Addresses,
    Payments,
    Orders,
    Notifications,
    Help,
}

impl ProfileTab {
    pub const ALL: [ProfileTab; 6] = [
        ProfileTab::Profile,
        ProfileTab::Addresses,
        ProfileTab::Payments,
        ProfileTab::Orders,
        ProfileTab::Notifications,
        ProfileTab::Help,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProfileTab::Profile => "Profile",
            ProfileTab::Addresses => "Addresses",
            ProfileTab::Payments => "Payment Methods",
            ProfileTab::Orders => "Order History",
            ProfileTab::Notifications => "Notifications",
            ProfileTab::Help => "Help",
        }
    }
}

#[derive(Clone, Copy, PartialEq)]
enum ProfileField {
    Name,
    Email,
    Phone,
}

#[function_component(UserProfileView)]
pub fn user_profile_view() -> Html {
    let tab = use_state(|| ProfileTab::Profile);
    let profile = use_state(demo::user_profile);
    let address_book = use_state(|| AddressBook::new(demo::saved_addresses()));
    let cards = use_state(demo::saved_cards);
    let orders = use_memo((), |_| demo::order_history());
    let preferences = use_state(demo::notification_preferences);
    let toast = use_toast();

    use_effect_with((), |_| {
        log::info!("👤 Profile page mounted");
        || ()
    });

    let tabs = html! {
        <nav class="profile-tabs">
            { for ProfileTab::ALL.iter().map(|t| {
                let onclick = {
                    let tab = tab.clone();
                    let t = *t;
                    Callback::from(move |_: MouseEvent| tab.set(t))
                };
                html! {
                    <button class={classes!("tab", (*tab == *t).then_some("active"))} {onclick}>{t.label()}</button>
                }
            }) }
        </nav>
    };

    let content = match *tab {
        ProfileTab::Profile => {
            let on_field = |field: ProfileField| {
                let profile = profile.clone();
                Callback::from(move |e: InputEvent| {
                    let value = e.target_unchecked_into::<HtmlInputElement>().value();
                    let mut next = (*profile).clone();
                    match field {
                        ProfileField::Name => next.name = value,
                        ProfileField::Email => next.email = value,
                        ProfileField::Phone => next.phone = value,
                    }
                    profile.set(next);
                })
            };
            let on_save = {
                let profile = profile.clone();
                let show = toast.show.clone();
                Callback::from(move |e: SubmitEvent| {
                    e.prevent_default();
                    let saved: UserProfile = save_profile(&profile);
                    profile.set(saved);
                    show.emit(Toast::new(ToastKind::Success, "Profile updated", "Your details have been saved."));
                })
            };
            html! {
                <form class="card profile-form" onsubmit={on_save}>
                    <div class="avatar">
                        <img src={profile.avatar_url.clone()} alt={profile.initials()} />
                        <span class="avatar-initials">{profile.initials()}</span>
                    </div>
                    <label class="form-field">
                        <span>{"Full name"}</span>
                        <input type="text" value={profile.name.clone()} oninput={on_field(ProfileField::Name)} />
                    </label>
                    <label class="form-field">
                        <span>{"Email"}</span>
                        <input type="email" value={profile.email.clone()} oninput={on_field(ProfileField::Email)} />
                    </label>
                    <label class="form-field">
                        <span>{"Phone"}</span>
                        <input type="tel" value={profile.phone.clone()} oninput={on_field(ProfileField::Phone)} />
                    </label>
                    <button type="submit" class="btn btn-primary">{"Save changes"}</button>
                </form>
            }
        }
        ProfileTab::Addresses => html! {
            <div class="card address-list">
                if address_book.addresses().is_empty() {
                    <p class="empty-state">{"No saved addresses."}</p>
                }
                { for address_book.addresses().iter().map(|a| {
                    let on_default = {
                        let address_book = address_book.clone();
                        let id = a.id.clone();
                        Callback::from(move |_: MouseEvent| {
                            let mut next = (*address_book).clone();
                            if next.set_default(&id) {
                                address_book.set(next);
                            }
                        })
                    };
                    let on_delete = {
                        let address_book = address_book.clone();
                        let id = a.id.clone();
                        Callback::from(move |_: MouseEvent| {
                            let mut next = (*address_book).clone();
                            if let Some(removed) = next.remove(&id) {
                                log::info!("🗑️ Address {} removed", removed.id);
                                address_book.set(next);
                            }
                        })
                    };
                    html! {
                        <div key={a.id.clone()} class={classes!("address-item", a.is_default.then_some("default"))}>
                            <div>
                                <strong>{a.label.clone()}</strong>
                                if a.is_default {
                                    <span class="badge">{"Default"}</span>
                                }
                                <p>{format!("{}, {}, {} {}", a.street, a.city, a.state, a.zip)}</p>
                            </div>
                            <div class="item-actions">
                                if !a.is_default {
                                    <button class="btn btn-link" onclick={on_default}>{"Set as default"}</button>
                                }
                                <button class="btn btn-link danger" onclick={on_delete}>{"Delete"}</button>
                            </div>
                        </div>
                    }
                }) }
            </div>
        },
        ProfileTab::Payments => html! {
            <div class="card payment-list">
                if cards.is_empty() {
                    <p class="empty-state">{"No saved payment methods."}</p>
                }
                { for cards.iter().map(|c| {
                    let on_delete = {
                        let cards = cards.clone();
                        let id = c.id.clone();
                        Callback::from(move |_: MouseEvent| {
                            let next: Vec<_> = cards.iter().filter(|card| card.id != id).cloned().collect();
                            cards.set(next);
                        })
                    };
                    html! {
                        <div key={c.id.clone()} class="payment-item">
                            <span>{format!("{} •••• {}", c.brand, c.last4)}</span>
                            <span class="muted">{format!("Expires {}", c.expiry)}</span>
                            <button class="btn btn-link danger" onclick={on_delete}>{"Remove"}</button>
                        </div>
                    }
                }) }
            </div>
        },
        ProfileTab::Orders => html! {
            <div class="card order-history">
                { for orders.iter().map(|o| html! {
                    <div key={o.id.clone()} class="order-item">
                        <div>
                            <strong>{o.restaurant.clone()}</strong>
                            <p class="muted">{format!("{} • {} items • {}", o.date, o.items, format_price(o.total))}</p>
                        </div>
                        <span class={classes!("badge", o.status.label().to_lowercase())}>{o.status.label()}</span>
                        <Link to={Route::OrderTracking { order_id: Some(o.id.clone()) }} class={classes!("btn", "btn-link")}>
                            {"View details"}
                        </Link>
                    </div>
                }) }
            </div>
        },
        ProfileTab::Notifications => {
            let toggle = |apply: fn(&mut NotificationPreferences, bool)| {
                let preferences = preferences.clone();
                Callback::from(move |e: Event| {
                    let mut next = *preferences;
                    apply(&mut next, e.target_unchecked_into::<HtmlInputElement>().checked());
                    preferences.set(next);
                })
            };
            let on_save = {
                let preferences = preferences.clone();
                let show = toast.show.clone();
                Callback::from(move |_: MouseEvent| {
                    save_notification_preferences(&preferences);
                    show.emit(Toast::new(ToastKind::Success, "Preferences saved", "Notification settings updated."));
                })
            };
            html! {
                <div class="card notification-settings">
                    <label class="switch">
                        <input type="checkbox" checked={preferences.email} onchange={toggle(|p, v| p.email = v)} />
                        {"Email notifications"}
                    </label>
                    <label class="switch">
                        <input type="checkbox" checked={preferences.push} onchange={toggle(|p, v| p.push = v)} />
                        {"Push notifications"}
                    </label>
                    <label class="switch">
                        <input type="checkbox" checked={preferences.sms} onchange={toggle(|p, v| p.sms = v)} />
                        {"SMS notifications"}
                    </label>
                    <button class="btn btn-primary" onclick={on_save}>{"Save preferences"}</button>
                </div>
            }
        }
        ProfileTab::Help => html! {
            <div class="card help">
                <h3>{"Need help?"}</h3>
                <p>{"Email us at "}<a href="mailto:support@foodieapp.com">{"support@foodieapp.com"}</a></p>
                <p>{"Call us at "}<a href="tel:1-800-555-3663">{"1-800-555-FOOD"}</a></p>
            </div>
        },
    };

    html! {
        <div class="page profile-page">
            <h1>{"My Account"}</h1>
            {tabs}
            <section class="profile-content">{content}</section>
        </div>
    }
}
