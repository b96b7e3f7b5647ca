use yew::prelude::*;

use crate::components::Link;
use crate::hooks::use_cart;
use crate::routes::Route;

#[derive(Properties, PartialEq, Clone)]
pub struct HeaderProps {
    pub route: Route,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let cart = use_cart();
    let count = cart.item_count();
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let nav_link = |to: Route, label: &str| {
        let active = std::mem::discriminant(&to) == std::mem::discriminant(&props.route);
        html! {
            <Link to={to} class={classes!("nav-link", active.then_some("active"))}>{label.to_string()}</Link>
        }
    };

    html! {
        <header class="site-header">
            <div class="header-inner">
                <Link to={Route::Home} class={classes!("brand")}>
                    <span class="brand-icon">{"🍔"}</span>
                    <span class="brand-name">{"Foodie"}</span>
                </Link>
                <button class="btn-menu" onclick={toggle_menu} aria-label="Toggle navigation">{"☰"}</button>
                <nav class={classes!("main-nav", menu_open.then_some("open"))}>
                    {nav_link(Route::Home, "Home")}
                    {nav_link(Route::listing(), "Restaurants")}
                    {nav_link(Route::UserProfile, "My Account")}
                </nav>
                <Link to={Route::Cart} class={classes!("cart-link")}>
                    <span class="cart-icon">{"🛒"}</span>
                    if count > 0 {
                        <span class="cart-badge">{count}</span>
                    }
                </Link>
            </div>
        </header>
    }
}
