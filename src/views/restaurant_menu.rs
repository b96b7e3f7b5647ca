// ============================================================================
// RESTAURANT MENU VIEW - Categories, dishes, add-to-cart dialog
// ============================================================================

use yew::prelude::*;

use crate::components::{AddToCartDialog, DishCard};
use crate::hooks::{use_cart, use_toast};
use crate::models::{demo, Dish};
use crate::routes::Route;
use crate::stores::{CartAction, Toast, ToastKind};
use crate::utils::format_rating;

#[derive(Properties, PartialEq, Clone)]
pub struct RestaurantMenuViewProps {
    #[prop_or_default]
    pub slug: Option<String>,
}

#[function_component(RestaurantMenuView)]
pub fn restaurant_menu_view(props: &RestaurantMenuViewProps) -> Html {
    let menu = use_memo((), |_| demo::restaurant_menu());
    let cart = use_cart();
    let toast = use_toast();
    let active_category = use_state(|| menu.categories.first().map(|c| c.id.clone()));
    let dialog_dish = use_state(|| None::<Dish>);

    {
        let slug = props.slug.clone();
        use_effect_with(slug, |slug| {
            log::info!("🍽️ Menu mounted for slug {:?}", slug);
            || ()
        });
    }

    let on_add = {
        let dialog_dish = dialog_dish.clone();
        Callback::from(move |dish: Dish| dialog_dish.set(Some(dish)))
    };
    let on_close = {
        let dialog_dish = dialog_dish.clone();
        Callback::from(move |_: ()| dialog_dish.set(None))
    };
    let on_confirm = {
        let dialog_dish = dialog_dish.clone();
        let cart = cart.clone();
        let show = toast.show.clone();
        Callback::from(move |(dish, quantity): (Dish, u32)| {
            let message = format!("{} x {} added to your cart.", quantity, dish.name);
            cart.dispatch(CartAction::Add { dish, quantity });
            show.emit(Toast::new(ToastKind::Success, "Added to cart", message).with_action("View cart", Route::Cart));
            dialog_dish.set(None);
        })
    };

    let category = menu
        .categories
        .iter()
        .find(|c| Some(&c.id) == (*active_category).as_ref())
        .or_else(|| menu.categories.first());

    html! {
        <div class="page menu-page">
            <section class="menu-hero" style={format!("background-image: url('{}')", menu.image_url)}>
                <div class="menu-hero-content">
                    <h1>{menu.name.clone()}</h1>
                    <div class="cuisine-badges">
                        { for menu.cuisine_types.iter().map(|c| html! { <span class="badge">{c.clone()}</span> }) }
                    </div>
                    <div class="restaurant-meta">
                        <span class="rating">{"★ "}{format_rating(menu.rating)}</span>
                        <span class="delivery-time">{"🕒 "}{menu.delivery_time.clone()}</span>
                        <span class="address">{"📍 "}{menu.address.clone()}</span>
                    </div>
                    <p class="menu-description">{menu.description.clone()}</p>
                </div>
            </section>

            <nav class="category-tabs">
                { for menu.categories.iter().map(|c| {
                    let is_active = category.map_or(false, |active| active.id == c.id);
                    let onclick = {
                        let active_category = active_category.clone();
                        let id = c.id.clone();
                        Callback::from(move |_: MouseEvent| active_category.set(Some(id.clone())))
                    };
                    html! {
                        <button key={c.id.clone()} class={classes!("tab", is_active.then_some("active"))} {onclick}>
                            <span class="tab-icon">{c.icon.clone()}</span>
                            {c.name.clone()}
                        </button>
                    }
                }) }
            </nav>

            if let Some(category) = category {
                <section class="dish-grid">
                    { for category.dishes.iter().map(|dish| html! {
                        <DishCard key={dish.id.clone()} dish={dish.clone()} on_add={on_add.clone()} />
                    }) }
                </section>
            }

            if let Some(dish) = (*dialog_dish).clone() {
                <AddToCartDialog {dish} {on_confirm} {on_close} />
            }
        </div>
    }
}
