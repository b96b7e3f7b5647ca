use yew::prelude::*;

use crate::components::Link;
use crate::models::Restaurant;
use crate::routes::Route;
use crate::utils::format_rating;

#[derive(Properties, PartialEq, Clone)]
pub struct RestaurantCardProps {
    pub restaurant: Restaurant,
    /// Listing cards show open/closed and delivery badges
    #[prop_or(false)]
    pub show_status: bool,
}

#[function_component(RestaurantCard)]
pub fn restaurant_card(props: &RestaurantCardProps) -> Html {
    let r = &props.restaurant;
    let to = Route::RestaurantMenu {
        slug: Some(r.slug.clone()),
    };

    let card_classes = classes!(
        "restaurant-card",
        (props.show_status && !r.is_open_now).then_some("closed"),
    );

    html! {
        <Link {to} class={card_classes}>
            <div class="restaurant-image">
                <img src={r.image_url.clone()} alt={r.name.clone()} loading="lazy" />
                if let Some(tag) = &r.promotion_tag {
                    <span class="promo-tag">{tag.clone()}</span>
                }
                if props.show_status && !r.is_open_now {
                    <span class="closed-overlay">{"Closed"}</span>
                }
            </div>
            <div class="restaurant-info">
                <h3 class="restaurant-name">{r.name.clone()}</h3>
                <p class="restaurant-cuisines">{r.cuisine_types.join(" • ")}</p>
                <div class="restaurant-meta">
                    <span class="rating">{"★ "}{format_rating(r.rating)}</span>
                    <span class="delivery-time">{"🕒 "}{r.delivery_time.clone()}</span>
                </div>
                if props.show_status {
                    <div class="restaurant-badges">
                        if r.is_open_now {
                            <span class="badge badge-open">{"Open now"}</span>
                        }
                        if r.has_free_delivery {
                            <span class="badge badge-free">{"Free delivery"}</span>
                        }
                    </div>
                }
            </div>
        </Link>
    }
}
