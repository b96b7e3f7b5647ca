use yew::prelude::*;

use crate::models::Dish;
use crate::utils::format_price;

#[derive(Properties, PartialEq, Clone)]
pub struct DishCardProps {
    pub dish: Dish,
    pub on_add: Callback<Dish>,
}

#[function_component(DishCard)]
pub fn dish_card(props: &DishCardProps) -> Html {
    let d = &props.dish;

    let on_add_click = {
        let dish = d.clone();
        let cb = props.on_add.clone();
        Callback::from(move |_: MouseEvent| {
            if dish.is_available {
                cb.emit(dish.clone());
            }
        })
    };

    html! {
        <div class={classes!("dish-card", (!d.is_available).then_some("unavailable"))}>
            <img class="dish-image" src={d.image_url.clone()} alt={d.name.clone()} loading="lazy" />
            <div class="dish-body">
                <div class="dish-header">
                    <h4 class="dish-name">{d.name.clone()}</h4>
                    <span class="dish-price">{format_price(d.price)}</span>
                </div>
                <p class="dish-description">{d.description.clone()}</p>
                <div class="dish-tags">
                    { for d.dietary_tags.iter().map(|tag| html! { <span class="badge badge-tag">{tag.clone()}</span> }) }
                </div>
                <button class="btn btn-primary" disabled={!d.is_available} onclick={on_add_click}>
                    { if d.is_available { "Add to cart" } else { "Unavailable" } }
                </button>
            </div>
        </div>
    }
}
