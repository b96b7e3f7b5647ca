// ============================================================================
// HOME VIEW - Search hero, cuisines, promotions, featured restaurants
// ============================================================================

use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::{CuisinePills, PromoBanner, RestaurantCard};
use crate::hooks::use_navigator;
use crate::models::demo;
use crate::routes::Route;

/// Listing route for the hero form; blank inputs are left out
pub fn search_route(search: &str, cuisine: Option<&str>) -> Route {
    let clean = |value: &str| Some(value.trim().to_string()).filter(|v| !v.is_empty());
    Route::RestaurantListing {
        search: clean(search),
        cuisine: cuisine.and_then(clean),
    }
}

#[function_component(HomeView)]
pub fn home_view() -> Html {
    let navigator = use_navigator();
    let search = use_state(String::new);
    let cuisine = use_state(|| None::<String>);
    let featured = use_memo((), |_| demo::featured_restaurants());
    let slides = use_memo((), |_| demo::promo_slides());

    use_effect_with((), |_| {
        log::info!("🏠 Home page mounted");
        || ()
    });

    let on_search_input = {
        let search = search.clone();
        Callback::from(move |e: InputEvent| {
            search.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let on_cuisine = {
        let cuisine = cuisine.clone();
        Callback::from(move |selected: Option<String>| cuisine.set(selected))
    };

    let on_submit = {
        let search = search.clone();
        let cuisine = cuisine.clone();
        let navigator = navigator.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            navigator.emit(search_route(&search, cuisine.as_deref()));
        })
    };

    html! {
        <div class="page home-page">
            <section class="hero">
                <h1>{"Delicious food, delivered to your door"}</h1>
                <p>{"Order from the best local restaurants with easy, on-demand delivery."}</p>
                <form class="hero-search" onsubmit={on_submit}>
                    <input
                        type="search"
                        placeholder="Search for restaurants or cuisines..."
                        value={(*search).clone()}
                        oninput={on_search_input}
                    />
                    <button type="submit" class="btn btn-primary">{"Find Food"}</button>
                </form>
                <CuisinePills
                    cuisines={demo::CUISINES.iter().map(|c| c.to_string()).collect::<Vec<_>>()}
                    selected={(*cuisine).clone()}
                    on_select={on_cuisine}
                />
            </section>

            <PromoBanner slides={(*slides).clone()} />

            <section class="featured">
                <h2>{"Featured Restaurants"}</h2>
                <div class="restaurant-grid">
                    { for featured.iter().map(|r| html! {
                        <RestaurantCard key={r.id.clone()} restaurant={r.clone()} />
                    }) }
                </div>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_route_omits_blank_values() {
        assert_eq!(search_route("  ", None), Route::listing());
        assert_eq!(
            search_route(" sushi ", Some("Japanese")),
            Route::RestaurantListing {
                search: Some("sushi".into()),
                cuisine: Some("Japanese".into()),
            }
        );
        assert_eq!(search_route("", Some(" ")), Route::listing());
    }
}
