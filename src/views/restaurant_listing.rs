// ============================================================================
// RESTAURANT LISTING VIEW - Filters, sort, pagination
// ============================================================================

use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::{Pagination, RestaurantCard};
use crate::hooks::use_listing;
use crate::viewmodels::{ListingQuery, SortKey};

#[derive(Properties, PartialEq, Clone)]
pub struct RestaurantListingViewProps {
    #[prop_or_default]
    pub search: Option<String>,
    #[prop_or_default]
    pub cuisine: Option<String>,
}

#[function_component(RestaurantListingView)]
pub fn restaurant_listing_view(props: &RestaurantListingViewProps) -> Html {
    let listing = use_listing(ListingQuery {
        search: props.search.clone().unwrap_or_default(),
        cuisine: props.cuisine.clone(),
        ..ListingQuery::default()
    });
    let query = &listing.state.query;
    let page = &listing.page;

    use_effect_with((), |_| {
        log::info!("📋 Restaurant listing mounted");
        || ()
    });

    let on_search = {
        let cb = listing.set_search.clone();
        Callback::from(move |e: InputEvent| cb.emit(e.target_unchecked_into::<HtmlInputElement>().value()))
    };
    let on_open_now = {
        let cb = listing.set_open_now.clone();
        Callback::from(move |e: Event| cb.emit(e.target_unchecked_into::<HtmlInputElement>().checked()))
    };
    let on_free_delivery = {
        let cb = listing.set_free_delivery.clone();
        Callback::from(move |e: Event| cb.emit(e.target_unchecked_into::<HtmlInputElement>().checked()))
    };
    let on_sort = {
        let cb = listing.set_sort.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            if let Some(key) = SortKey::from_value(&value) {
                cb.emit(key);
            }
        })
    };
    let on_reset = {
        let cb = listing.reset.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    let heading = match &query.cuisine {
        Some(cuisine) => format!("{} Restaurants", cuisine),
        None => "All Restaurants".to_string(),
    };

    html! {
        <div class="page listing-page">
            <h1>{heading}</h1>
            <div class="listing-layout">
                <aside class="filters">
                    <input
                        type="search"
                        placeholder="Search by name or cuisine"
                        value={query.search.clone()}
                        oninput={on_search}
                    />
                    <label class="checkbox">
                        <input type="checkbox" checked={query.open_now} onchange={on_open_now} />
                        {"Open now"}
                    </label>
                    <label class="checkbox">
                        <input type="checkbox" checked={query.free_delivery} onchange={on_free_delivery} />
                        {"Free delivery"}
                    </label>
                    <label class="select">
                        {"Sort by"}
                        <select onchange={on_sort}>
                            { for SortKey::ALL.iter().map(|key| html! {
                                <option value={key.value()} selected={*key == query.sort}>{key.label()}</option>
                            }) }
                        </select>
                    </label>
                    <button class="btn btn-secondary" onclick={on_reset}>{"Reset filters"}</button>
                </aside>

                <section class="results">
                    <p class="result-count">{format!("{} restaurants found", page.total_results)}</p>
                    if page.items.is_empty() {
                        <div class="empty-state">
                            <p>{"No restaurants match your filters."}</p>
                        </div>
                    } else {
                        <div class="restaurant-grid">
                            { for page.items.iter().map(|r| html! {
                                <RestaurantCard key={r.id.clone()} restaurant={r.clone()} show_status={true} />
                            }) }
                        </div>
                    }
                    <Pagination
                        page={page.page}
                        total_pages={page.total_pages}
                        on_page={listing.go_to_page.clone()}
                    />
                </section>
            </div>
        </div>
    }
}
