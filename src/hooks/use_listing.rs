use yew::prelude::*;

use crate::config::CONFIG;
use crate::models::{demo, Restaurant};
use crate::viewmodels::{ListingQuery, ListingState, Page, SortKey};

pub struct UseListingHandle {
    pub state: UseStateHandle<ListingState>,
    pub page: Page<Restaurant>,
    pub set_search: Callback<String>,
    pub set_open_now: Callback<bool>,
    pub set_free_delivery: Callback<bool>,
    pub set_sort: Callback<SortKey>,
    pub reset: Callback<()>,
    pub go_to_page: Callback<usize>,
}

/// Callback that edits a copy of the state and stores it
fn updater<T: 'static>(
    state: &UseStateHandle<ListingState>,
    apply: impl Fn(&mut ListingState, T) + 'static,
) -> Callback<T> {
    let state = state.clone();
    Callback::from(move |value: T| {
        let mut next = (*state).clone();
        apply(&mut next, value);
        state.set(next);
    })
}

/// Listing state seeded from the URL query; re-seeded when the URL changes
#[hook]
pub fn use_listing(initial: ListingQuery) -> UseListingHandle {
    let page_size = CONFIG.listing_config.page_size;
    let restaurants = use_memo((), |_| demo::listing_restaurants());
    let state = use_state(|| ListingState::new(initial.clone(), page_size));

    {
        let state = state.clone();
        use_effect_with(initial, move |query| {
            if state.query.search != query.search || state.query.cuisine != query.cuisine {
                state.set(ListingState::new(query.clone(), page_size));
            }
            || ()
        });
    }

    let page = state.view(&restaurants);

    let set_search = updater(&state, |s, v: String| s.set_search(v));
    let set_open_now = updater(&state, |s, v: bool| s.set_open_now(v));
    let set_free_delivery = updater(&state, |s, v: bool| s.set_free_delivery(v));
    let set_sort = updater(&state, |s, v: SortKey| {
        log::debug!("↕️ Sorting by {}", v.value());
        s.set_sort(v)
    });
    let reset = updater(&state, |s, _: ()| s.reset());

    let go_to_page = {
        let state = state.clone();
        let total_pages = page.total_pages;
        Callback::from(move |target: usize| {
            let mut next = (*state).clone();
            if next.go_to_page(target, total_pages) {
                state.set(next);
            }
        })
    };

    UseListingHandle {
        state,
        page,
        set_search,
        set_open_now,
        set_free_delivery,
        set_sort,
        reset,
        go_to_page,
    }
}
