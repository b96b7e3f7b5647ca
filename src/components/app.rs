// ============================================================================
// APP - Root component: providers, layout and page switch
// ============================================================================

use yew::prelude::*;

use crate::components::{Footer, Header, ToastArea};
use crate::hooks::{use_route, CartProvider, ToastProvider};
use crate::routes::Route;
use crate::views::{
    CartView, CheckoutView, HomeView, NotFoundView, OrderTrackingView, RestaurantListingView, RestaurantMenuView,
    UserProfileView,
};

fn switch(route: &Route) -> Html {
    match route.clone() {
        Route::Home => html! { <HomeView /> },
        Route::RestaurantListing { search, cuisine } => html! { <RestaurantListingView {search} {cuisine} /> },
        Route::RestaurantMenu { slug } => html! { <RestaurantMenuView {slug} /> },
        Route::Cart => html! { <CartView /> },
        Route::Checkout => html! { <CheckoutView /> },
        Route::OrderTracking { order_id } => html! { <OrderTrackingView {order_id} /> },
        Route::UserProfile => html! { <UserProfileView /> },
        Route::NotFound => html! { <NotFoundView /> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let route = use_route();

    {
        let title = route.title();
        use_effect_with(title, |title| {
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                document.set_title(&format!("{} | Foodie", title));
            }
            || ()
        });
    }

    html! {
        <CartProvider>
            <ToastProvider>
                <div class="app">
                    <Header route={(*route).clone()} />
                    <main class="app-main">
                        {switch(&route)}
                    </main>
                    <Footer />
                    <ToastArea />
                </div>
            </ToastProvider>
        </CartProvider>
    }
}
