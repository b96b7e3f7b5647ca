use yew::prelude::*;

use crate::components::Link;
use crate::routes::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="footer-links">
                <Link to={Route::Home}>{"Home"}</Link>
                <Link to={Route::listing()}>{"Restaurants"}</Link>
                <Link to={Route::Cart}>{"Cart"}</Link>
                <Link to={Route::UserProfile}>{"My Account"}</Link>
            </div>
            <p class="footer-note">{"© Foodie. Demo application, no real orders are placed."}</p>
        </footer>
    }
}
