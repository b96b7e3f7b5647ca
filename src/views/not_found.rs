use yew::prelude::*;

use crate::components::Link;
use crate::routes::Route;

#[function_component(NotFoundView)]
pub fn not_found_view() -> Html {
    html! {
        <div class="page not-found-page">
            <div class="empty-state">
                <h1>{"404"}</h1>
                <p>{"We couldn't find that page."}</p>
                <Link to={Route::Home} class={classes!("btn", "btn-primary")}>{"Go home"}</Link>
            </div>
        </div>
    }
}
