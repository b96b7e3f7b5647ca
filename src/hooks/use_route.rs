// ============================================================================
// USE ROUTE HOOK - Current route, refreshed on history changes
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::routes::{current_route, navigate, Route};

#[hook]
pub fn use_route() -> UseStateHandle<Route> {
    let route = use_state(current_route);

    {
        let route = route.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window();
            let on_popstate = Closure::wrap(Box::new(move |_e: web_sys::Event| {
                route.set(current_route());
            }) as Box<dyn FnMut(_)>);

            if let Some(win) = &window {
                win.add_event_listener_with_callback("popstate", on_popstate.as_ref().unchecked_ref()).ok();
            }

            move || {
                // Cleanup
                if let Some(win) = window {
                    win.remove_event_listener_with_callback("popstate", on_popstate.as_ref().unchecked_ref()).ok();
                }
                drop(on_popstate);
            }
        });
    }

    route
}

/// Callback that pushes a route; pages use it for programmatic redirects
#[hook]
pub fn use_navigator() -> Callback<Route> {
    use_callback((), |route: Route, _| navigate(&route))
}
