// ============================================================================
// ROUTES - Client-side paths and query parameters
// ============================================================================
// Pages are chosen from `location.pathname`; navigation pushes history state
// and notifies the router hook through a synthetic popstate event.
// ============================================================================

use wasm_bindgen::JsValue;
use web_sys::{PopStateEvent, UrlSearchParams};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    RestaurantListing {
        search: Option<String>,
        cuisine: Option<String>,
    },
    /// Every slug resolves to the same sample restaurant
    RestaurantMenu { slug: Option<String> },
    Cart,
    Checkout,
    OrderTracking { order_id: Option<String> },
    UserProfile,
    NotFound,
}

impl Route {
    pub fn listing() -> Self {
        Route::RestaurantListing {
            search: None,
            cuisine: None,
        }
    }

    /// `param` looks up a decoded query value; empty values count as absent
    pub fn from_parts(path: &str, param: impl Fn(&str) -> Option<String>) -> Self {
        let param = |key: &str| param(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let path = match path.trim_end_matches('/') {
            "" => "/",
            other => other,
        };

        match path {
            "/" | "/index.html" => Route::Home,
            "/restaurant-listing" => Route::RestaurantListing {
                search: param("search"),
                cuisine: param("cuisine"),
            },
            "/restaurant-menu" => Route::RestaurantMenu { slug: param("slug") },
            "/cart" => Route::Cart,
            "/checkout" => Route::Checkout,
            "/order-tracking" => Route::OrderTracking {
                order_id: param("orderId"),
            },
            "/user-profile" => Route::UserProfile,
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home | Route::NotFound => "/",
            Route::RestaurantListing { .. } => "/restaurant-listing",
            Route::RestaurantMenu { .. } => "/restaurant-menu",
            Route::Cart => "/cart",
            Route::Checkout => "/checkout",
            Route::OrderTracking { .. } => "/order-tracking",
            Route::UserProfile => "/user-profile",
        }
    }

    pub fn to_href(&self) -> String {
        let params: Vec<(&str, &Option<String>)> = match self {
            Route::RestaurantListing { search, cuisine } => vec![("search", search), ("cuisine", cuisine)],
            Route::RestaurantMenu { slug } => vec![("slug", slug)],
            Route::OrderTracking { order_id } => vec![("orderId", order_id)],
            _ => Vec::new(),
        };

        let query: Vec<String> = params
            .into_iter()
            .filter_map(|(key, value)| value.as_deref().map(|v| format!("{}={}", key, encode_component(v))))
            .collect();

        if query.is_empty() {
            self.path().to_string()
        } else {
            format!("{}?{}", self.path(), query.join("&"))
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::RestaurantListing { .. } => "Restaurants",
            Route::RestaurantMenu { .. } => "Menu",
            Route::Cart => "Your Cart",
            Route::Checkout => "Checkout",
            Route::OrderTracking { .. } => "Order Tracking",
            Route::UserProfile => "My Account",
            Route::NotFound => "Not Found",
        }
    }
}

/// Percent-encodes everything outside the RFC 3986 unreserved set
fn encode_component(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => encoded.push(byte as char),
            _ => encoded.push_str(&format!("%{:02X}", byte)),
        }
    }
    encoded
}

/// Route for the current browser location
pub fn current_route() -> Route {
    let Some(location) = web_sys::window().map(|w| w.location()) else {
        return Route::Home;
    };
    let path = location.pathname().unwrap_or_default();
    let search = location.search().unwrap_or_default();

    match UrlSearchParams::new_with_str(&search) {
        Ok(params) => Route::from_parts(&path, |key| params.get(key)),
        Err(_) => Route::from_parts(&path, |_| None),
    }
}

/// Pushes `route` onto the history stack and lets listeners re-read the location
pub fn navigate(route: &Route) {
    let Some(window) = web_sys::window() else {
        log::warn!("⚠️ No window, cannot navigate to {}", route.to_href());
        return;
    };
    let href = route.to_href();

    let pushed = window
        .history()
        .and_then(|history| history.push_state_with_url(&JsValue::NULL, "", Some(&href)));
    if let Err(e) = pushed {
        log::error!("❌ history.pushState failed for {}: {:?}", href, e);
        return;
    }

    log::info!("🧭 {}", href);
    match PopStateEvent::new("popstate") {
        Ok(event) => {
            let _ = window.dispatch_event(&event);
        }
        Err(e) => log::error!("❌ Could not create popstate event: {:?}", e),
    }
    window.scroll_to_with_x_and_y(0.0, 0.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn parse(path: &str, pairs: &[(&str, &str)]) -> Route {
        let params: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Route::from_parts(path, |key| params.get(key).cloned())
    }

    #[test]
    fn test_paths() {
        assert_eq!(parse("/", &[]), Route::Home);
        assert_eq!(parse("", &[]), Route::Home);
        assert_eq!(parse("/cart/", &[]), Route::Cart);
        assert_eq!(parse("/checkout", &[]), Route::Checkout);
        assert_eq!(parse("/user-profile", &[]), Route::UserProfile);
        assert_eq!(parse("/nowhere", &[]), Route::NotFound);
    }

    #[test]
    fn test_query_params() {
        assert_eq!(
            parse("/restaurant-listing", &[("search", " pizza "), ("cuisine", "")]),
            Route::RestaurantListing {
                search: Some("pizza".into()),
                cuisine: None,
            }
        );
        assert_eq!(
            parse("/restaurant-menu", &[("slug", "the-gourmet-place")]),
            Route::RestaurantMenu {
                slug: Some("the-gourmet-place".into())
            }
        );
        assert_eq!(
            parse("/order-tracking", &[("orderId", "FOODIE-ABC1234")]),
            Route::OrderTracking {
                order_id: Some("FOODIE-ABC1234".into())
            }
        );
    }

    #[test]
    fn test_to_href() {
        assert_eq!(Route::Cart.to_href(), "/cart");
        assert_eq!(Route::listing().to_href(), "/restaurant-listing");
        assert_eq!(
            Route::RestaurantListing {
                search: Some("fish & chips".into()),
                cuisine: Some("Fast Food".into()),
            }
            .to_href(),
            "/restaurant-listing?search=fish%20%26%20chips&cuisine=Fast%20Food"
        );
        assert_eq!(Route::NotFound.to_href(), "/");
    }
}
