// ============================================================================
// ORDER TRACKING VIEW - Simulated live status
// ============================================================================

use yew::prelude::*;

use crate::components::{Link, OrderTrackerMap, StatusTimelineView};
use crate::hooks::use_order_tracking;
use crate::routes::Route;
use crate::services::new_order_id;

#[derive(Properties, PartialEq, Clone)]
pub struct OrderTrackingViewProps {
    #[prop_or_default]
    pub order_id: Option<String>,
}

#[function_component(OrderTrackingView)]
pub fn order_tracking_view(props: &OrderTrackingViewProps) -> Html {
    let order_id = {
        let given = props.order_id.clone();
        use_memo(given, |given| given.clone().unwrap_or_else(new_order_id))
    };
    let timeline = use_order_tracking();
    let active = timeline.active_step();
    let phase = active.phase;

    {
        let order_id = (*order_id).clone();
        use_effect_with((), move |_| {
            log::info!("📦 Tracking order {}", order_id);
            || ()
        });
    }

    html! {
        <div class="page tracking-page">
            <header class="tracking-header">
                <h1>{"Track Your Order"}</h1>
                <p class="order-id">{"Order ID: "}<strong>{(*order_id).clone()}</strong></p>
                <p class="eta">{phase.estimated_time()}</p>
            </header>

            <OrderTrackerMap phase={phase.map_phase()} />

            <section class="tracking-progress">
                <h2>{format!("{} {}", phase.icon(), phase.title())}</h2>
                <div class="progress-bar" role="progressbar" aria-valuemin="0" aria-valuemax="100"
                    aria-valuenow={phase.progress().to_string()}>
                    <div class="progress-fill" style={format!("width: {}%;", phase.progress())}></div>
                </div>
            </section>

            <StatusTimelineView timeline={(*timeline).clone()} />

            <div class="tracking-actions">
                if timeline.is_terminal() {
                    <p class="delivered-note">{"Enjoy your meal! 🎉"}</p>
                }
                <Link to={Route::Home} class={classes!("btn", "btn-secondary")}>{"Back to home"}</Link>
                <Link to={Route::listing()} class={classes!("btn", "btn-primary")}>{"Order again"}</Link>
            </div>
        </div>
    }
}
