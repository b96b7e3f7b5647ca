use yew::prelude::*;

use crate::models::MapPhase;

#[derive(Properties, PartialEq, Clone)]
pub struct OrderTrackerMapProps {
    pub phase: MapPhase,
}

/// Simulated map: restaurant on the left, home on the right, rider in between
#[function_component(OrderTrackerMap)]
pub fn order_tracker_map(props: &OrderTrackerMapProps) -> Html {
    let (top, left) = props.phase.agent_position();

    html! {
        <div class="tracker-map">
            <div class="map-route"></div>
            <span class="map-marker map-restaurant" style="top: 50%; left: 10%;">{"🏪"}</span>
            <span class="map-marker map-home" style="top: 50%; left: 90%;">{"🏠"}</span>
            <span
                class={classes!("map-marker", "map-agent", (props.phase == MapPhase::Delivered).then_some("arrived"))}
                style={format!("top: {}%; left: {}%;", top, left)}
            >
                {"🛵"}
            </span>
            <p class="map-caption">{format!("Rider is {}", props.phase.label())}</p>
        </div>
    }
}
