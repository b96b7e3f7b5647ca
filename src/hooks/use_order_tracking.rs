// ============================================================================
// USE ORDER TRACKING HOOK - Status simulator bound to the page lifetime
// ============================================================================

use yew::prelude::*;

use crate::config::CONFIG;
use crate::models::StatusTimeline;
use crate::services::IntervalTicker;
use crate::viewmodels::{local_clock, StatusSimulator};

#[hook]
pub fn use_order_tracking() -> UseStateHandle<StatusTimeline> {
    let timeline = use_state(StatusTimeline::new);

    {
        let timeline = timeline.clone();
        use_effect_with((), move |_| {
            let period_ms = CONFIG.timer_config.status_interval_ms;
            log::info!("⏰ Order status advances every {} seconds", period_ms / 1000);

            let simulator = StatusSimulator::new(local_clock(), move |snapshot| timeline.set(snapshot.clone()));
            simulator.start(&IntervalTicker, period_ms);

            move || {
                // Cleanup: no state updates once the page is gone
                simulator.dispose();
            }
        });
    }

    timeline
}
