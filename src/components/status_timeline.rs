use yew::prelude::*;

use crate::models::StatusTimeline;

#[derive(Properties, PartialEq, Clone)]
pub struct StatusTimelineViewProps {
    pub timeline: StatusTimeline,
}

#[function_component(StatusTimelineView)]
pub fn status_timeline_view(props: &StatusTimelineViewProps) -> Html {
    html! {
        <ol class="status-timeline">
            { for props.timeline.steps().iter().map(|step| {
                let classes = classes!(
                    "status-step",
                    step.completed.then_some("completed"),
                    step.is_current.then_some("current"),
                );
                html! {
                    <li key={step.phase.index()} class={classes}>
                        <span class="step-icon">{step.phase.icon()}</span>
                        <div class="step-body">
                            <span class="step-title">{step.phase.title()}</span>
                            <span class="step-time">{step.time_label()}</span>
                        </div>
                    </li>
                }
            }) }
        </ol>
    }
}
