// ============================================================================
// TOAST CONTEXT - Transient confirmations
// ============================================================================

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::CONFIG;
use crate::stores::{Toast, ToastAction, ToastQueue};

pub type ToastContext = UseReducerHandle<ToastQueue>;

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let toasts = use_reducer(ToastQueue::default);

    html! {
        <ContextProvider<ToastContext> context={toasts}>
            {props.children.clone()}
        </ContextProvider<ToastContext>>
    }
}

#[derive(Clone)]
pub struct UseToastHandle {
    pub toasts: Vec<Toast>,
    pub show: Callback<Toast>,
    pub dismiss: Callback<u32>,
}

#[hook]
pub fn use_toast() -> UseToastHandle {
    let shared = use_context::<ToastContext>();
    let detached = use_reducer(ToastQueue::default);
    let queue = shared.unwrap_or(detached);

    let show = {
        let queue = queue.clone();
        Callback::from(move |toast: Toast| {
            let id = toast.id;
            log::info!("🔔 {}: {}", toast.title, toast.message);
            queue.dispatch(ToastAction::Push(toast));

            let dispatcher = queue.dispatcher();
            Timeout::new(CONFIG.timer_config.toast_duration_ms, move || {
                dispatcher.dispatch(ToastAction::Dismiss(id));
            })
            .forget();
        })
    };

    let dismiss = {
        let queue = queue.clone();
        Callback::from(move |id: u32| queue.dispatch(ToastAction::Dismiss(id)))
    };

    UseToastHandle {
        toasts: queue.toasts.clone(),
        show,
        dismiss,
    }
}
