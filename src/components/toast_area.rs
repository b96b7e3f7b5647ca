use yew::prelude::*;

use crate::components::Link;
use crate::hooks::use_toast;

#[function_component(ToastArea)]
pub fn toast_area() -> Html {
    let toast = use_toast();

    html! {
        <div class="toast-area" aria-live="polite">
            { for toast.toasts.iter().map(|t| {
                let on_close = {
                    let dismiss = toast.dismiss.clone();
                    let id = t.id;
                    Callback::from(move |_: MouseEvent| dismiss.emit(id))
                };
                html! {
                    <div key={t.id} class={t.kind.class()}>
                        <div class="toast-body">
                            <strong>{t.title.clone()}</strong>
                            <p>{t.message.clone()}</p>
                            if let Some((label, route)) = &t.action {
                                <Link to={route.clone()} class={classes!("toast-action")}>{label.clone()}</Link>
                            }
                        </div>
                        <button class="toast-close" onclick={on_close} aria-label="Close">{"×"}</button>
                    </div>
                }
            }) }
        </div>
    }
}
