use yew::prelude::*;

use crate::routes::{navigate, Route};

#[derive(Properties, PartialEq, Clone)]
pub struct LinkProps {
    pub to: Route,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Anchor that navigates through the history API instead of reloading
#[function_component(Link)]
pub fn link(props: &LinkProps) -> Html {
    let onclick = {
        let to = props.to.clone();
        Callback::from(move |e: MouseEvent| {
            // Let modified clicks open a new tab
            if e.ctrl_key() || e.meta_key() || e.shift_key() {
                return;
            }
            e.prevent_default();
            navigate(&to);
        })
    };

    html! {
        <a href={props.to.to_href()} class={props.class.clone()} {onclick}>
            {props.children.clone()}
        </a>
    }
}
