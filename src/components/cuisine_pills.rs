use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CuisinePillsProps {
    pub cuisines: Vec<String>,
    pub selected: Option<String>,
    pub on_select: Callback<Option<String>>,
}

/// Single-select pills; clicking the selected pill clears the selection
#[function_component(CuisinePills)]
pub fn cuisine_pills(props: &CuisinePillsProps) -> Html {
    html! {
        <div class="cuisine-pills">
            { for props.cuisines.iter().map(|cuisine| {
                let is_selected = props.selected.as_deref() == Some(cuisine.as_str());
                let onclick = {
                    let cb = props.on_select.clone();
                    let next = (!is_selected).then(|| cuisine.clone());
                    Callback::from(move |_: MouseEvent| cb.emit(next.clone()))
                };
                html! {
                    <button
                        key={cuisine.clone()}
                        class={classes!("pill", is_selected.then_some("selected"))}
                        {onclick}
                    >
                        {cuisine.clone()}
                    </button>
                }
            }) }
        </div>
    }
}
