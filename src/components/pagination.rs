use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct PaginationProps {
    pub page: usize,
    pub total_pages: usize,
    pub on_page: Callback<usize>,
}

#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    if props.total_pages <= 1 {
        return html! {};
    }

    let go = |target: usize| {
        let cb = props.on_page.clone();
        Callback::from(move |_: MouseEvent| cb.emit(target))
    };

    html! {
        <nav class="pagination" aria-label="Pages">
            <button class="page-btn" disabled={props.page <= 1} onclick={go(props.page.saturating_sub(1))}>
                {"Previous"}
            </button>
            { for (1..=props.total_pages).map(|n| html! {
                <button
                    class={classes!("page-btn", (n == props.page).then_some("active"))}
                    onclick={go(n)}
                >
                    {n}
                </button>
            }) }
            <button class="page-btn" disabled={props.page >= props.total_pages} onclick={go(props.page + 1)}>
                {"Next"}
            </button>
        </nav>
    }
}
