use yew::prelude::*;

use crate::components::Link;
use crate::models::demo::PromoSlide;

#[derive(Properties, PartialEq, Clone)]
pub struct PromoBannerProps {
    pub slides: Vec<PromoSlide>,
}

/// Carousel with previous/next controls that wrap around
#[function_component(PromoBanner)]
pub fn promo_banner(props: &PromoBannerProps) -> Html {
    let index = use_state(|| 0usize);
    let count = props.slides.len();

    let Some(slide) = props.slides.get(*index % count.max(1)) else {
        return html! {};
    };

    let previous = {
        let index = index.clone();
        Callback::from(move |_: MouseEvent| index.set((*index + count - 1) % count))
    };
    let next = {
        let index = index.clone();
        Callback::from(move |_: MouseEvent| index.set((*index + 1) % count))
    };

    html! {
        <section class="promo-banner" style={format!("background-image: url('{}')", slide.image_url)}>
            <div class="promo-content">
                <h2>{slide.title}</h2>
                <p>{slide.description}</p>
                <Link to={slide.cta_route.clone()} class={classes!("btn", "btn-primary")}>{slide.cta_text}</Link>
            </div>
            if count > 1 {
                <button class="promo-nav promo-prev" onclick={previous} aria-label="Previous">{"‹"}</button>
                <button class="promo-nav promo-next" onclick={next} aria-label="Next">{"›"}</button>
                <div class="promo-dots">
                    { for (0..count).map(|i| html! {
                        <span class={classes!("dot", (i == *index % count).then_some("active"))}></span>
                    }) }
                </div>
            }
        </section>
    }
}
