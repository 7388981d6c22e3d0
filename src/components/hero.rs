use yew::prelude::*;
use yew_hooks::prelude::*;

use super::button::Button;
use crate::content;
use crate::motion::scroll::parallax_offset;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub hero: content::Hero,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let (_, scroll_y) = use_window_scroll();
    let (_, viewport_height) = use_window_size();
    let offset = use_state(|| 0.0_f64);

    // Past the hero the gradient keeps its last offset.
    {
        let offset = offset.clone();
        use_effect_with_deps(
            move |(scroll_y, viewport_height)| {
                if let Some(next) = parallax_offset(*scroll_y, *viewport_height) {
                    offset.set(next);
                }
                || ()
            },
            (scroll_y, viewport_height),
        );
    }

    let hero = &props.hero;
    html! {
        <header id="home" class="hero">
            <div
                class="hero-gradient"
                style={format!("transform: translateY({}px);", *offset)}
            ></div>
            <div class="container hero-content">
                <h1 class="hero-title">{ hero.title.clone() }</h1>
                <p class="hero-subtitle">{ hero.subtitle.clone() }</p>
                <div class="hero-cta-group">
                    <Button
                        label={hero.primary_cta.label.clone()}
                        href={hero.primary_cta.href.clone()}
                    />
                    <Button
                        label={hero.secondary_cta.label.clone()}
                        href={hero.secondary_cta.href.clone()}
                        variant="btn-secondary"
                    />
                </div>
            </div>
        </header>
    }
}
