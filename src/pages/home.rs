use std::rc::Rc;

use yew::prelude::*;

use crate::components::contact::Contact;
use crate::components::hero::Hero;
use crate::components::services::Services;
use crate::components::stats::Stats;
use crate::components::testimonials::Testimonials;
use crate::content::SiteContent;

#[function_component(Home)]
pub fn home() -> Html {
    let content = use_context::<Rc<SiteContent>>().unwrap_or_default();

    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <main class="home">
            <Hero hero={content.hero.clone()} />
            <Services services={content.services.clone()} />
            <Stats stats={content.stats.clone()} />
            <Testimonials testimonials={content.testimonials.clone()} />
            <Contact items={content.contact.clone()} />
        </main>
    }
}
