use std::rc::Rc;

use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod motion {
    pub mod carousel;
    pub mod clock;
    pub mod counter;
    pub mod scroll;
    pub mod view;
    pub mod visibility;
}
mod dom {
    pub mod element;
    pub mod error;
    pub mod observer;
    pub mod timers;
}
mod components {
    pub mod anchor;
    pub mod button;
    pub mod contact;
    pub mod footer;
    pub mod hero;
    pub mod keyboard;
    pub mod nav;
    pub mod reveal;
    pub mod services;
    pub mod stats;
    pub mod testimonials;
}
mod pages {
    pub mod home;
    pub mod not_found;
}

use components::{footer::Footer, keyboard::use_keyboard_nav, nav::Nav};
use content::SiteContent;
use pages::{home::Home, not_found::NotFound};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    let content = use_state(|| Rc::new(SiteContent::bundled()));
    use_keyboard_nav();

    {
        let company = content.company.clone();
        use_effect_with_deps(
            move |_| {
                info!("{} website initialized", company);
                || ()
            },
            (),
        );
    }

    html! {
        <ContextProvider<Rc<SiteContent>> context={(*content).clone()}>
            <BrowserRouter>
                <Nav company={content.company.clone()} links={content.nav.clone()} />
                <Switch<Route> render={switch} />
                <Footer company={content.company.clone()} links={content.nav.clone()} />
            </BrowserRouter>
        </ContextProvider<Rc<SiteContent>>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
