use yew::prelude::*;

use super::reveal::use_reveal;
use crate::content::Service;
use crate::motion::scroll::{stagger_style, Reveal};

#[derive(Properties, PartialEq)]
pub struct ServicesProps {
    pub services: Vec<Service>,
}

#[function_component(Services)]
pub fn services(props: &ServicesProps) -> Html {
    let section = use_node_ref();
    use_reveal(section.clone());

    html! {
        <section id="services" ref={section} class="services-section">
            <div class="container">
                <h2 class="section-title">{"Our Services"}</h2>
                <div class="services-grid">
                    { for props.services.iter().enumerate().map(|(i, service)| html! {
                        <div
                            class={format!("service-card {}", Reveal::Rise.class())}
                            style={stagger_style(i)}
                        >
                            <div class="service-icon">{ service.icon.clone() }</div>
                            <h3>{ service.title.clone() }</h3>
                            <p>{ service.description.clone() }</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
