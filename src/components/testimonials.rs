use log::{info, warn};
use web_sys::Element;
use yew::prelude::*;

use crate::config;
use crate::content::Testimonial;
use crate::dom::element::{mounted, select_all};
use crate::dom::error::DomError;
use crate::dom::timers::BrowserScheduler;
use crate::motion::carousel::CarouselController;

type Carousel = CarouselController<Element, BrowserScheduler>;

fn start_carousel(wrapper: &NodeRef) -> Result<Carousel, DomError> {
    let root = mounted(wrapper, "testimonials wrapper")?;
    let slides = select_all(&root, ".testimonial-item")?;
    let dots = select_all(&root, ".nav-dot")?;
    info!("starting testimonial carousel with {} slides", slides.len());
    Ok(CarouselController::initialize(
        slides,
        dots,
        BrowserScheduler,
        config::CAROUSEL_PERIOD_MS,
    ))
}

#[derive(Properties, PartialEq)]
pub struct TestimonialsProps {
    pub testimonials: Vec<Testimonial>,
}

/// Rotating client quotes. Hovering pauses the rotation.
#[function_component(Testimonials)]
pub fn testimonials(props: &TestimonialsProps) -> Html {
    let wrapper = use_node_ref();
    let carousel = use_mut_ref(|| None::<Carousel>);

    {
        let carousel = carousel.clone();
        use_effect_with_deps(
            move |wrapper: &NodeRef| {
                match start_carousel(wrapper) {
                    Ok(started) => *carousel.borrow_mut() = Some(started),
                    Err(e) => warn!("testimonial carousel disabled: {}", e),
                }
                // Dropping the controller clears its interval.
                move || {
                    carousel.borrow_mut().take();
                }
            },
            wrapper.clone(),
        );
    }

    let onmouseenter = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(carousel) = carousel.borrow_mut().as_mut() {
                carousel.pause();
            }
        })
    };
    let onmouseleave = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(carousel) = carousel.borrow_mut().as_mut() {
                carousel.resume();
            }
        })
    };

    html! {
        <section id="testimonials" class="testimonials-section">
            <style>
                {r#"
                    .testimonial-item {
                        display: none;
                        opacity: 0;
                        transition: opacity 0.5s ease;
                    }
                    .testimonial-item.active {
                        display: block;
                        opacity: 1;
                    }
                    .nav-dot.active {
                        background: #10b981;
                        transform: scale(1.2);
                    }
                "#}
            </style>
            <div class="container">
                <h2 class="section-title">{"What Our Clients Say"}</h2>
                <div ref={wrapper} class="testimonials-wrapper" {onmouseenter} {onmouseleave}>
                    { for props.testimonials.iter().map(|t| html! {
                        <div class="testimonial-item">
                            <p class="testimonial-quote">{ format!("“{}”", t.quote) }</p>
                            <div class="testimonial-author">
                                <strong>{ t.author.clone() }</strong>
                                <span>{ t.role.clone() }</span>
                            </div>
                        </div>
                    }) }
                    <div class="testimonial-nav">
                        { for (0..props.testimonials.len()).map(|index| {
                            let carousel = carousel.clone();
                            let onclick = Callback::from(move |_: MouseEvent| {
                                if let Some(carousel) = carousel.borrow().as_ref() {
                                    carousel.go_to_slide(index);
                                }
                            });
                            html! {
                                <button
                                    class="nav-dot"
                                    aria-label={format!("Show testimonial {}", index + 1)}
                                    {onclick}
                                ></button>
                            }
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}
