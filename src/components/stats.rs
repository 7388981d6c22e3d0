use log::{info, warn};
use web_sys::Element;
use yew::prelude::*;

use super::reveal::use_reveal;
use crate::config;
use crate::content::Stat;
use crate::dom::element::{mounted, select_all};
use crate::dom::error::DomError;
use crate::dom::observer::VisibilityWatcher;
use crate::dom::timers::BrowserScheduler;
use crate::motion::counter::start_counter;
use crate::motion::scroll::{stagger_style, Reveal};
use crate::motion::visibility::{TriggerMode, VisibilityTrigger};

/// Counts every `.stat-number` up the first time half the section shows.
fn watch_counters(section: &NodeRef) -> Result<VisibilityWatcher, DomError> {
    let root = mounted(section, "stats section")?;
    let counters = select_all(&root, ".stat-number")?;
    let trigger = VisibilityTrigger::observe(
        [root],
        config::COUNTER_VISIBILITY,
        TriggerMode::Once,
        move |_: &Element| {
            info!("stats in view, counting {} numbers", counters.len());
            for counter in &counters {
                start_counter(counter.clone(), BrowserScheduler, config::COUNTER_TIMING);
            }
        },
    );
    VisibilityWatcher::start(trigger)
}

#[derive(Properties, PartialEq)]
pub struct StatsProps {
    pub stats: Vec<Stat>,
}

#[function_component(Stats)]
pub fn stats(props: &StatsProps) -> Html {
    let section = use_node_ref();
    use_reveal(section.clone());

    use_effect_with_deps(
        move |section: &NodeRef| {
            let watcher = match watch_counters(section) {
                Ok(watcher) => Some(watcher),
                Err(e) => {
                    warn!("stat counters disabled: {}", e);
                    None
                }
            };
            move || drop(watcher)
        },
        section.clone(),
    );

    html! {
        <section ref={section} class="stats-section">
            <div class="container stats-grid">
                { for props.stats.iter().enumerate().map(|(i, stat)| html! {
                    <div
                        class={format!("stat-item {}", Reveal::Rise.class())}
                        style={stagger_style(i)}
                    >
                        <div class="stat-number">{ stat.value.clone() }</div>
                        <div class="stat-label">{ stat.label.clone() }</div>
                    </div>
                }) }
            </div>
        </section>
    }
}
