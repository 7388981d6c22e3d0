use chrono::{Datelike, Local};
use yew::prelude::*;

use super::anchor::AnchorLink;
use crate::content::Link;

pub fn copyright(company: &str, year: i32) -> String {
    format!("© {} {}. All rights reserved.", year, company)
}

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub company: AttrValue,
    pub links: Vec<Link>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let year = Local::now().year();

    html! {
        <footer class="footer">
            <div class="container footer-content">
                <div class="footer-links">
                    { for props.links.iter().map(|link| html! {
                        <AnchorLink
                            href={link.href.clone()}
                            label={link.label.clone()}
                            class="footer-link"
                        />
                    }) }
                </div>
                <p class="footer-copy">{ copyright(&props.company, year) }</p>
            </div>
        </footer>
    }
}
