use yew::prelude::*;

use super::anchor::anchor_click;

pub fn hover_transform(hovered: bool) -> &'static str {
    if hovered {
        "translateY(-2px) scale(1.02)"
    } else {
        "translateY(0) scale(1)"
    }
}

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    pub label: AttrValue,
    #[prop_or("btn-primary")]
    pub variant: &'static str,
    /// Renders a link instead of a button.
    #[prop_or_default]
    pub href: Option<AttrValue>,
    #[prop_or_default]
    pub submit: bool,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub background: Option<&'static str>,
}

/// `.btn` that lifts slightly while hovered.
#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let hovered = use_state(|| false);

    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    let mut style = format!("transform: {};", hover_transform(*hovered));
    if let Some(background) = props.background {
        style.push_str(&format!(" background: {};", background));
    }
    let class = format!("btn {}", props.variant);

    match &props.href {
        Some(href) => {
            let onclick = anchor_click(href.clone());
            html! {
                <a {class} href={href.clone()} {style} {onmouseenter} {onmouseleave} {onclick}>
                    { props.label.clone() }
                </a>
            }
        }
        None => html! {
            <button
                {class}
                type={if props.submit { "submit" } else { "button" }}
                disabled={props.disabled}
                {style}
                {onmouseenter}
                {onmouseleave}
            >
                { props.label.clone() }
            </button>
        },
    }
}
