use dioxus::prelude::*;

#[component]
pub fn Card(children: Element) -> Element {
    rsx! {
        div { class: "card bg-base-100 shadow-sm", {children} }
    }
}

/// The body of a `Card`. Rendered even when there's nothing to put in it, so the card keeps its shape.
#[component]
pub fn CardText(#[props(default = VNode::empty())] children: Element) -> Element {
    rsx! {
        div { class: "card-body", {children} }
    }
}

#[component]
pub fn CardActions(children: Element) -> Element {
    rsx! {
        div { class: "card-actions px-2 pb-2", {children} }
    }
}
