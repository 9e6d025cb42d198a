// NOTE: The `#[component]` macro is deriving `PartialEq`, but not `Eq` (since that's not needed), and clippy is
// complaining about that. This needs to be a module-level `#![expect(...)]` since I can't actually place an
// `#[expect(...)]` inside of the `#[component]` macro
#![expect(clippy::derive_partial_eq_without_eq)]

use dioxus::prelude::*;

use crate::components::expand_icon::ExpandIcon;

/// A card header showing a title and subtitle.
///
/// The expanded / collapsed state lives here and nowhere else: with `act_as_expander` the whole header toggles it,
/// and with `show_expandable_button` an explicit toggle button is drawn on the right.
#[component]
pub fn CardHeader(
    #[props(into)] title: String,
    #[props(into)] subtitle: String,
    #[props(default)] act_as_expander: bool,
    #[props(default)] show_expandable_button: bool,
) -> Element {
    let mut expanded = use_signal(|| false);

    let cursor_class = if act_as_expander {
        "cursor-pointer"
    } else {
        ""
    };
    let aria_expanded = if expanded() { "true" } else { "false" };

    rsx! {
        div {
            class: "card-header flex items-center justify-between gap-4 {cursor_class}",
            onclick: move |_| {
                if act_as_expander {
                    expanded.toggle();
                }
            },

            div { class: "flex flex-col",
                span { class: "card-title", {title} }
                span { class: "card-subtitle", {subtitle} }
            }

            if show_expandable_button {
                button {
                    class: "btn btn-ghost btn-circle",
                    r#type: "button",
                    aria_expanded,
                    onclick: move |event| {
                        // NOTE: Without this, an expander header would see the same click and toggle straight back
                        event.stop_propagation();
                        expanded.toggle();
                    },
                    ExpandIcon { expanded: expanded() }
                }
            }
        }
    }
}

// Unit Tests ==========================================================================================================
