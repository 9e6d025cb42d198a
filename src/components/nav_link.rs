use dioxus::prelude::*;

use crate::navigation::Navigation;

/// An anchor to `to`. If the shell has provided a `Navigation`, clicks are handed to it instead of following the
/// `href` directly.
#[component]
pub fn NavLink(#[props(into)] to: String, children: Element) -> Element {
    let navigation = try_use_context::<Navigation>();
    let path = to.clone();

    rsx! {
        a {
            class: "nav-link",
            href: to,
            onclick: move |event| {
                if let Some(navigation) = &navigation {
                    event.prevent_default();
                    navigation.go(&path);
                }
            },
            {children}
        }
    }
}
