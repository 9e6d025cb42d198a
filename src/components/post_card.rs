// NOTE: The `#[component]` macro is deriving `PartialEq`, but not `Eq` (since that's not needed), and clippy is
// complaining about that. This needs to be a module-level `#![expect(...)]` since I can't actually place an
// `#[expect(...)]` inside of the `#[component]` macro
#![expect(clippy::derive_partial_eq_without_eq)]

use dioxus::prelude::*;

use crate::{
    components::{Card, CardActions, CardHeader, CardText, FlatButton, NavLink},
    routes,
};

#[component]
pub fn PostCard(
    #[props(into)] title: String,
    #[props(into)] source: String,
    #[props(into)] info_hash: String,
) -> Element {
    let stream_path = routes::stream(&info_hash);

    rsx! {
        div { style: "margin-top: 10px",
            Card {
                CardHeader {
                    title,
                    subtitle: source,
                    act_as_expander: true,
                    show_expandable_button: true,
                }
                CardText {}
                CardActions {
                    NavLink { to: routes::DOWNLOADS,
                        FlatButton { label: "Download" }
                    }
                    NavLink { to: stream_path,
                        FlatButton { label: "Stream" }
                    }
                }
            }
        }
    }
}

// Unit Tests ==========================================================================================================
