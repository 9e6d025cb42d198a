use dioxus::prelude::*;

use crate::{components::PostCard, post::PostViewModel};

#[component]
pub fn PostList(posts: Vec<PostViewModel>) -> Element {
    rsx! {
        div { class: "flex flex-col",
            for post in posts {
                PostCard {
                    title: post.title,
                    source: post.source,
                    info_hash: post.info_hash,
                }
            }
        }
    }
}

// Unit Tests ==========================================================================================================
