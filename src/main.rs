use color_eyre::Result;
use dioxus::{
    desktop::{self, WindowBuilder},
    logger::tracing::{Level, error, info},
    prelude::*,
};

use zif_ui::{
    components::{Header, PostList},
    navigation::{self, Navigation},
    post::posts_from_json,
};

const MAIN_CSS: Asset = asset!("/assets/main.css");

const INDEX_HTML: &str = include_str!("../index.html");
const POSTS_JSON: &str = include_str!("../assets/posts.json");

// NOTE: These paths need to stay in sync with `zif_ui::routes`, since `Routable` only accepts literals
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Feed {},
        #[route("/downloads")]
        Downloads {},
        #[route("/stream/:info_hash")]
        Stream { info_hash: String },
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

#[derive(Clone, Copy)]
struct RouterNavigator(Navigator);

impl navigation::Navigator for RouterNavigator {
    fn navigate_to(&self, path: &str) {
        if let Some(failure) = self.0.push(path.to_owned()) {
            error!(path, ?failure, "navigation failed");
        }
    }
}

#[component]
fn App() -> Element {
    rsx! {
        document::Stylesheet { href: MAIN_CSS }

        Router::<Route> {}
    }
}

#[component]
fn Shell() -> Element {
    use_context_provider(|| Navigation::new(RouterNavigator(navigator())));

    rsx! {
        Header {}

        main { class: "card w-9/10 bg-base-100 shadow-sm",
            div { class: "flex flex-col card-body", Outlet::<Route> {} }
        }
    }
}

#[component]
fn Feed() -> Element {
    let feed = use_hook(|| {
        posts_from_json(POSTS_JSON.as_bytes())
            .inspect(|posts| info!(posts = posts.len(), "loaded post feed"))
            .map_err(|report| {
                error!("{report:?}");
                format!("{report:#}")
            })
    });

    match feed {
        Ok(posts) => rsx! {
            h2 { class: "card-title", "Posts" }
            PostList { posts }
        },
        Err(message) => rsx! {
            div { class: "alert alert-error font-mono", role: "alert", {message} }
        },
    }
}

#[component]
fn Downloads() -> Element {
    rsx! {
        h2 { class: "card-title", "Downloads" }
        p { "Nothing is downloading yet." }
        Link { class: "btn btn-ghost", to: Route::Feed {}, "Back" }
    }
}

#[component]
fn Stream(info_hash: String) -> Element {
    rsx! {
        h2 { class: "card-title", "Stream" }
        div { class: "font-mono", {info_hash} }
        Link { class: "btn btn-ghost", to: Route::Feed {}, "Back" }
    }
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        h2 { class: "card-title", "Not Found" }
        p { class: "font-mono", "/{path}" }
        Link { class: "btn btn-ghost", to: Route::Feed {}, "Back" }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    dioxus::logger::init(Level::INFO)?;

    dioxus::LaunchBuilder::new()
        .with_cfg(
            desktop::Config::default()
                .with_menu(None)
                .with_window(WindowBuilder::new().with_title("Zif"))
                .with_custom_index(INDEX_HTML.to_string()),
        )
        .launch(App);

    Ok(())
}
