use dioxus::prelude::*;
use portal::HttpApi;

mod components;
mod config;
mod routes;
mod services;

use routes::Route;
use services::Services;

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let services = use_context_provider(|| {
        let config = config::load();
        tracing::info!(base_url = %config.api.base_url, "hospital portal starting");
        Services::new(HttpApi::from_config(&config.api))
    });

    // Session entries live in localStorage and can only be read asynchronously.
    let hydrated = use_resource(move || {
        let session = services.session.clone();
        async move { session.hydrate().await }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("/assets/main.css") }
        if hydrated.read().is_some() {
            Router::<Route> {}
        } else {
            div { class: "app-loading", p { "Loading..." } }
        }
    }
}
