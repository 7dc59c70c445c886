// Dioxus `rsx!` macro expands to unwraps internally; allow to avoid false positives.
#![allow(clippy::disallowed_methods)]

use dioxus::prelude::*;

use ui::CreateProductForm;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    // The browser build logs through Dioxus' built-in tracing logger.
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_hook(|| tracing::info!("Product intake form mounted"));

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        div { class: "App",
            CreateProductForm {}
        }
    }
}
