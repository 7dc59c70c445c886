// Dioxus `rsx!` macro expands to unwraps internally; allow to avoid false positives.
#![allow(clippy::disallowed_methods)]

use dioxus::prelude::*;

use ui::CreateProductForm;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = api::ClientConfig::from_env();
    tracing::info!("Product backend: {}", config.base_url);

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        CreateProductForm {}
    }
}
