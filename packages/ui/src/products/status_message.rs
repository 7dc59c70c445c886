use dioxus::prelude::*;

/// Outcome of the last submission. Empty text renders nothing.
#[component]
pub fn StatusMessage(message: String, error: String) -> Element {
    rsx! {
        if !message.is_empty() {
            p { class: "success", "{message}" }
        }
        if !error.is_empty() {
            p { class: "error", "{error}" }
        }
    }
}
