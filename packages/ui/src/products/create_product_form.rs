//! Create product form component.

use api::ProductClient;
use dioxus::prelude::*;
use product_core::{Field, FormStateHolder, SubmissionHandler};

use super::{FormSignals, StatusMessage, use_form_signals};

const PRODUCT_FORM_CSS: Asset = asset!("/assets/styling/product_form.css");

/// Form for creating a new product.
///
/// The submit button stays enabled while a request is in flight, so a second
/// submit starts an independent cycle and the last one to finish wins.
#[component]
pub fn CreateProductForm() -> Element {
    let state = use_form_signals();
    let handler = use_hook(|| SubmissionHandler::new(ProductClient::from_env()));

    let onsubmit = move |event: FormEvent| {
        event.prevent_default();

        let handler = handler.clone();
        let mut state = state;
        spawn(async move {
            tracing::info!("Submitting product form");
            let outcome = handler.submit(&mut state).await;
            tracing::debug!("Submission finished: {:?}", outcome);
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: PRODUCT_FORM_CSS }
        div { class: "product-form",
            h1 { "Create Product" }
            form { onsubmit,
                for field in Field::ALL {
                    FieldInput { key: "{field}", form: state, field }
                }
                button { r#type: "submit", "Create" }
            }
            StatusMessage {
                message: state.message.cloned(),
                error: state.error.cloned(),
            }
        }
    }
}

/// Labelled input bound to one form field.
#[component]
pub fn FieldInput(form: FormSignals, field: Field) -> Element {
    let value = form.field(field);
    let mut form = form;

    rsx! {
        div {
            label { r#for: "{field}", {field.label()} }
            if field == Field::Description {
                textarea {
                    id: "{field}",
                    value: "{value}",
                    oninput: move |e| form.set_field(field, e.value()),
                }
            } else {
                input {
                    id: "{field}",
                    r#type: "text",
                    value: "{value}",
                    required: field.is_required(),
                    oninput: move |e| form.set_field(field, e.value()),
                }
            }
        }
    }
}
