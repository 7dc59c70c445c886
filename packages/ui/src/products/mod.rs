//! Product intake components.

mod create_product_form;
mod form_signals;
mod status_message;

pub use create_product_form::{CreateProductForm, FieldInput};
pub use form_signals::{FormSignals, use_form_signals};
pub use status_message::StatusMessage;
