//! Signal-backed form state.

use dioxus::prelude::*;
use product_core::{Field, FormDraft, FormStateHolder};

/// Form state stored in Dioxus signals.
///
/// Signals are `Copy` handles, so every submit task gets its own handle to
/// the same state. Writing a signal re-renders its readers.
#[derive(Clone, Copy, PartialEq)]
pub struct FormSignals {
    pub sku: Signal<String>,
    pub name: Signal<String>,
    pub description: Signal<String>,
    pub message: Signal<String>,
    pub error: Signal<String>,
}

/// Create empty form state owned by the calling component.
pub fn use_form_signals() -> FormSignals {
    FormSignals {
        sku: use_signal(String::new),
        name: use_signal(String::new),
        description: use_signal(String::new),
        message: use_signal(String::new),
        error: use_signal(String::new),
    }
}

impl FormSignals {
    /// Signal holding one input's text.
    pub fn field(&self, field: Field) -> Signal<String> {
        match field {
            Field::Sku => self.sku,
            Field::Name => self.name,
            Field::Description => self.description,
        }
    }
}

impl FormStateHolder for FormSignals {
    fn draft(&self) -> FormDraft {
        FormDraft {
            sku: self.sku.cloned(),
            name: self.name.cloned(),
            description: self.description.cloned(),
        }
    }

    fn set_field(&mut self, field: Field, value: String) {
        let mut signal = self.field(field);
        signal.set(value);
    }

    fn set_message(&mut self, text: String) {
        self.message.set(text);
    }

    fn set_error(&mut self, text: String) {
        self.error.set(text);
    }
}
