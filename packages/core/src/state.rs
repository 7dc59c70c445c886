//! Observable state of the product form.

use crate::{Field, FormDraft};

/// Holder for the form inputs and the two display messages.
///
/// Every setter replaces the stored text verbatim and never fails.
/// Implementations refresh the view after each mutation.
pub trait FormStateHolder {
    /// Snapshot of the current input values.
    fn draft(&self) -> FormDraft;

    /// Replace one input's text.
    fn set_field(&mut self, field: Field, value: String);

    /// Replace the success message. Empty text means no message.
    fn set_message(&mut self, text: String);

    /// Replace the error message. Empty text means no error.
    fn set_error(&mut self, text: String);

    /// Clear all three inputs back to empty text.
    fn reset(&mut self) {
        for field in Field::ALL {
            self.set_field(field, String::new());
        }
    }
}

type RenderFn = Box<dyn FnMut()>;

/// Plain in-memory form state with an optional render callback.
#[derive(Default)]
pub struct FormState {
    draft: FormDraft,
    message: String,
    error: String,
    on_render: Option<RenderFn>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Call `render` after every mutation.
    pub fn with_render(mut self, render: impl FnMut() + 'static) -> Self {
        self.on_render = Some(Box::new(render));
        self
    }

    /// Current input values.
    pub fn fields(&self) -> &FormDraft {
        &self.draft
    }

    /// The success message, if one is showing.
    pub fn message(&self) -> Option<&str> {
        Some(self.message.as_str()).filter(|m| !m.is_empty())
    }

    /// The error message, if one is showing.
    pub fn error(&self) -> Option<&str> {
        Some(self.error.as_str()).filter(|e| !e.is_empty())
    }

    fn render(&mut self) {
        if let Some(render) = self.on_render.as_mut() {
            render();
        }
    }
}

impl std::fmt::Debug for FormState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormState")
            .field("draft", &self.draft)
            .field("message", &self.message)
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

impl FormStateHolder for FormState {
    fn draft(&self) -> FormDraft {
        self.draft.clone()
    }

    fn set_field(&mut self, field: Field, value: String) {
        self.draft.set(field, value);
        self.render();
    }

    fn set_message(&mut self, text: String) {
        self.message = text;
        self.render();
    }

    fn set_error(&mut self, text: String) {
        self.error = text;
        self.render();
    }
}
