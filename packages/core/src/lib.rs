//! Core domain types for the product intake form.
//!
//! This crate is platform-neutral and shared by every frontend:
//! - FormDraft and Field for the unsaved input values
//! - FormStateHolder and FormState for the form's observable state
//! - NewProduct, CreatedProduct and ProductResponse for the HTTP contract
//! - SubmissionHandler for the submit/await/resolve cycle

mod draft;
mod product;
mod state;
mod submission;

pub use draft::{Field, FormDraft};
pub use product::{CreatedProduct, NewProduct, ProductId, ProductIdError, ProductResponse};
pub use state::{FormState, FormStateHolder};
pub use submission::{
    PendingSubmission, ProductTransport, SubmissionHandler, SubmissionOutcome,
    TRANSPORT_FAILURE_MESSAGE, success_message,
};
