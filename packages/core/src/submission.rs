//! The submit, await, resolve cycle.
//!
//! A cycle starts when [`PendingSubmission::begin`] clears both display
//! messages and snapshots the draft. The single request then goes out
//! through a [`ProductTransport`], and [`PendingSubmission::resolve`] maps
//! whatever came back onto the form state. Nothing survives between cycles.

use std::future::Future;

use crate::{FormStateHolder, NewProduct, ProductId, ProductResponse};

/// Error text shown when no usable response was obtained.
pub const TRANSPORT_FAILURE_MESSAGE: &str = "An error occurred while creating the product.";

/// Success text shown for a newly created product.
pub fn success_message(id: &ProductId) -> String {
    format!("Product created successfully with ID: {}", id)
}

/// Sends a create request to the product backend.
///
/// `Err` means no usable response exists: the request never completed, the
/// body could not be read, or a 2xx body was not a product. The error detail
/// is logged and then dropped.
pub trait ProductTransport {
    type Error: std::fmt::Display;

    fn create_product(
        &self,
        product: &NewProduct,
    ) -> impl Future<Output = Result<ProductResponse, Self::Error>>;
}

/// How a submission cycle ended.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    /// The backend created the product.
    Created { id: ProductId },
    /// The backend answered with a non-success status.
    Rejected { status: u16 },
    /// No usable response was obtained.
    Failed,
}

/// A cycle waiting on its response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSubmission {
    request: NewProduct,
}

impl PendingSubmission {
    /// Leave the idle state: clear both messages and capture the request.
    pub fn begin<S: FormStateHolder>(state: &mut S) -> Self {
        state.set_error(String::new());
        state.set_message(String::new());

        Self {
            request: state.draft().into(),
        }
    }

    /// The request body captured when the cycle began.
    pub fn request(&self) -> &NewProduct {
        &self.request
    }

    /// Apply the transport result to the form state.
    ///
    /// Leaves exactly one of message and error showing, so a cycle that
    /// resolves after an overlapping one replaces its outcome entirely.
    /// Inputs are reset only on success.
    pub fn resolve<S, E>(
        self,
        state: &mut S,
        result: Result<ProductResponse, E>,
    ) -> SubmissionOutcome
    where
        S: FormStateHolder,
        E: std::fmt::Display,
    {
        match result {
            Ok(ProductResponse::Created(product)) => {
                tracing::info!("Product created: {} (sku {})", product.id, self.request.sku);
                state.set_error(String::new());
                state.set_message(success_message(&product.id));
                state.reset();
                SubmissionOutcome::Created { id: product.id }
            }
            Ok(ProductResponse::Rejected { status, body }) => {
                tracing::warn!("Product rejected with status {}: {}", status, body);
                state.set_message(String::new());
                state.set_error(body);
                SubmissionOutcome::Rejected { status }
            }
            Err(e) => {
                tracing::warn!("Product request failed: {}", e);
                state.set_message(String::new());
                state.set_error(TRANSPORT_FAILURE_MESSAGE.to_string());
                SubmissionOutcome::Failed
            }
        }
    }
}

/// Runs one request/response cycle per submit action.
///
/// The handler itself is stateless. Overlapping calls are not serialized;
/// whichever resolves last decides the displayed message.
#[derive(Debug, Clone)]
pub struct SubmissionHandler<T> {
    transport: T,
}

impl<T: ProductTransport> SubmissionHandler<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Submit the current draft and apply the outcome to `state`.
    pub async fn submit<S: FormStateHolder>(&self, state: &mut S) -> SubmissionOutcome {
        let pending = PendingSubmission::begin(state);
        tracing::debug!("Submitting product {:?}", pending.request());

        let result = self.transport.create_product(pending.request()).await;

        pending.resolve(state, result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CreatedProduct, Field, FormDraft, FormState};
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Transport that replays canned results and records every request.
    #[derive(Default)]
    struct ScriptedTransport {
        replies: RefCell<VecDeque<Result<ProductResponse, String>>>,
        requests: RefCell<Vec<NewProduct>>,
    }

    impl ScriptedTransport {
        fn replying(replies: Vec<Result<ProductResponse, String>>) -> Self {
            Self {
                replies: RefCell::new(replies.into()),
                requests: RefCell::default(),
            }
        }
    }

    impl ProductTransport for ScriptedTransport {
        type Error = String;

        async fn create_product(&self, product: &NewProduct) -> Result<ProductResponse, String> {
            self.requests.borrow_mut().push(product.clone());
            self.replies
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err("no scripted reply".to_string()))
        }
    }

    fn created(id: &str) -> Result<ProductResponse, String> {
        Ok(ProductResponse::Created(CreatedProduct::new(id)))
    }

    fn rejected(status: u16, body: &str) -> Result<ProductResponse, String> {
        Ok(ProductResponse::Rejected {
            status,
            body: body.to_string(),
        })
    }

    fn filled_state() -> FormState {
        let mut state = FormState::new();
        state.set_field(Field::Sku, "W-1".to_string());
        state.set_field(Field::Name, "Widget".to_string());
        state.set_field(Field::Description, "A blue widget".to_string());
        state
    }

    #[tokio::test]
    async fn success_sets_message_and_resets_inputs() {
        let handler = SubmissionHandler::new(ScriptedTransport::replying(vec![created("X")]));
        let mut state = filled_state();

        let outcome = handler.submit(&mut state).await;

        assert_eq!(outcome, SubmissionOutcome::Created { id: ProductId::from("X") });
        assert_eq!(state.message(), Some("Product created successfully with ID: X"));
        assert_eq!(state.error(), None);
        assert_eq!(*state.fields(), FormDraft::default());
    }

    #[tokio::test]
    async fn request_carries_fields_verbatim() {
        let handler = SubmissionHandler::new(ScriptedTransport::replying(vec![created("1")]));
        let mut state = FormState::new();
        state.set_field(Field::Sku, " w-1 ".to_string());
        state.set_field(Field::Name, "Widget".to_string());

        handler.submit(&mut state).await;

        let requests = handler.transport().requests.borrow();
        assert_eq!(
            requests.as_slice(),
            [NewProduct {
                sku: " w-1 ".to_string(),
                name: "Widget".to_string(),
                description: String::new(),
            }]
        );
    }

    #[tokio::test]
    async fn rejection_shows_body_and_keeps_inputs() {
        let handler = SubmissionHandler::new(ScriptedTransport::replying(vec![rejected(
            409,
            "SKU already exists",
        )]));
        let mut state = filled_state();

        let outcome = handler.submit(&mut state).await;

        assert_eq!(outcome, SubmissionOutcome::Rejected { status: 409 });
        assert_eq!(state.error(), Some("SKU already exists"));
        assert_eq!(state.message(), None);
        assert_eq!(state.fields().sku, "W-1");
        assert_eq!(state.fields().description, "A blue widget");
    }

    #[tokio::test]
    async fn transport_failure_shows_generic_text() {
        let handler = SubmissionHandler::new(ScriptedTransport::replying(vec![Err(
            "connection refused".to_string(),
        )]));
        let mut state = filled_state();

        let outcome = handler.submit(&mut state).await;

        assert_eq!(outcome, SubmissionOutcome::Failed);
        assert_eq!(state.error(), Some(TRANSPORT_FAILURE_MESSAGE));
        assert_eq!(state.message(), None);
        assert_eq!(state.fields().name, "Widget");
    }

    #[tokio::test]
    async fn resubmit_clears_stale_error_even_for_empty_body() {
        let handler = SubmissionHandler::new(ScriptedTransport::replying(vec![
            rejected(400, "Name is mandatory"),
            rejected(500, ""),
        ]));
        let mut state = filled_state();

        handler.submit(&mut state).await;
        assert_eq!(state.error(), Some("Name is mandatory"));

        handler.submit(&mut state).await;
        assert_eq!(state.error(), None);
        assert_eq!(state.message(), None);
    }

    #[tokio::test]
    async fn success_after_error_replaces_it() {
        let handler = SubmissionHandler::new(ScriptedTransport::replying(vec![
            Err("dns".to_string()),
            created("7"),
        ]));
        let mut state = filled_state();

        handler.submit(&mut state).await;
        handler.submit(&mut state).await;

        assert_eq!(state.error(), None);
        assert_eq!(state.message(), Some("Product created successfully with ID: 7"));
    }

    #[tokio::test]
    async fn sequential_identical_submissions_are_independent() {
        let handler = SubmissionHandler::new(ScriptedTransport::replying(vec![
            created("1"),
            rejected(409, "SKU 'W-1' already exists"),
        ]));
        let mut state = filled_state();

        let first = handler.submit(&mut state).await;
        assert_eq!(first, SubmissionOutcome::Created { id: ProductId::from("1") });

        state.set_field(Field::Sku, "W-1".to_string());
        state.set_field(Field::Name, "Widget".to_string());
        state.set_field(Field::Description, "A blue widget".to_string());
        let second = handler.submit(&mut state).await;

        assert_eq!(second, SubmissionOutcome::Rejected { status: 409 });
        assert_eq!(state.message(), None);
        assert_eq!(state.error(), Some("SKU 'W-1' already exists"));

        let requests = handler.transport().requests.borrow();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0], requests[1]);
    }

    #[test]
    fn begin_clears_both_messages_before_the_request() {
        let mut state = filled_state();
        state.set_message("old".to_string());
        state.set_error("older".to_string());

        let pending = PendingSubmission::begin(&mut state);

        assert_eq!(state.message(), None);
        assert_eq!(state.error(), None);
        assert_eq!(pending.request().sku, "W-1");
    }

    #[test]
    fn overlapping_cycles_show_only_the_last_outcome() {
        let mut state = filled_state();
        let first = PendingSubmission::begin(&mut state);
        let second = PendingSubmission::begin(&mut state);

        first.resolve(&mut state, created("1"));
        second.resolve(&mut state, rejected(409, "SKU already exists"));

        assert_eq!(state.message(), None);
        assert_eq!(state.error(), Some("SKU already exists"));
    }

    #[test]
    fn late_success_replaces_earlier_failure() {
        let mut state = filled_state();
        let first = PendingSubmission::begin(&mut state);
        let second = PendingSubmission::begin(&mut state);

        first.resolve(&mut state, Err("connection reset".to_string()));
        second.resolve(&mut state, created("2"));

        assert_eq!(state.error(), None);
        assert_eq!(state.message(), Some("Product created successfully with ID: 2"));
    }

    #[test]
    fn success_message_formats_numeric_ids_bare() {
        assert_eq!(
            success_message(&ProductId::from(42)),
            "Product created successfully with ID: 42"
        );
    }
}
