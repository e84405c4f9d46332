//! The submit-and-render workflow. One controller instance owns the single
//! `ViewState`; every transition funnels through `submit` and `reset`.

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use crate::optimize_client::OptimizeBackend;
use crate::submission::request::SubmissionRequest;
use crate::submission::validate::{validate, ValidationError};
use crate::view::{Presenter, ViewState};

/// Fallback when the service reports failure without a message.
pub const GENERIC_SERVER_ERROR: &str = "An error occurred while optimizing your resume.";
/// Shown for any transport-level failure: connect errors, timeouts, bodies
/// that are not JSON.
pub const NETWORK_ERROR_MESSAGE: &str =
    "Network error. Please check your connection and try again.";

/// What a call to `submit` did.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Optimization succeeded; the results view is active.
    Succeeded,
    /// The service reported failure or the request never completed; the
    /// error view is active.
    Failed,
    /// Validation rejected the request before any network call. The view
    /// did not change.
    Rejected(ValidationError),
    /// A submission was already in flight; nothing happened.
    Ignored,
}

pub struct SubmissionController {
    state: ViewState,
    backend: Arc<dyn OptimizeBackend>,
    presenter: Box<dyn Presenter>,
}

impl SubmissionController {
    pub fn new(backend: Arc<dyn OptimizeBackend>, presenter: Box<dyn Presenter>) -> Self {
        Self {
            state: ViewState::Idle,
            backend,
            presenter,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// The submit control is disabled exactly while a submission is in
    /// flight.
    pub fn submit_enabled(&self) -> bool {
        !self.state.is_loading()
    }

    /// Runs one submission through the state machine.
    ///
    /// Invalid input never leaves the current view; a valid request enters
    /// `Loading`, sends exactly one request, and lands in `Results` or
    /// `Error`. At most one submission is in flight: while `Loading`, a
    /// second call is a no-op.
    pub async fn submit(&mut self, request: SubmissionRequest) -> SubmitOutcome {
        if !self.submit_enabled() {
            return SubmitOutcome::Ignored;
        }

        if let Err(error) = validate(&request) {
            self.presenter.show_validation_error(&error);
            return SubmitOutcome::Rejected(error);
        }

        let submission_id = Uuid::new_v4();
        let (file_name, size_bytes) = request
            .resume
            .as_ref()
            .map(|resume| (resume.file_name.clone(), resume.size_bytes()))
            .unwrap_or_default();
        info!(%submission_id, file = %file_name, size_bytes, "submitting resume for optimization");

        self.state = ViewState::Loading;
        self.presenter.show_loading();

        match self.backend.optimize(&request).await {
            Ok(result) if result.success => {
                info!(%submission_id, ats_score = result.ats_score, "optimization succeeded");
                self.presenter.show_results(&result);
                self.state = ViewState::Results(result);
                SubmitOutcome::Succeeded
            }
            Ok(result) => {
                let message = result
                    .error
                    .unwrap_or_else(|| GENERIC_SERVER_ERROR.to_string());
                warn!(%submission_id, %message, "service reported failure");
                self.fail(message)
            }
            Err(error) => {
                warn!(%submission_id, %error, "optimize request failed");
                self.fail(NETWORK_ERROR_MESSAGE.to_string())
            }
        }
    }

    /// Returns the view to the upload form, discarding any displayed result
    /// or error.
    pub fn reset(&mut self) {
        self.state = ViewState::Idle;
        self.presenter.reset();
    }

    fn fail(&mut self, message: String) -> SubmitOutcome {
        self.presenter.show_error(&message);
        self.state = ViewState::Error(message);
        SubmitOutcome::Failed
    }
}
