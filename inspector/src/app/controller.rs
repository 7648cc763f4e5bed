//! # Analysis Controller
//!
//! The submit/resolve state machine shared by all four analysis workflows.
//!
//! Transitions are re-entrant: any state but `Loading` was reached by a
//! settled or rejected submission, and a new submission may leave it again.
//! There is no terminal state; the controller lives as long as its view.

use crate::app::state::ViewState;
use crate::core::error::AppError;

/// Generic view-state machine with stale-response protection.
///
/// Each submission advances a generation counter. A response is applied only
/// while its generation is still current, so when rapid resubmission leaves
/// two queries in flight the earlier one settling late cannot overwrite the
/// newer result.
#[derive(Debug)]
pub struct AnalysisController<T> {
    view: ViewState<T>,
    generation: u64,
}

impl<T> AnalysisController<T> {
    pub fn new() -> Self {
        Self { view: ViewState::Idle, generation: 0 }
    }

    pub fn view(&self) -> &ViewState<T> {
        &self.view
    }

    /// Start a submission: transition to `Loading`, clearing any previous
    /// error, and return the generation the response must present.
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.view = ViewState::Loading;
        self.generation
    }

    /// Record a validation failure. No request was issued, and the
    /// generation still advances so an in-flight response from an earlier
    /// submission cannot overwrite the inline message.
    pub fn reject(&mut self, message: impl Into<String>) {
        self.generation += 1;
        self.view = ViewState::Failure(message.into());
    }

    /// Apply a settled query. Returns `false` when the response is stale
    /// (its generation is no longer current) and was discarded.
    pub fn resolve(&mut self, generation: u64, result: Result<T, AppError>) -> bool {
        if generation != self.generation {
            return false;
        }
        self.view = match result {
            Ok(payload) => ViewState::Success(payload),
            Err(err) => ViewState::Failure(err.message().to_string()),
        };
        true
    }
}

impl<T> Default for AnalysisController<T> {
    fn default() -> Self {
        Self::new()
    }
}
