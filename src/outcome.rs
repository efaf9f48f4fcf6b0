//! @ai:module:intent Success-or-failure outcome of a stage with a short-circuiting combinator
//! @ai:module:layer domain
//! @ai:module:public_api StageOutcome
//! @ai:module:depends_on error
//! @ai:module:stateless true

use crate::error::{PipelineError, Stage};

/// @ai:intent Outcome of one stage or of a whole chain
/// @ai:invariant exactly one of success payload or error is held
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum StageOutcome<T> {
    Success(T),
    Failure(PipelineError),
}

impl<T> StageOutcome<T> {
    /// @ai:intent Chain the next stage, skipping it when this outcome already failed
    /// @ai:post on Failure the closure is never invoked and the error is returned unchanged
    /// @ai:effects pure
    pub fn and_then<U, F>(self, next: F) -> StageOutcome<U>
    where
        F: FnOnce(T) -> StageOutcome<U>,
    {
        match self {
            StageOutcome::Success(value) => next(value),
            StageOutcome::Failure(err) => StageOutcome::Failure(err),
        }
    }

    /// @ai:intent Transform the success payload
    /// @ai:effects pure
    pub fn map<U, F>(self, f: F) -> StageOutcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            StageOutcome::Success(value) => StageOutcome::Success(f(value)),
            StageOutcome::Failure(err) => StageOutcome::Failure(err),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, StageOutcome::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    pub fn success(&self) -> Option<&T> {
        match self {
            StageOutcome::Success(value) => Some(value),
            StageOutcome::Failure(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&PipelineError> {
        match self {
            StageOutcome::Success(_) => None,
            StageOutcome::Failure(err) => Some(err),
        }
    }

    /// @ai:intent Stage that terminated the chain, if it failed
    pub fn failed_stage(&self) -> Option<Stage> {
        self.failure().map(PipelineError::stage)
    }

    /// @ai:intent Convert into a std Result for use with `?`
    pub fn into_result(self) -> Result<T, PipelineError> {
        self.into()
    }
}

impl<T> From<Result<T, PipelineError>> for StageOutcome<T> {
    fn from(result: Result<T, PipelineError>) -> Self {
        match result {
            Ok(value) => StageOutcome::Success(value),
            Err(err) => StageOutcome::Failure(err),
        }
    }
}

impl<T> From<StageOutcome<T>> for Result<T, PipelineError> {
    fn from(outcome: StageOutcome<T>) -> Self {
        match outcome {
            StageOutcome::Success(value) => Ok(value),
            StageOutcome::Failure(err) => Err(err),
        }
    }
}
