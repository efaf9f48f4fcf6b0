//! @ai:module:intent Chain the three stages into a short-circuiting pipeline
//! @ai:module:layer application
//! @ai:module:public_api Pipeline, load_config, validate_data, process_data, run_pipeline
//! @ai:module:depends_on stages, outcome, trace
//! @ai:module:stateless true

use crate::outcome::StageOutcome;
use crate::stages::{self, Config, FinalResult, ValidatedData};
use crate::trace::{TraceSink, TracingSink};
use std::path::Path;

/// @ai:intent The three stages bound to the sink that receives their diagnostics
#[derive(Debug, Clone, Default)]
pub struct Pipeline<S = TracingSink> {
    sink: S,
}

impl Pipeline<TracingSink> {
    /// @ai:intent Create a pipeline that logs through `tracing`
    pub fn new() -> Self {
        Self::with_sink(TracingSink)
    }
}

impl<S: TraceSink> Pipeline<S> {
    pub fn with_sink(sink: S) -> Self {
        Self { sink }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// @ai:intent Run the load stage
    /// @ai:effects fs:read, log
    pub fn load_config(&self, source: impl AsRef<Path>) -> StageOutcome<Config> {
        stages::load(source.as_ref(), &self.sink)
    }

    /// @ai:intent Run the validate stage
    /// @ai:effects log
    pub fn validate_data(&self, config: Config) -> StageOutcome<ValidatedData> {
        stages::validate(config, &self.sink)
    }

    /// @ai:intent Run the process stage
    /// @ai:effects log
    pub fn process_data(&self, data: ValidatedData) -> StageOutcome<FinalResult> {
        stages::process(data, &self.sink)
    }

    /// @ai:intent Load, validate and process; the first failure ends the run
    /// @ai:idempotent true
    /// @ai:effects fs:read, log
    pub fn run(&self, source: impl AsRef<Path>) -> StageOutcome<FinalResult> {
        self.load_config(source)
            .and_then(|config| self.validate_data(config))
            .and_then(|data| self.process_data(data))
    }
}

/// @ai:intent Load stage, logging through `tracing`
pub fn load_config(source: impl AsRef<Path>) -> StageOutcome<Config> {
    Pipeline::new().load_config(source)
}

/// @ai:intent Validate stage, logging through `tracing`
pub fn validate_data(config: Config) -> StageOutcome<ValidatedData> {
    Pipeline::new().validate_data(config)
}

/// @ai:intent Process stage, logging through `tracing`
pub fn process_data(data: ValidatedData) -> StageOutcome<FinalResult> {
    Pipeline::new().process_data(data)
}

/// @ai:intent Full chain
/// @ai:example run_pipeline("valid_config.txt") -> Success(code 30) for content "valid_data_content"
pub fn run_pipeline(source: impl AsRef<Path>) -> StageOutcome<FinalResult> {
    load_config(source)
        .and_then(validate_data)
        .and_then(process_data)
}
