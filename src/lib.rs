//! @ai:module:intent Typed load/validate/process pipeline with a closed error taxonomy
//! @ai:module:layer infrastructure
//! @ai:module:public_api error, outcome, stages, pipeline, report, settings, trace
//! @ai:module:stateless true
//!
//! # Config Pipeline
//!
//! Three stages run in order. Each returns a [`StageOutcome`]; the first
//! failure ends the chain and is reported as one of four [`PipelineError`]
//! kinds.
//!
//! ## Example
//!
//! ```rust,no_run
//! use config_pipeline::{load_config, process_data, report_outcome, validate_data};
//!
//! let outcome = load_config("valid_config.txt")
//!     .and_then(validate_data)
//!     .and_then(process_data);
//! println!("{}", report_outcome(&outcome));
//! ```

pub mod error;
pub mod outcome;
pub mod pipeline;
pub mod report;
pub mod settings;
pub mod stages;
pub mod trace;

pub use error::{Error, PipelineError, Result, Stage};
pub use outcome::StageOutcome;
pub use pipeline::{load_config, process_data, run_pipeline, validate_data, Pipeline};
pub use report::{describe_error, format_outcome, report_outcome, OutcomeReport, OutputFormat};
pub use settings::{PipelineSettings, ReportSettings};
pub use stages::{Config, FinalResult, ValidatedData};
pub use trace::{NullSink, RecordingSink, TraceEvent, TraceSink, TracingSink};
