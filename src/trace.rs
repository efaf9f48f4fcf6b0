//! @ai:module:intent Injectable diagnostic side channel for pipeline stages
//! @ai:module:layer infrastructure
//! @ai:module:public_api TraceEvent, TraceSink, TracingSink, NullSink, RecordingSink
//! @ai:module:depends_on error
//! @ai:module:thread_safe true

use crate::error::Stage;
use std::sync::Mutex;

/// @ai:intent Diagnostic event emitted by a stage; never affects stage results
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceEvent {
    OpenFailed { filename: String, reason: String },
    MalformedDetected { filename: String },
    Loaded { filename: String },
    InvalidFieldDetected,
    Validated,
    TooShort { length: usize },
    Processed { final_result_code: usize },
}

impl TraceEvent {
    /// @ai:intent Stage that emitted the event
    pub fn stage(&self) -> Stage {
        match self {
            TraceEvent::OpenFailed { .. }
            | TraceEvent::MalformedDetected { .. }
            | TraceEvent::Loaded { .. } => Stage::Load,
            TraceEvent::InvalidFieldDetected | TraceEvent::Validated => Stage::Validate,
            TraceEvent::TooShort { .. } | TraceEvent::Processed { .. } => Stage::Process,
        }
    }

    /// @ai:intent Short log message for the event
    pub fn summary(&self) -> &'static str {
        match self {
            TraceEvent::OpenFailed { .. } => "failed to open config source",
            TraceEvent::MalformedDetected { .. } => "detected malformed config",
            TraceEvent::Loaded { .. } => "config loaded",
            TraceEvent::InvalidFieldDetected => "detected invalid field",
            TraceEvent::Validated => "data validated",
            TraceEvent::TooShort { .. } => "data too short",
            TraceEvent::Processed { .. } => "data processed",
        }
    }

    /// @ai:intent Whether the event reports the stage rejecting its input; picks the log level
    pub fn is_failure(&self) -> bool {
        match self {
            TraceEvent::OpenFailed { .. }
            | TraceEvent::MalformedDetected { .. }
            | TraceEvent::InvalidFieldDetected
            | TraceEvent::TooShort { .. } => true,
            TraceEvent::Loaded { .. } | TraceEvent::Validated | TraceEvent::Processed { .. } => {
                false
            }
        }
    }
}

/// @ai:intent Receiver of stage diagnostics
pub trait TraceSink: Send + Sync {
    /// @ai:intent Record a single diagnostic event
    fn record(&self, event: TraceEvent);
}

/// @ai:intent Forwards events to the `tracing` subscriber
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TraceSink for TracingSink {
    /// @ai:effects log
    fn record(&self, event: TraceEvent) {
        let stage = event.stage().name();
        if event.is_failure() {
            tracing::warn!(stage, ?event, "{}", event.summary());
        } else {
            tracing::debug!(stage, ?event, "{}", event.summary());
        }
    }
}

/// @ai:intent Discards every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl TraceSink for NullSink {
    fn record(&self, _event: TraceEvent) {}
}

/// @ai:intent Keeps events in memory so callers can inspect the side channel
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<TraceEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// @ai:intent Snapshot of the events recorded so far
    pub fn events(&self) -> Vec<TraceEvent> {
        match self.events.lock() {
            Ok(events) => events.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl TraceSink for RecordingSink {
    fn record(&self, event: TraceEvent) {
        match self.events.lock() {
            Ok(mut events) => events.push(event),
            Err(poisoned) => poisoned.into_inner().push(event),
        }
    }
}
