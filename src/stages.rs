//! @ai:module:intent Load, validate and process stages and the values they produce
//! @ai:module:layer application
//! @ai:module:public_api Config, ValidatedData, FinalResult, load, validate, process
//! @ai:module:depends_on error, outcome, trace
//! @ai:module:stateless true

use crate::error::PipelineError;
use crate::outcome::StageOutcome;
use crate::trace::{TraceEvent, TraceSink};
use serde::Serialize;
use std::path::Path;

const MALFORMED_MARKER: &str = "malformed";
const DISALLOWED_MARKER: &str = "invalid_field";
const VALIDATED_PREFIX: &str = "Validated: ";
const MIN_PROCESSED_LEN: usize = 10;

const PARSE_ERROR_CONTEXT: &str = "malformed";
const PARSE_ERROR_LINE: usize = 1;
const INVALID_FIELD_NAME: &str = "invalid_field";
const INVALID_FIELD_VALUE: &str = "contains disallowed value";
const PROCESSING_TASK: &str = "Data Processing";
const PROCESSING_DETAILS: &str = "Input data too short for task";

/// @ai:intent Raw configuration text read by the load stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    data: String,
}

impl Config {
    pub fn new(data: impl Into<String>) -> Self {
        Self { data: data.into() }
    }

    pub fn data(&self) -> &str {
        &self.data
    }
}

/// @ai:intent Configuration text that passed validation, carrying the validated prefix
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidatedData {
    processed_data: String,
}

impl ValidatedData {
    /// @ai:intent Build validated data without running the validate stage
    /// @ai:context lets callers drive the process stage directly with arbitrary input
    pub fn new_unchecked(processed_data: impl Into<String>) -> Self {
        Self {
            processed_data: processed_data.into(),
        }
    }

    pub fn processed_data(&self) -> &str {
        &self.processed_data
    }
}

/// @ai:intent Terminal success value of the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FinalResult {
    final_result_code: usize,
}

impl FinalResult {
    pub fn final_result_code(&self) -> usize {
        self.final_result_code
    }
}

/// @ai:intent Read a config source and reject empty or malformed content
/// @ai:post Failure holds ConfigRead or ConfigParse only
/// @ai:effects fs:read, log
pub fn load(source: &Path, sink: &dyn TraceSink) -> StageOutcome<Config> {
    let filename = source.display().to_string();

    let bytes = match std::fs::read(source) {
        Ok(bytes) => bytes,
        Err(e) => {
            sink.record(TraceEvent::OpenFailed {
                filename: filename.clone(),
                reason: e.to_string(),
            });
            return StageOutcome::Failure(PipelineError::ConfigRead { filename });
        }
    };
    let content = String::from_utf8_lossy(&bytes).into_owned();

    if content.is_empty() || content.contains(MALFORMED_MARKER) {
        sink.record(TraceEvent::MalformedDetected { filename });
        return StageOutcome::Failure(PipelineError::ConfigParse {
            line_content: PARSE_ERROR_CONTEXT.to_string(),
            line_number: PARSE_ERROR_LINE,
        });
    }

    sink.record(TraceEvent::Loaded { filename });
    StageOutcome::Success(Config { data: content })
}

/// @ai:intent Reject configs containing the disallowed marker, prefix the rest
/// @ai:post Success data starts with the validated prefix followed by the config data
/// @ai:effects log
pub fn validate(config: Config, sink: &dyn TraceSink) -> StageOutcome<ValidatedData> {
    if config.data.contains(DISALLOWED_MARKER) {
        sink.record(TraceEvent::InvalidFieldDetected);
        return StageOutcome::Failure(PipelineError::Validation {
            field_name: INVALID_FIELD_NAME.to_string(),
            invalid_value: INVALID_FIELD_VALUE.to_string(),
        });
    }

    sink.record(TraceEvent::Validated);
    StageOutcome::Success(ValidatedData {
        processed_data: format!("{}{}", VALIDATED_PREFIX, config.data),
    })
}

/// @ai:intent Turn validated data into a result code equal to its byte length
/// @ai:pre none; short input is reported as a Processing failure
/// @ai:effects log
pub fn process(data: ValidatedData, sink: &dyn TraceSink) -> StageOutcome<FinalResult> {
    let length = data.processed_data.len();

    if length < MIN_PROCESSED_LEN {
        sink.record(TraceEvent::TooShort { length });
        return StageOutcome::Failure(PipelineError::Processing {
            task_name: PROCESSING_TASK.to_string(),
            details: PROCESSING_DETAILS.to_string(),
        });
    }

    sink.record(TraceEvent::Processed {
        final_result_code: length,
    });
    StageOutcome::Success(FinalResult {
        final_result_code: length,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::{NullSink, RecordingSink};
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_source(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    fn parse_error() -> PipelineError {
        PipelineError::ConfigParse {
            line_content: "malformed".to_string(),
            line_number: 1,
        }
    }

    #[test]
    fn test_load_reads_content() {
        let file = write_source("valid_data_content");
        let outcome = load(file.path(), &NullSink);
        assert_eq!(outcome, StageOutcome::Success(Config::new("valid_data_content")));
    }

    #[test]
    fn test_load_missing_source_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("non_existent_config.txt");

        let outcome = load(&path, &NullSink);

        assert_eq!(
            outcome,
            StageOutcome::Failure(PipelineError::ConfigRead {
                filename: path.display().to_string()
            })
        );
    }

    #[test]
    fn test_load_empty_or_malformed_is_parse_error() {
        for content in ["", "malformed content", "prefix malformed", "xmalformedx"] {
            let file = write_source(content);
            let outcome = load(file.path(), &NullSink);
            assert_eq!(outcome, StageOutcome::Failure(parse_error()), "content = {:?}", content);
        }
    }

    #[test]
    fn test_load_invalid_utf8_is_not_a_read_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0x66, 0x6f, 0xff, 0x6f, 0x20, 0x62, 0x61, 0x72]).unwrap();

        let outcome = load(file.path(), &NullSink);

        assert!(outcome.is_success());
    }

    #[test]
    fn test_load_trace_distinguishes_paths() {
        let sink = RecordingSink::new();
        let dir = tempfile::tempdir().unwrap();
        let good = write_source("fine");
        let bad = write_source("malformed");

        let _ = load(&dir.path().join("missing"), &sink);
        let _ = load(bad.path(), &sink);
        let _ = load(good.path(), &sink);

        let events = sink.events();
        assert_eq!(events.len(), 3);
        assert!(matches!(events[0], TraceEvent::OpenFailed { .. }));
        assert!(matches!(events[1], TraceEvent::MalformedDetected { .. }));
        assert!(matches!(events[2], TraceEvent::Loaded { .. }));
    }

    #[test]
    fn test_validate_prefixes_data() {
        let outcome = validate(Config::new("valid_data_content"), &NullSink);
        let data = outcome.success().unwrap();

        assert_eq!(data.processed_data(), "Validated: valid_data_content");
        assert_eq!(data.processed_data().len(), 30);
    }

    #[test]
    fn test_validate_rejects_invalid_field() {
        for data in ["invalid_field", "valid_data\ninvalid_field", "a invalid_field b"] {
            let outcome = validate(Config::new(data), &NullSink);
            assert_eq!(
                outcome,
                StageOutcome::Failure(PipelineError::Validation {
                    field_name: "invalid_field".to_string(),
                    invalid_value: "contains disallowed value".to_string(),
                })
            );
        }
    }

    #[test]
    fn test_process_returns_byte_length() {
        let outcome = process(ValidatedData::new_unchecked("Validated: short"), &NullSink);
        assert_eq!(outcome.success().map(FinalResult::final_result_code), Some(16));
    }

    #[test]
    fn test_process_counts_bytes_not_chars() {
        // five two-byte characters
        let outcome = process(ValidatedData::new_unchecked("ééééé"), &NullSink);
        assert_eq!(outcome.success().map(FinalResult::final_result_code), Some(10));
    }

    #[test]
    fn test_process_rejects_short_data() {
        for data in ["", "x", "123456789"] {
            let outcome = process(ValidatedData::new_unchecked(data), &NullSink);
            assert_eq!(
                outcome,
                StageOutcome::Failure(PipelineError::Processing {
                    task_name: "Data Processing".to_string(),
                    details: "Input data too short for task".to_string(),
                })
            );
        }
    }

    #[test]
    fn test_process_boundary_is_inclusive() {
        let outcome = process(ValidatedData::new_unchecked("1234567890"), &NullSink);
        assert_eq!(outcome.success().map(FinalResult::final_result_code), Some(10));
    }
}
