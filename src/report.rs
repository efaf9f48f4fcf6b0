//! @ai:module:intent Turn a final pipeline outcome into a success summary or a per-kind error report
//! @ai:module:layer infrastructure
//! @ai:module:public_api OutputFormat, OutcomeReport, describe_error, report_outcome, format_outcome
//! @ai:module:depends_on error, outcome, stages
//! @ai:module:stateless true

use crate::error::{PipelineError, Result, Stage};
use crate::outcome::StageOutcome;
use crate::stages::FinalResult;
use colored::Colorize;
use serde::{Deserialize, Serialize};

/// @ai:intent Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    JsonPretty,
}

/// @ai:intent Serializable summary of a pipeline outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum OutcomeReport {
    Success {
        final_result_code: usize,
    },
    Failure {
        stage: Stage,
        description: String,
        error: PipelineError,
    },
}

impl OutcomeReport {
    /// @ai:intent Build a report from a final outcome
    /// @ai:effects pure
    pub fn from_outcome(outcome: &StageOutcome<FinalResult>) -> Self {
        match outcome {
            StageOutcome::Success(result) => OutcomeReport::Success {
                final_result_code: result.final_result_code(),
            },
            StageOutcome::Failure(err) => OutcomeReport::Failure {
                stage: err.stage(),
                description: describe_error(err),
                error: err.clone(),
            },
        }
    }
}

/// @ai:intent Describe an error including every field of its kind
/// @ai:invariant the match has no wildcard arm, so a new kind must be handled here
/// @ai:effects pure
pub fn describe_error(err: &PipelineError) -> String {
    match err {
        PipelineError::ConfigRead { filename } => {
            format!("Configuration Read Error: Could not open file '{}'", filename)
        }
        PipelineError::ConfigParse {
            line_content,
            line_number,
        } => format!(
            "Configuration Parse Error: Malformed content at line {} (Context: '{}')",
            line_number, line_content
        ),
        PipelineError::Validation {
            field_name,
            invalid_value,
        } => format!(
            "Data Validation Error: Field '{}' has invalid value '{}'",
            field_name, invalid_value
        ),
        PipelineError::Processing { task_name, details } => format!(
            "Data Processing Error: Task '{}' failed. Details: {}",
            task_name, details
        ),
    }
}

/// @ai:intent Plain-text report of a final outcome
/// @ai:effects pure
/// @ai:example Success(code 30) -> "Pipeline Succeeded! Final Result Code: 30"
pub fn report_outcome(outcome: &StageOutcome<FinalResult>) -> String {
    match outcome {
        StageOutcome::Success(result) => format!(
            "Pipeline Succeeded! Final Result Code: {}",
            result.final_result_code()
        ),
        StageOutcome::Failure(err) => {
            format!("Pipeline Failed! Error details: {}", describe_error(err))
        }
    }
}

/// @ai:intent Format a final outcome in the requested output format
/// @ai:effects pure
pub fn format_outcome(outcome: &StageOutcome<FinalResult>, format: OutputFormat) -> Result<String> {
    let report = OutcomeReport::from_outcome(outcome);
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(&report)?),
        OutputFormat::JsonPretty => Ok(serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => Ok(format_outcome_text(&report)),
    }
}

/// @ai:intent Format a report as colored human-readable text
/// @ai:effects pure
fn format_outcome_text(report: &OutcomeReport) -> String {
    match report {
        OutcomeReport::Success { final_result_code } => format!(
            "{} Final Result Code: {}",
            "Pipeline Succeeded!".green().bold(),
            final_result_code
        ),
        OutcomeReport::Failure {
            stage, description, ..
        } => format!(
            "{} Error details: {} {}",
            "Pipeline Failed!".red().bold(),
            description,
            format!("(stage: {})", stage).dimmed()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::process_data;
    use crate::stages::ValidatedData;
    use pretty_assertions::assert_eq;

    fn success(code_source: &str) -> StageOutcome<FinalResult> {
        process_data(ValidatedData::new_unchecked(code_source))
    }

    fn all_errors() -> Vec<PipelineError> {
        vec![
            PipelineError::ConfigRead {
                filename: "non_existent_config.txt".to_string(),
            },
            PipelineError::ConfigParse {
                line_content: "malformed".to_string(),
                line_number: 1,
            },
            PipelineError::Validation {
                field_name: "invalid_field".to_string(),
                invalid_value: "contains disallowed value".to_string(),
            },
            PipelineError::Processing {
                task_name: "Data Processing".to_string(),
                details: "Input data too short for task".to_string(),
            },
        ]
    }

    #[test]
    fn test_success_report_has_code() {
        let outcome = success("Validated: valid_data_content");
        assert_eq!(
            report_outcome(&outcome),
            "Pipeline Succeeded! Final Result Code: 30"
        );
    }

    #[test]
    fn test_error_descriptions_include_every_field() {
        let descriptions: Vec<String> = all_errors().iter().map(describe_error).collect();

        assert_eq!(
            descriptions,
            vec![
                "Configuration Read Error: Could not open file 'non_existent_config.txt'",
                "Configuration Parse Error: Malformed content at line 1 (Context: 'malformed')",
                "Data Validation Error: Field 'invalid_field' has invalid value 'contains disallowed value'",
                "Data Processing Error: Task 'Data Processing' failed. Details: Input data too short for task",
            ]
        );
    }

    #[test]
    fn test_failure_report_prefix() {
        for err in all_errors() {
            let report = report_outcome(&StageOutcome::Failure(err.clone()));
            assert_eq!(
                report,
                format!("Pipeline Failed! Error details: {}", describe_error(&err))
            );
        }
    }

    #[test]
    fn test_text_format_mentions_stage() {
        colored::control::set_override(false);
        let outcome: StageOutcome<FinalResult> = StageOutcome::Failure(all_errors().remove(2));

        let text = format_outcome(&outcome, OutputFormat::Text).unwrap();

        assert!(text.starts_with("Pipeline Failed! Error details: Data Validation Error"));
        assert!(text.ends_with("(stage: validate)"));
    }

    #[test]
    fn test_json_format_success() {
        let outcome = success("Validated: short");
        let json = format_outcome(&outcome, OutputFormat::Json).unwrap();
        assert_eq!(json, r#"{"status":"success","final_result_code":16}"#);
    }

    #[test]
    fn test_json_format_failure_carries_payload() {
        let outcome: StageOutcome<FinalResult> = StageOutcome::Failure(all_errors().remove(1));

        let json = format_outcome(&outcome, OutputFormat::JsonPretty).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["status"], "failure");
        assert_eq!(value["stage"], "load");
        assert_eq!(value["error"]["kind"], "config_parse");
        assert_eq!(value["error"]["line_number"], 1);
        assert_eq!(value["error"]["line_content"], "malformed");
    }
}
