pub mod error;
pub mod model;
pub mod parsing;
pub mod policy;
pub mod render;
pub mod scoring;
pub mod trace;

use error::KyhError;
use model::AssessmentInput;
use policy::schema::ScoringPolicy;
use scoring::AssessmentResult;
use std::path::Path;

/// Main API entry point: assess one input record with the standard policy.
///
/// Never fails. Unrecognized or malformed text scores as no hazard, and a
/// regulatory exemption comes back as a result with `skipped` set.
pub fn assess(input: &AssessmentInput) -> AssessmentResult {
    scoring::assess(input, policy::builtin::standard())
}

/// Assess one input record with an explicit scoring policy.
pub fn assess_with_policy(input: &AssessmentInput, policy: &ScoringPolicy) -> AssessmentResult {
    scoring::assess(input, policy)
}

/// Load an assessment input record from a JSON file.
pub fn load_input(path: &Path) -> Result<AssessmentInput, KyhError> {
    let content = std::fs::read_to_string(path).map_err(|e| KyhError::InputLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    serde_json::from_str(&content).map_err(|e| KyhError::InputLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Parse an assessment input record from a JSON string.
pub fn parse_input_str(json: &str) -> Result<AssessmentInput, KyhError> {
    Ok(serde_json::from_str(json)?)
}
