pub mod builtin;
pub mod schema;

use crate::error::KyhError;
use crate::model::HazardRank;
use schema::ScoringPolicy;
use std::collections::HashSet;
use std::path::Path;

/// Load a scoring policy from a JSON file.
pub fn load_policy(path: &Path) -> Result<ScoringPolicy, KyhError> {
    let content = std::fs::read_to_string(path).map_err(|e| KyhError::PolicyLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_policy(&content, path)
}

/// Parse a scoring policy from a JSON string.
pub fn parse_policy(json: &str, source: &Path) -> Result<ScoringPolicy, KyhError> {
    let policy: ScoringPolicy = serde_json::from_str(json).map_err(|e| KyhError::PolicyLoad {
        path: source.to_path_buf(),
        reason: e.to_string(),
    })?;
    validate_policy(&policy)?;
    Ok(policy)
}

/// Parse a scoring policy from a JSON string (no file path context).
pub fn parse_policy_str(json: &str) -> Result<ScoringPolicy, KyhError> {
    let policy: ScoringPolicy = serde_json::from_str(json).map_err(KyhError::Json)?;
    validate_policy(&policy)?;
    Ok(policy)
}

/// Validate that a policy keeps every rank within 0..=4.
pub fn validate_policy(policy: &ScoringPolicy) -> Result<(), KyhError> {
    if policy.name.trim().is_empty() {
        return Err(KyhError::PolicyInvalid("name must not be empty".into()));
    }

    for (field, value) in [
        ("metal_cap", policy.metal_cap),
        ("toxicity_cap", policy.toxicity_cap),
        ("elevation_floor", policy.elevation_floor),
    ] {
        if value > HazardRank::MAX {
            return Err(KyhError::PolicyInvalid(format!(
                "{} is {} but ranks stop at {}",
                field,
                value,
                HazardRank::MAX
            )));
        }
    }

    if policy.escalation_ceiling > policy.toxicity_cap {
        return Err(KyhError::PolicyInvalid(format!(
            "escalation_ceiling {} exceeds toxicity_cap {}",
            policy.escalation_ceiling, policy.toxicity_cap
        )));
    }

    if policy.component_escalation && policy.component_triggers.is_empty() {
        return Err(KyhError::PolicyInvalid(
            "component_escalation is enabled but component_triggers is empty".into(),
        ));
    }

    let mut seen = HashSet::new();
    for trigger in &policy.component_triggers {
        if trigger.score == 0 {
            return Err(KyhError::PolicyInvalid(
                "trigger score must be greater than 0".into(),
            ));
        }
        if trigger.min_percentage.is_sign_negative() {
            return Err(KyhError::PolicyInvalid(format!(
                "trigger for score {} has negative min_percentage {}",
                trigger.score, trigger.min_percentage
            )));
        }
        if !seen.insert(trigger.score) {
            return Err(KyhError::PolicyInvalid(format!(
                "duplicate trigger for score {}",
                trigger.score
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const VALID: &str = r#"{
        "name": "Test",
        "version": "1.0",
        "metal_cap": 4,
        "toxicity_cap": 4,
        "component_escalation": true,
        "escalation_ceiling": 3,
        "component_triggers": [ { "score": 6, "min_percentage": "0.1" } ],
        "elevation_floor": 2
    }"#;

    #[test]
    fn test_parse_valid_policy() {
        let p = parse_policy_str(VALID).unwrap();
        assert_eq!(p.name, "Test");
        assert_eq!(p.component_triggers.len(), 1);
    }

    #[test]
    fn test_cap_above_max_rejected() {
        let json = VALID.replace(r#""toxicity_cap": 4"#, r#""toxicity_cap": 5"#);
        assert!(parse_policy_str(&json).is_err());
    }

    #[test]
    fn test_ceiling_above_cap_rejected() {
        let json = VALID.replace(r#""escalation_ceiling": 3"#, r#""escalation_ceiling": 4"#);
        let json = json.replace(r#""toxicity_cap": 4"#, r#""toxicity_cap": 3"#);
        assert!(parse_policy_str(&json).is_err());
    }

    #[test]
    fn test_negative_percentage_rejected() {
        let json = VALID.replace(r#""0.1""#, r#""-0.1""#);
        assert!(parse_policy_str(&json).is_err());
    }

    #[test]
    fn test_duplicate_trigger_rejected() {
        let json = VALID.replace(
            r#"[ { "score": 6, "min_percentage": "0.1" } ]"#,
            r#"[ { "score": 6, "min_percentage": "0.1" }, { "score": 6, "min_percentage": "1" } ]"#,
        );
        assert!(parse_policy_str(&json).is_err());
    }

    #[test]
    fn test_escalation_without_triggers_rejected() {
        let json = VALID.replace(r#"[ { "score": 6, "min_percentage": "0.1" } ]"#, "[]");
        assert!(matches!(
            parse_policy_str(&json),
            Err(KyhError::PolicyInvalid(_))
        ));
    }

    #[test]
    fn test_load_policy_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(VALID.as_bytes()).unwrap();
        let p = load_policy(file.path()).unwrap();
        assert_eq!(p.version, "1.0");
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let err = load_policy(Path::new("/nonexistent/policy.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/policy.json"));
    }
}
