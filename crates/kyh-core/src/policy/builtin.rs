use crate::error::KyhError;
use crate::policy::parse_policy_str;
use crate::policy::schema::ScoringPolicy;
use std::sync::LazyLock;

const STANDARD_JSON: &str = include_str!("../../../../policies/standard.json");
const BASIC_JSON: &str = include_str!("../../../../policies/basic.json");

/// Available predefined policies.
pub const PRESETS: &[&str] = &["standard", "basic"];

pub const DEFAULT_PRESET: &str = "standard";

/// Load a predefined policy by name.
pub fn load_preset(name: &str) -> Result<ScoringPolicy, KyhError> {
    match name {
        "standard" => parse_policy_str(STANDARD_JSON),
        "basic" => parse_policy_str(BASIC_JSON),
        _ => Err(KyhError::UnknownPreset {
            name: name.to_string(),
            available: PRESETS.join(", "),
        }),
    }
}

/// The standard policy, parsed once from the embedded preset.
pub fn standard() -> &'static ScoringPolicy {
    static STANDARD: LazyLock<ScoringPolicy> = LazyLock::new(|| {
        parse_policy_str(STANDARD_JSON).expect("embedded standard policy must be valid")
    });
    &STANDARD
}
