use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Scoring constants applied by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringPolicy {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub version: String,
    /// Ceiling for scores derived from metal categories.
    pub metal_cap: u32,
    /// Ceiling for the combined toxicity rank.
    pub toxicity_cap: u32,
    /// Whether mixture components may raise the toxicity rank.
    pub component_escalation: bool,
    /// Escalation applies only while the toxicity rank is below this value.
    pub escalation_ceiling: u32,
    #[serde(default)]
    pub component_triggers: Vec<ComponentTriggerDef>,
    /// Minimum persistence rank that may elevate the final rank.
    pub elevation_floor: u32,
}

/// A component fires when its acute or chronic score equals `score`
/// and its percentage is at least `min_percentage`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentTriggerDef {
    pub score: u32,
    /// Percentage as a quoted decimal string for exact comparison.
    pub min_percentage: Decimal,
}
