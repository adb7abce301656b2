use crate::model::{BioaccumulationLabel, HazardRank};
use crate::scoring::gate::SKIP_MESSAGE;
use crate::trace::{TraceStep, TraceStepType};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Intermediate scores of one evaluation, before rank clamping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub org_acute: u32,
    pub org_chronic: u32,
    /// Metal acute score after the metal cap.
    pub metal_acute: u32,
    /// Metal chronic score after the metal cap.
    pub metal_chronic: u32,
    pub base_acute: u32,
    pub base_chronic: u32,
    pub bio_rank: u32,
    pub pbt_rank: u32,
    /// max(toxicity rank, bioaccumulation rank).
    pub initial_rank: u32,
}

/// Which toxicity exposure a component trigger matched on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Exposure {
    Acute,
    Chronic,
}

/// The first mixture component that met a percentage trigger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentTrigger {
    pub component: String,
    /// Position of the component in entry order.
    pub index: usize,
    pub exposure: Exposure,
    pub score: u32,
    pub percentage: Decimal,
    pub min_percentage: Decimal,
    /// Whether the trigger actually raised the toxicity rank.
    pub escalated: bool,
}

/// Outcome of one hazard assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub final_rank: HazardRank,
    pub toxicity_rank: HazardRank,
    pub bioaccumulation: BioaccumulationLabel,
    pub persistence_elevated: bool,
    pub rating_text: String,
    /// True when the regulatory gate stopped the assessment.
    pub skipped: bool,
    pub ghs_statement: String,
    pub is_mixture: bool,
    /// Name of the scoring policy that was applied.
    pub policy_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scores: Option<ScoreBreakdown>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_trigger: Option<ComponentTrigger>,
    pub steps: Vec<TraceStep>,
    /// Rendered statement for display.
    pub explanation: String,
}

impl AssessmentResult {
    pub fn skipped(policy_name: &str, ghs_statement: &str, is_mixture: bool) -> Self {
        Self {
            final_rank: HazardRank::Negligible,
            toxicity_rank: HazardRank::Negligible,
            bioaccumulation: BioaccumulationLabel::None,
            persistence_elevated: false,
            rating_text: String::new(),
            skipped: true,
            ghs_statement: ghs_statement.to_string(),
            is_mixture,
            policy_name: policy_name.to_string(),
            scores: None,
            component_trigger: None,
            steps: vec![TraceStep::new(
                TraceStepType::Gate,
                "Regulatory listing indicates exemption or was not provided",
            )],
            explanation: SKIP_MESSAGE.to_string(),
        }
    }
}
