use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw attributes for one substance or mixture, exactly as entered.
///
/// Every field is free text except `is_mixture`; missing JSON fields
/// default to empty so partially filled forms still deserialize.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssessmentInput {
    /// REACH Annex IV / V listing statement.
    pub reg1: String,
    /// OSPAR PLONOR listing statement.
    pub reg2: String,
    /// GHS environmental hazard phrase, echoed verbatim in the statement.
    pub ghs_statement: String,
    /// Whether the organism toxicity fields describe a mixture.
    pub is_mixture: bool,
    /// Organism acute toxicity, e.g. "Score 4 - Moderately Toxic".
    pub org_acute_text: String,
    /// Organism chronic toxicity.
    pub org_chronic_text: String,
    /// Metal acute category, e.g. "Category 1".
    pub metal_acute_text: String,
    /// Metal chronic category.
    pub metal_chronic_text: String,
    /// Mixture components in entry order.
    pub components: Vec<Component>,
    /// Bioaccumulation classification, e.g. "High concern".
    pub bio_accum_text: String,
    /// Mixture bioaccumulation trigger, e.g. "vPvB mixture".
    pub bio_mixture_trigger_text: String,
    /// PBT classification, e.g. "vPvB" or "P".
    pub pbt_label_text: String,
    /// Biodegradability, e.g. "Low".
    pub biodegradability_text: String,
}

/// A single mixture component with its share and toxicity scores.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Component {
    pub name: String,
    /// Share of the mixture in percent, as typed.
    pub percentage: String,
    pub acute_text: String,
    pub chronic_text: String,
}

/// Final hazard rank, always within 0..=4.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(into = "u8", try_from = "u8")]
pub enum HazardRank {
    #[default]
    Negligible,
    Low,
    Moderate,
    High,
    Severe,
}

impl HazardRank {
    pub const MAX: u32 = 4;

    /// Clamp an arbitrary stage score into a rank.
    pub fn from_score(score: u32) -> HazardRank {
        match score {
            0 => HazardRank::Negligible,
            1 => HazardRank::Low,
            2 => HazardRank::Moderate,
            3 => HazardRank::High,
            _ => HazardRank::Severe,
        }
    }

    pub fn value(self) -> u8 {
        match self {
            HazardRank::Negligible => 0,
            HazardRank::Low => 1,
            HazardRank::Moderate => 2,
            HazardRank::High => 3,
            HazardRank::Severe => 4,
        }
    }

    pub fn rating_text(self) -> &'static str {
        match self {
            HazardRank::Severe => "Severe hazard – strict controls required.",
            HazardRank::High => "High concern – risk mitigation necessary.",
            HazardRank::Moderate => "Moderate concern – exercise caution.",
            HazardRank::Low => "Low concern.",
            HazardRank::Negligible => "Negligible hazard.",
        }
    }
}

impl From<HazardRank> for u8 {
    fn from(rank: HazardRank) -> u8 {
        rank.value()
    }
}

impl TryFrom<u8> for HazardRank {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if u32::from(value) > HazardRank::MAX {
            return Err(format!("hazard rank {value} is outside 0..=4"));
        }
        Ok(HazardRank::from_score(u32::from(value)))
    }
}

impl fmt::Display for HazardRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BioaccumulationLabel {
    #[default]
    None,
    Moderate,
    VeryHigh,
}

impl BioaccumulationLabel {
    pub fn from_rank(bio_rank: u32) -> BioaccumulationLabel {
        match bio_rank {
            3 => BioaccumulationLabel::VeryHigh,
            2 => BioaccumulationLabel::Moderate,
            _ => BioaccumulationLabel::None,
        }
    }

    /// Display text, or `None` when no bioaccumulation statement applies.
    pub fn statement(self) -> Option<&'static str> {
        match self {
            BioaccumulationLabel::VeryHigh => Some("Very high (vB)"),
            BioaccumulationLabel::Moderate => Some("Moderate (B)"),
            BioaccumulationLabel::None => None,
        }
    }
}
