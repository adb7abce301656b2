use crate::model::{AssessmentInput, BioaccumulationLabel, Component, HazardRank};
use crate::parsing::parse_percentage;
use crate::policy::schema::{ComponentTriggerDef, ScoringPolicy};
use crate::render;
use crate::scoring::gate::{self, GateDecision};
use crate::scoring::mappers::{
    bioaccumulation_concern_score, bioaccumulation_trigger_score, biodegradability_score,
    extract_numeric_score, metal_category_score, pbt_label_score,
};
use crate::scoring::outcome::{AssessmentResult, ComponentTrigger, Exposure, ScoreBreakdown};
use crate::trace::{TraceStep, TraceStepType};
use tracing::{debug, info};

/// Toxicity stage output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToxicityOutcome {
    pub org_acute: u32,
    pub org_chronic: u32,
    pub metal_acute: u32,
    pub metal_chronic: u32,
    pub base_acute: u32,
    pub base_chronic: u32,
    pub rank: u32,
    pub trigger: Option<ComponentTrigger>,
}

/// Run the full assessment pipeline for one input record.
pub fn assess(input: &AssessmentInput, policy: &ScoringPolicy) -> AssessmentResult {
    if gate::check(&input.reg1, &input.reg2) == GateDecision::Skip {
        debug!(policy = %policy.name, "regulatory gate skipped assessment");
        return AssessmentResult::skipped(&policy.name, &input.ghs_statement, input.is_mixture);
    }

    let mut steps = vec![TraceStep::new(
        TraceStepType::Gate,
        "Regulatory listings say 'not listed' -> full assessment",
    )];

    let tox = score_toxicity(input, policy);
    steps.push(TraceStep::new(
        TraceStepType::Toxicity,
        format!(
            "acute max(org {}, metal {}) = {}, chronic max(org {}, metal {}) = {} -> rank {}",
            tox.org_acute,
            tox.metal_acute,
            tox.base_acute,
            tox.org_chronic,
            tox.metal_chronic,
            tox.base_chronic,
            tox.base_acute.max(tox.base_chronic).min(policy.toxicity_cap),
        ),
    ));
    if let Some(ref t) = tox.trigger {
        steps.push(TraceStep::new(
            TraceStepType::ComponentTrigger,
            describe_trigger(t, tox.rank),
        ));
    }

    let bio_rank = score_bioaccumulation(input);
    let bioaccumulation = BioaccumulationLabel::from_rank(bio_rank);
    steps.push(TraceStep::new(
        TraceStepType::Bioaccumulation,
        format!(
            "bioaccumulation rank {} ({})",
            bio_rank,
            bioaccumulation.statement().unwrap_or("not significant")
        ),
    ));

    let pbt_rank = score_persistence(input);
    steps.push(TraceStep::new(
        TraceStepType::Persistence,
        format!("persistence rank {}", pbt_rank),
    ));

    let initial_rank = tox.rank.max(bio_rank);
    let (final_score, persistence_elevated) =
        combine_ranks(initial_rank, pbt_rank, policy.elevation_floor);
    let final_rank = HazardRank::from_score(final_score);
    steps.push(TraceStep::new(
        TraceStepType::Combination,
        if persistence_elevated {
            format!(
                "max(toxicity {}, bioaccumulation {}) = {} raised by persistence to {}",
                tox.rank, bio_rank, initial_rank, final_rank
            )
        } else {
            format!(
                "max(toxicity {}, bioaccumulation {}) = {} -> final rank {}",
                tox.rank, bio_rank, initial_rank, final_rank
            )
        },
    ));

    info!(
        policy = %policy.name,
        final_rank = final_rank.value(),
        toxicity = tox.rank,
        bio_rank,
        pbt_rank,
        persistence_elevated,
        "hazard assessment complete"
    );

    let mut result = AssessmentResult {
        final_rank,
        toxicity_rank: HazardRank::from_score(tox.rank),
        bioaccumulation,
        persistence_elevated,
        rating_text: final_rank.rating_text().to_string(),
        skipped: false,
        ghs_statement: input.ghs_statement.clone(),
        is_mixture: input.is_mixture,
        policy_name: policy.name.clone(),
        scores: Some(ScoreBreakdown {
            org_acute: tox.org_acute,
            org_chronic: tox.org_chronic,
            metal_acute: tox.metal_acute,
            metal_chronic: tox.metal_chronic,
            base_acute: tox.base_acute,
            base_chronic: tox.base_chronic,
            bio_rank,
            pbt_rank,
            initial_rank,
        }),
        component_trigger: tox.trigger,
        steps,
        explanation: String::new(),
    };
    result.explanation = render::statement(&result);
    result
}

/// Organism, metal and component toxicity, combined into one rank.
pub fn score_toxicity(input: &AssessmentInput, policy: &ScoringPolicy) -> ToxicityOutcome {
    let org_acute = extract_numeric_score(&input.org_acute_text);
    let org_chronic = extract_numeric_score(&input.org_chronic_text);
    let metal_acute = metal_category_score(&input.metal_acute_text).min(policy.metal_cap);
    let metal_chronic = metal_category_score(&input.metal_chronic_text).min(policy.metal_cap);

    let base_acute = org_acute.max(metal_acute);
    let base_chronic = org_chronic.max(metal_chronic);
    let mut rank = base_acute.max(base_chronic).min(policy.toxicity_cap);

    let mut trigger = if policy.component_escalation {
        find_component_trigger(&input.components, &policy.component_triggers)
    } else {
        None
    };

    if let Some(ref mut t) = trigger {
        if rank < policy.escalation_ceiling {
            rank += 1;
            t.escalated = true;
        }
    }

    debug!(org_acute, org_chronic, metal_acute, metal_chronic, rank, "toxicity stage");

    ToxicityOutcome {
        org_acute,
        org_chronic,
        metal_acute,
        metal_chronic,
        base_acute,
        base_chronic,
        rank,
        trigger,
    }
}

/// Find the first named component whose acute or chronic score meets a
/// percentage trigger. Components are scanned in entry order.
pub fn find_component_trigger(
    components: &[Component],
    triggers: &[ComponentTriggerDef],
) -> Option<ComponentTrigger> {
    components
        .iter()
        .enumerate()
        .filter(|(_, c)| !c.name.is_empty())
        .find_map(|(index, c)| {
            let percentage = parse_percentage(&c.percentage);
            let scores = [
                (Exposure::Acute, extract_numeric_score(&c.acute_text)),
                (Exposure::Chronic, extract_numeric_score(&c.chronic_text)),
            ];

            scores.into_iter().find_map(|(exposure, score)| {
                triggers
                    .iter()
                    .find(|t| t.score == score && percentage >= t.min_percentage)
                    .map(|t| ComponentTrigger {
                        component: c.name.clone(),
                        index,
                        exposure,
                        score,
                        percentage,
                        min_percentage: t.min_percentage,
                        escalated: false,
                    })
            })
        })
}

pub fn score_bioaccumulation(input: &AssessmentInput) -> u32 {
    bioaccumulation_concern_score(&input.bio_accum_text)
        .max(bioaccumulation_trigger_score(&input.bio_mixture_trigger_text))
}

pub fn score_persistence(input: &AssessmentInput) -> u32 {
    pbt_label_score(&input.pbt_label_text).max(biodegradability_score(&input.biodegradability_text))
}

/// Apply the persistence elevation rule.
///
/// Persistence only replaces the rank when it reaches `elevation_floor`
/// and strictly exceeds `initial_rank`. Returns the final score and
/// whether persistence raised it.
pub fn combine_ranks(initial_rank: u32, pbt_rank: u32, elevation_floor: u32) -> (u32, bool) {
    if pbt_rank >= elevation_floor && initial_rank < pbt_rank {
        (pbt_rank, true)
    } else {
        (initial_rank, false)
    }
}

fn describe_trigger(t: &ComponentTrigger, rank: u32) -> String {
    let exposure = match t.exposure {
        Exposure::Acute => "acute",
        Exposure::Chronic => "chronic",
    };
    if t.escalated {
        format!(
            "component '{}' {} score {} at {}% >= {}% -> toxicity rank raised to {}",
            t.component, exposure, t.score, t.percentage, t.min_percentage, rank
        )
    } else {
        format!(
            "component '{}' {} score {} at {}% >= {}% -> rank {} already at escalation ceiling",
            t.component, exposure, t.score, t.percentage, t.min_percentage, rank
        )
    }
}
