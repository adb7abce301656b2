use crate::scoring::gate::SKIP_MESSAGE;
use crate::scoring::outcome::AssessmentResult;

/// Render the final hazard statement shown to the user.
pub fn statement(result: &AssessmentResult) -> String {
    if result.skipped {
        return SKIP_MESSAGE.to_string();
    }

    let mut out = String::new();
    out.push_str("Final Hazard Assessment:\n");
    out.push_str(&result.ghs_statement);
    out.push('\n');
    out.push_str(&format!("Toxicity Rank: {}\n", result.toxicity_rank));
    if let Some(label) = result.bioaccumulation.statement() {
        out.push_str(&format!("Bioaccumulation: {}\n", label));
    }
    if result.persistence_elevated {
        out.push_str("Persistence elevates overall hazard.\n");
    }
    out.push_str(&format!("Final Rating: {}", result.rating_text));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BioaccumulationLabel, HazardRank};

    fn evaluated(
        toxicity: HazardRank,
        bio: BioaccumulationLabel,
        elevated: bool,
        rank: HazardRank,
    ) -> AssessmentResult {
        AssessmentResult {
            final_rank: rank,
            toxicity_rank: toxicity,
            bioaccumulation: bio,
            persistence_elevated: elevated,
            rating_text: rank.rating_text().to_string(),
            skipped: false,
            ghs_statement: "H410: Very toxic to aquatic life with long lasting effects".into(),
            is_mixture: false,
            policy_name: "test".into(),
            scores: None,
            component_trigger: None,
            steps: vec![],
            explanation: String::new(),
        }
    }

    #[test]
    fn test_full_statement() {
        let r = evaluated(
            HazardRank::Low,
            BioaccumulationLabel::Moderate,
            true,
            HazardRank::High,
        );
        assert_eq!(
            statement(&r),
            "Final Hazard Assessment:\n\
             H410: Very toxic to aquatic life with long lasting effects\n\
             Toxicity Rank: 1\n\
             Bioaccumulation: Moderate (B)\n\
             Persistence elevates overall hazard.\n\
             Final Rating: High concern – risk mitigation necessary."
        );
    }

    #[test]
    fn test_optional_lines_omitted() {
        let r = evaluated(
            HazardRank::Negligible,
            BioaccumulationLabel::None,
            false,
            HazardRank::Negligible,
        );
        let s = statement(&r);
        assert!(!s.contains("Bioaccumulation"));
        assert!(!s.contains("Persistence"));
        assert!(s.ends_with("Final Rating: Negligible hazard."));
    }

    #[test]
    fn test_skipped_statement() {
        let r = AssessmentResult::skipped("test", "", false);
        assert_eq!(statement(&r), SKIP_MESSAGE);
    }
}
