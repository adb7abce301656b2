use kyh_core::error::KyhError;
use kyh_core::model::HazardRank;
use kyh_core::policy::builtin;
use kyh_core::policy::schema::ScoringPolicy;
use std::path::Path;

pub fn list() -> Result<(), KyhError> {
    println!("Available predefined policies:\n");
    for name in builtin::PRESETS {
        let policy = builtin::load_preset(name)?;
        let default_marker = if *name == builtin::DEFAULT_PRESET {
            " [default]"
        } else {
            ""
        };
        println!(
            "  {:<10} {} (v{}){}",
            name, policy.name, policy.version, default_marker
        );
        if let Some(ref desc) = policy.description {
            println!("             {}", desc);
        }
        println!();
    }
    Ok(())
}

pub fn explain(preset: &str) -> Result<(), KyhError> {
    let policy = builtin::load_preset(preset)?;
    print_policy(&policy);
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), KyhError> {
    let policy = kyh_core::policy::load_policy(file)?;

    println!("Policy '{}' (v{}) is valid.", policy.name, policy.version);
    println!(
        "  Component escalation: {}",
        if policy.component_escalation {
            "enabled"
        } else {
            "disabled"
        }
    );
    println!("  Triggers: {}", policy.component_triggers.len());

    let mut warnings = Vec::new();
    if !policy.component_escalation && !policy.component_triggers.is_empty() {
        warnings.push("component_triggers are defined but escalation is disabled".to_string());
    }
    if policy.elevation_floor == 0 {
        warnings.push("elevation_floor 0 lets any persistence score elevate the rank".to_string());
    }

    if !warnings.is_empty() {
        println!("\nWarnings:");
        for w in &warnings {
            println!("  - {}", w);
        }
    }

    Ok(())
}

fn print_policy(policy: &ScoringPolicy) {
    println!("{} (version {})\n", policy.name, policy.version);

    if let Some(ref desc) = policy.description {
        println!("{}\n", desc);
    }

    println!("Regulatory gate:");
    println!("  Scoring only runs when the REACH Annex IV/V and OSPAR PLONOR answers");
    println!("  both say 'not listed' (or one is blank). Otherwise it is skipped.\n");

    println!("Toxicity:");
    println!("  GESAMP 'Score N' for acute and chronic organism toxicity.");
    println!(
        "  Metal Category 1 -> 6, Category 2 -> 5, capped at {}.",
        policy.metal_cap
    );
    println!(
        "  Toxicity rank = max(acute, chronic), capped at {}.",
        policy.toxicity_cap
    );
    if policy.component_escalation {
        println!(
            "  Components raise the rank by 1 (only while below {}) when:",
            policy.escalation_ceiling
        );
        for t in &policy.component_triggers {
            println!(
                "    acute or chronic score {} at >= {}%",
                t.score, t.min_percentage
            );
        }
    } else {
        println!("  Component percentages are not evaluated.");
    }
    println!();

    println!("Bioaccumulation:");
    println!("  'high concern' / 'vPvB' -> 3 (vB), 'moderate concern' / 'PBT' -> 2 (B).\n");

    println!("Persistence:");
    println!("  'vPvB' -> 3, 'P' -> 2, biodegradability 'low' -> 2, 'moderate' -> 1.");
    println!(
        "  Persistence >= {} replaces a lower toxicity/bioaccumulation rank.\n",
        policy.elevation_floor
    );

    println!("Ratings:");
    for score in (0..=HazardRank::MAX).rev() {
        let rank = HazardRank::from_score(score);
        println!("  {}  {}", rank, rank.rating_text());
    }
    println!();
}
