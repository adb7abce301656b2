use kyh_core::scoring::outcome::Exposure;
use kyh_core::scoring::AssessmentResult;

pub fn print(result: &AssessmentResult, verbose: bool) {
    println!("=== {} ===\n", result.policy_name);

    if result.skipped {
        println!("  {}\n", result.explanation);
        return;
    }

    for line in result.explanation.lines() {
        println!("  {}", line);
    }
    println!();

    if !verbose {
        return;
    }

    let composition = if result.is_mixture {
        "Mixture"
    } else {
        "Single component"
    };
    println!("  Composition: {}", composition);

    if let Some(ref s) = result.scores {
        println!("  Scores:");
        println!(
            "    {:<16} org {:<3} metal {:<3} -> {}",
            "Acute", s.org_acute, s.metal_acute, s.base_acute
        );
        println!(
            "    {:<16} org {:<3} metal {:<3} -> {}",
            "Chronic", s.org_chronic, s.metal_chronic, s.base_chronic
        );
        println!("    {:<16} {}", "Toxicity rank", result.toxicity_rank);
        println!("    {:<16} {}", "Bioaccumulation", s.bio_rank);
        println!("    {:<16} {}", "Persistence", s.pbt_rank);
        println!("    {:<16} {}", "Initial rank", s.initial_rank);
        println!("    {:<16} {}", "Final rank", result.final_rank);
        println!();
    }

    if let Some(ref t) = result.component_trigger {
        let exposure = match t.exposure {
            Exposure::Acute => "acute",
            Exposure::Chronic => "chronic",
        };
        let marker = if t.escalated { " ***" } else { "" };
        println!(
            "  Triggering component: {} (#{}) {} score {} at {}% >= {}%{}",
            t.component,
            t.index + 1,
            exposure,
            t.score,
            t.percentage,
            t.min_percentage,
            marker
        );
        println!();
    }

    println!("  Reasoning:");
    for step in &result.steps {
        println!("    - {}", step.message);
    }
    println!();
}
