use kyh_core::error::KyhError;
use kyh_core::scoring::AssessmentResult;

pub fn print(result: &AssessmentResult) -> Result<(), KyhError> {
    let json = serde_json::to_string_pretty(result)?;
    println!("{json}");
    Ok(())
}
