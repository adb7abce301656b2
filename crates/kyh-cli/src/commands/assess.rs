use kyh_core::error::KyhError;
use kyh_core::model::AssessmentInput;
use kyh_core::policy::builtin;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::output;

pub fn run(
    input_file: PathBuf,
    preset: Option<String>,
    policy_file: Option<PathBuf>,
    output_format: &str,
    verbose: bool,
) -> Result<(), KyhError> {
    // A custom policy file wins over any preset
    let policy = match (&policy_file, &preset) {
        (Some(path), _) => kyh_core::policy::load_policy(path)?,
        (None, Some(name)) => builtin::load_preset(name)?,
        (None, None) => builtin::load_preset(builtin::DEFAULT_PRESET)?,
    };
    debug!(policy = %policy.name, "policy selected");

    let input = read_input(&input_file)?;
    let result = kyh_core::assess_with_policy(&input, &policy);

    match output_format {
        "json" => output::json::print(&result)?,
        _ => output::table::print(&result, verbose),
    }

    Ok(())
}

fn read_input(path: &Path) -> Result<AssessmentInput, KyhError> {
    if path.as_os_str() != "-" {
        return kyh_core::load_input(path);
    }

    let mut buf = String::new();
    std::io::stdin().read_to_string(&mut buf)?;
    kyh_core::parse_input_str(&buf)
}
