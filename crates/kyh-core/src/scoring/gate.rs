pub const SKIP_MESSAGE: &str = "All components are pre-approved or exempt. Assessment skipped.";

const NOT_LISTED: &str = "not listed";

/// Outcome of the regulatory exemption check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Proceed,
    Skip,
}

/// Decide whether the two regulatory listing statements allow scoring.
///
/// Scoring proceeds only when at least one statement is given and every
/// given statement says "not listed". Anything else is treated as an
/// exemption.
pub fn check(reg1: &str, reg2: &str) -> GateDecision {
    if reg1.is_empty() && reg2.is_empty() {
        return GateDecision::Skip;
    }

    let exempting = |reg: &str| !reg.is_empty() && !reg.to_lowercase().contains(NOT_LISTED);
    if exempting(reg1) || exempting(reg2) {
        GateDecision::Skip
    } else {
        GateDecision::Proceed
    }
}
