use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraceStepType {
    Gate,
    Toxicity,
    ComponentTrigger,
    Bioaccumulation,
    Persistence,
    Combination,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceStep {
    pub step_type: TraceStepType,
    pub message: String,
}

impl TraceStep {
    pub fn new(step_type: TraceStepType, message: impl Into<String>) -> Self {
        Self {
            step_type,
            message: message.into(),
        }
    }
}
