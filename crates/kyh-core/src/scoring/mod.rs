pub mod engine;
pub mod gate;
pub mod mappers;
pub mod outcome;

pub use engine::assess;
pub use outcome::{AssessmentResult, ComponentTrigger, Exposure, ScoreBreakdown};
