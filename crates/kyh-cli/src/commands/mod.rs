pub mod assess;
pub mod policy;
