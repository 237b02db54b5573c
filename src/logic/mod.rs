pub mod composer;
pub mod diagnostics;
pub mod engine;
pub mod thresholds;

pub use composer::compose;
pub use diagnostics::diagnose;
pub use engine::DecisionEngine;
pub use thresholds::{ThresholdRule, ThresholdTable};
