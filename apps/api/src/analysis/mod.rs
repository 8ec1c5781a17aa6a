// Resume analysis pipeline.
// Implements: text normalization, resume classification, experience
// estimation, the five rule checks, and the scoring engine behind the
// predict endpoint.

pub mod checks;
pub mod classifier;
pub mod engine;
pub mod experience;
pub mod handlers;
pub mod normalize;
pub mod report;
