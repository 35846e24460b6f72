//! Brydje Match - seller/agent compatibility scoring and review triage
//!
//! This library ranks candidate agents against a seller's profile with a
//! weighted multi-factor score, estimates agents' tech adoption, generates
//! seeded synthetic candidate pools, and drives the one-at-a-time review
//! queue that turns a ranking into accepted, rejected and undecided buckets.
//! Everything here is synchronous and free of I/O.

pub mod config;
pub mod core;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use crate::core::{
    generate_candidates, rank, score, Decision, DecisionOutcome, Matcher, ReviewQueue,
    SyntheticGenerator, TechEstimator, TechSignals,
};
pub use error::BrydjeError;
pub use models::{CandidateProfile, MatchResult, RankRequest, RequesterProfile, ScoreBreakdown};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CandidateSource;

    #[test]
    fn test_library_exports() {
        let candidates = SyntheticGenerator::from_seed(1).candidates("94105", 3);
        let mut queue = ReviewQueue::new(candidates);
        assert_eq!(queue.decide(Decision::Accept), DecisionOutcome::Accepted);
    }
}
