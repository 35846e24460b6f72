// Core algorithm exports
pub mod filters;
pub mod generator;
pub mod matcher;
pub mod pricing;
pub mod queue;
pub mod scoring;
pub mod source;
pub mod tech;

pub use filters::{filter_by_min_tech, match_reasons, meets_min_tech_score};
pub use generator::{generate_candidates, generate_leads, SyntheticGenerator};
pub use matcher::{rank, score, MatchOptions, Matcher, RankedPool};
pub use pricing::{price_bands, suggest_price_bands, PriceBands, SellingWindow};
pub use queue::{
    Accepted, Decision, DecisionOutcome, QueueSnapshot, ReviewOutcome, ReviewQueue,
    DEFAULT_MAX_DEFERS,
};
pub use scoring::calculate_match_score;
pub use source::{CandidateSource, StaticSource};
pub use tech::{estimate_tech_score, FullSignals, PartialSignals, TechEstimator, TechSignals};
