// Model exports
pub mod domain;
pub mod requests;
pub mod results;

pub use domain::{
    Availability, CandidateProfile, CommunicationStyle, Location, Personality, RequesterProfile,
    SellerLead, Timeline, ALL_TYPES_TAG,
};
pub use requests::RankRequest;
pub use results::{BonusReason, Factor, FactorScore, MatchResult, ScoreBreakdown};
