use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::domain::CandidateProfile;

/// A weighted scoring factor, listed in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Factor {
    Location,
    PriceCompatibility,
    Timeline,
    Communication,
    Experience,
    Specialization,
    Personality,
    TechSavvy,
}

impl Factor {
    pub const ALL: [Factor; 8] = [
        Factor::Location,
        Factor::PriceCompatibility,
        Factor::Timeline,
        Factor::Communication,
        Factor::Experience,
        Factor::Specialization,
        Factor::Personality,
        Factor::TechSavvy,
    ];

    /// Maximum points the factor can award; the maxima sum to exactly 100
    pub const fn max_points(self) -> u8 {
        match self {
            Factor::Location => 25,
            Factor::PriceCompatibility => 20,
            Factor::Timeline => 15,
            Factor::Communication => 10,
            Factor::Experience => 10,
            Factor::Specialization => 10,
            Factor::Personality => 5,
            Factor::TechSavvy => 5,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Factor::Location => "location",
            Factor::PriceCompatibility => "price_compatibility",
            Factor::Timeline => "timeline",
            Factor::Communication => "communication",
            Factor::Experience => "experience",
            Factor::Specialization => "specialization",
            Factor::Personality => "personality",
            Factor::TechSavvy => "tech_savvy",
        }
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorScore {
    pub factor: Factor,
    pub points: u8,
}

/// Per-factor points in evaluation order, excluding bonus adjustments
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    entries: Vec<FactorScore>,
}

impl ScoreBreakdown {
    pub(crate) fn push(&mut self, factor: Factor, points: u8) {
        debug_assert!(points <= factor.max_points());
        self.entries.push(FactorScore { factor, points });
    }

    /// Points awarded for a factor, `None` if it was never evaluated
    pub fn get(&self, factor: Factor) -> Option<u8> {
        self.entries
            .iter()
            .find(|e| e.factor == factor)
            .map(|e| e.points)
    }

    pub fn sum(&self) -> u32 {
        self.entries.iter().map(|e| e.points as u32).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FactorScore> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Post-hoc increments added to the total but never to the breakdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BonusReason {
    TopRated,
    HighActivity,
}

impl BonusReason {
    pub const fn points(self) -> u8 {
        match self {
            BonusReason::TopRated => 5,
            BonusReason::HighActivity => 3,
        }
    }
}

/// Scored candidate produced by the scoring engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub candidate: CandidateProfile,
    #[serde(rename = "matchScore")]
    pub score: u8,
    pub breakdown: ScoreBreakdown,
    pub bonuses: Vec<BonusReason>,
}
