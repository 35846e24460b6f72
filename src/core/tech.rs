//! Tech-adoption estimation.
//!
//! Two independent strategies produce the same 0-100 output field. Which one
//! runs is decided by the signal set a caller has, never by blending:
//!
//! - [`PartialSignals`] for agents sourced from incomplete external data
//! - [`FullSignals`] for fully specified agent records

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Where a candidate record came from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataSource {
    #[default]
    Manual,
    ListingSite,
    Directory,
    Referral,
}

/// Signals available from an incomplete external record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialSignals {
    pub rating: Option<f32>,
    #[serde(default)]
    pub review_count: u32,
    pub phone: Option<String>,
    pub organization: Option<String>,
    /// Any recent listing or sale was observed
    #[serde(default)]
    pub recent_activity: bool,
    #[serde(default)]
    pub source: DataSource,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Instagram,
    Facebook,
    LinkedIn,
    TikTok,
    YouTube,
    Twitter,
}

/// Tech-oriented tools that count towards the full-signal score
pub const TECH_TOOLS: &[&str] = &[
    "crm",
    "e-signature",
    "virtual tours",
    "3d staging",
    "drone photography",
    "video marketing",
    "social ads",
    "transaction management",
];

/// Signals available from a fully specified record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FullSignals {
    pub age: Option<u8>,
    #[serde(default)]
    pub channels: Vec<Channel>,
    #[serde(default)]
    pub tools: Vec<String>,
    #[serde(default)]
    pub has_personal_site: bool,
    pub response_time_hours: Option<f64>,
    #[serde(default)]
    pub review_count: u32,
}

/// Input to [`TechEstimator::estimate`]; the variant selects the strategy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum TechSignals {
    Partial(PartialSignals),
    Full(FullSignals),
}

/// Organizations whose membership counts as a partial-signal boost by default
pub const DEFAULT_MAJOR_ORGANIZATIONS: &[&str] = &[
    "RE/MAX",
    "Keller Williams",
    "Compass",
    "Century 21",
    "Coldwell Banker",
    "eXp Realty",
    "Redfin",
    "Sotheby's International Realty",
];

#[derive(Debug, Clone)]
pub struct TechEstimator {
    major_organizations: Vec<String>,
}

impl Default for TechEstimator {
    fn default() -> Self {
        Self::new(DEFAULT_MAJOR_ORGANIZATIONS.iter().map(|s| s.to_string()))
    }
}

impl TechEstimator {
    pub fn new<I, S>(major_organizations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            major_organizations: major_organizations.into_iter().map(Into::into).collect(),
        }
    }

    pub fn estimate(&self, signals: &TechSignals) -> u8 {
        match signals {
            TechSignals::Partial(partial) => self.estimate_partial(partial),
            TechSignals::Full(full) => estimate_full(full),
        }
    }

    fn is_major_organization(&self, organization: &str) -> bool {
        self.major_organizations
            .iter()
            .any(|o| o.eq_ignore_ascii_case(organization.trim()))
    }

    /// Base 50 plus fixed increments per available signal
    pub fn estimate_partial(&self, signals: &PartialSignals) -> u8 {
        let mut score: i32 = 50;

        if signals.rating.is_some() {
            score += 10;
        }
        if signals.review_count > 10 {
            score += 10;
        }
        if signals.phone.as_deref().is_some_and(|p| !p.trim().is_empty()) {
            score += 5;
        }
        if signals
            .organization
            .as_deref()
            .is_some_and(|o| self.is_major_organization(o))
        {
            score += 10;
        }
        if signals.recent_activity {
            score += 10;
        }
        if signals.source != DataSource::Manual {
            score += 5;
        }

        clamp_score(score)
    }
}

/// Age bracket base, channel and tool counts, site, latency tier and reviews
pub fn estimate_full(signals: &FullSignals) -> u8 {
    let channels: HashSet<Channel> = signals.channels.iter().copied().collect();
    let tools: HashSet<String> = signals
        .tools
        .iter()
        .map(|t| t.trim().to_lowercase())
        .filter(|t| TECH_TOOLS.contains(&t.as_str()))
        .collect();

    let mut score = age_base(signals.age) as i32;
    score += 6 * channels.len() as i32;
    score += 4 * tools.len() as i32;
    if signals.has_personal_site {
        score += 10;
    }
    score += latency_points(signals.response_time_hours) as i32;
    if signals.review_count > 20 {
        score += 5;
    }

    clamp_score(score)
}

/// Absent age reads as the middle bracket
#[inline]
fn age_base(age: Option<u8>) -> u8 {
    match age {
        None => 12,
        Some(a) if a < 30 => 25,
        Some(a) if a < 40 => 18,
        Some(a) if a < 50 => 12,
        Some(a) if a < 60 => 6,
        Some(_) => 0,
    }
}

#[inline]
fn latency_points(hours: Option<f64>) -> u8 {
    match hours {
        Some(h) if h <= 1.0 => 10,
        Some(h) if h <= 3.0 => 7,
        Some(h) if h <= 6.0 => 4,
        _ => 0,
    }
}

#[inline]
fn clamp_score(score: i32) -> u8 {
    score.clamp(0, 100) as u8
}

/// Estimate a tech-adoption score with the default major-organization list
pub fn estimate_tech_score(signals: &TechSignals) -> u8 {
    TechEstimator::default().estimate(signals)
}
