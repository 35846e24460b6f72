use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Catch-all specialization tag carried by generalist agents
pub const ALL_TYPES_TAG: &str = "All Types";

/// Postal location of a property or an agent's market
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    #[serde(rename = "zipCode")]
    pub zip: String,
    pub city: String,
    pub state: String,
}

impl Location {
    pub fn new(zip: impl Into<String>, city: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            zip: zip.into(),
            city: city.into(),
            state: state.into(),
        }
    }
}

/// How soon the requester wants to sell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Timeline {
    #[serde(rename = "ASAP")]
    Asap,
    #[serde(rename = "1-3mo")]
    OneToThreeMonths,
    #[serde(rename = "3-6mo")]
    ThreeToSixMonths,
    #[serde(rename = "6-12mo")]
    SixToTwelveMonths,
    #[serde(rename = "exploring")]
    Exploring,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommunicationStyle {
    Frequent,
    Balanced,
    Minimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Personality {
    Professional,
    Friendly,
    Analytical,
}

/// When an agent can start working with a new client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Availability {
    #[serde(rename = "immediate")]
    Immediate,
    #[serde(rename = "1 week")]
    OneWeek,
    #[serde(rename = "2 weeks")]
    TwoWeeks,
    #[serde(rename = "1 month+")]
    OneMonthPlus,
}

/// The seller looking for an agent
///
/// Only ever borrowed by the scoring engine, so a profile cannot change
/// between scoring one candidate and the next.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RequesterProfile {
    pub location: Location,
    /// Estimated home value, the price anchor for the compatibility factor
    #[serde(rename = "homeValue")]
    pub home_value: f64,
    pub timeline: Timeline,
    #[serde(rename = "communicationStyle")]
    pub communication_style: CommunicationStyle,
    pub personality: Personality,
    #[validate(length(min = 1))]
    #[serde(rename = "propertyType")]
    pub property_type: String,
    #[serde(rename = "firstTime", default)]
    pub first_time: bool,
    #[serde(rename = "prefersDigital", default)]
    pub prefers_digital: bool,
}

/// An agent that can be scored against a requester
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct CandidateProfile {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub organization: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    pub location: Location,
    #[serde(rename = "yearsExperience", default)]
    pub years_experience: u32,
    #[serde(rename = "recentActivityCount", default)]
    pub recent_activity_count: u32,
    /// Average sale price; zero or absent is tolerated and scores as the worst price bucket
    #[validate(range(min = 0.0))]
    #[serde(rename = "avgValue", default)]
    pub avg_value: Option<f64>,
    #[validate(range(min = 0.0, max = 5.0))]
    #[serde(default)]
    pub rating: Option<f32>,
    #[serde(rename = "reviewCount", default)]
    pub review_count: u32,
    #[serde(default)]
    pub specializations: Vec<String>,
    #[validate(range(max = 100))]
    #[serde(rename = "techScore", default)]
    pub tech_score: u8,
    pub personality: Personality,
    #[serde(rename = "communicationStyle")]
    pub communication_style: CommunicationStyle,
    pub availability: Availability,
}

impl CandidateProfile {
    /// Value anchor with the absent case read as zero
    pub fn value_anchor(&self) -> f64 {
        self.avg_value.unwrap_or(0.0)
    }

    pub fn specializes_in(&self, property_type: &str) -> bool {
        self.specializations.iter().any(|s| s == property_type)
    }

    pub fn is_generalist(&self) -> bool {
        self.specializes_in(ALL_TYPES_TAG)
    }
}

/// A seller lead presented to an agent for triage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellerLead {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "propertyValue")]
    pub property_value: u64,
    pub timeline: Timeline,
    pub commission: f64,
}
