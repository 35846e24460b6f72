use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::BrydjeError;
use crate::models::domain::{CandidateProfile, RequesterProfile};

/// Ranking input handed over by a presentation or import layer
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankRequest {
    #[validate(nested)]
    pub requester: RequesterProfile,
    #[validate(nested)]
    #[serde(default)]
    pub candidates: Vec<CandidateProfile>,
    #[serde(default)]
    pub limit: Option<usize>,
}

impl RankRequest {
    /// Parse and validate a request from JSON
    pub fn from_json(json: &str) -> Result<Self, BrydjeError> {
        let request: RankRequest = serde_json::from_str(json)?;
        request.validate()?;
        Ok(request)
    }
}
