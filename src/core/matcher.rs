use crate::core::{filters::meets_min_tech_score, scoring::calculate_match_score};
use crate::models::{CandidateProfile, MatchResult, RequesterProfile};

/// Pool-level options applied around ranking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchOptions {
    /// Drop candidates below this tech score before scoring
    pub min_tech_score: Option<u8>,
    /// Keep at most this many results after ranking
    pub limit: Option<usize>,
}

/// Result of the matching process
#[derive(Debug)]
pub struct RankedPool {
    pub matches: Vec<MatchResult>,
    pub total_candidates: usize,
}

/// Ranking orchestrator
///
/// # Pipeline Stages
/// 1. Tech-score pre-filter (optional)
/// 2. Scoring
/// 3. Stable descending sort by total score
/// 4. Truncation (optional)
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    options: MatchOptions,
}

impl Matcher {
    pub fn new(options: MatchOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> MatchOptions {
        self.options
    }

    /// Score a single candidate
    pub fn score(&self, requester: &RequesterProfile, candidate: &CandidateProfile) -> MatchResult {
        calculate_match_score(requester, candidate)
    }

    /// Score and sort every candidate, best first
    ///
    /// The sort is stable: candidates with equal totals keep their input
    /// order, and no secondary key is consulted.
    pub fn rank(
        &self,
        requester: &RequesterProfile,
        candidates: &[CandidateProfile],
    ) -> Vec<MatchResult> {
        let mut ranked: Vec<MatchResult> = candidates
            .iter()
            .map(|candidate| calculate_match_score(requester, candidate))
            .collect();

        ranked.sort_by(|a, b| b.score.cmp(&a.score));

        tracing::debug!(
            candidates = ranked.len(),
            top_score = ?ranked.first().map(|m| m.score),
            "Ranked candidate pool"
        );

        ranked
    }

    /// Run the full pipeline with this matcher's options
    pub fn find_matches(
        &self,
        requester: &RequesterProfile,
        candidates: Vec<CandidateProfile>,
    ) -> RankedPool {
        let total_candidates = candidates.len();

        let eligible: Vec<CandidateProfile> = match self.options.min_tech_score {
            Some(min) => candidates
                .into_iter()
                .filter(|c| meets_min_tech_score(c, min))
                .collect(),
            None => candidates,
        };

        let mut matches = self.rank(requester, &eligible);

        if let Some(limit) = self.options.limit {
            matches.truncate(limit);
        }

        tracing::info!(
            total_candidates,
            eligible = eligible.len(),
            returned = matches.len(),
            "Matching complete"
        );

        RankedPool {
            matches,
            total_candidates,
        }
    }
}

/// Score one candidate against a requester
pub fn score(requester: &RequesterProfile, candidate: &CandidateProfile) -> MatchResult {
    calculate_match_score(requester, candidate)
}

/// Rank candidates against a requester with default options
pub fn rank(requester: &RequesterProfile, candidates: &[CandidateProfile]) -> Vec<MatchResult> {
    Matcher::default().rank(requester, candidates)
}
