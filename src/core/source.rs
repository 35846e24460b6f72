use crate::models::CandidateProfile;

/// Anything that can supply candidate profiles for a location
///
/// The synthetic generator and real data sources sit behind this same
/// interface so callers can swap one for the other.
pub trait CandidateSource {
    fn candidates(&mut self, location_key: &str, count: usize) -> Vec<CandidateProfile>;
}

/// Fixed, caller-supplied pool of candidates
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    pool: Vec<CandidateProfile>,
}

impl StaticSource {
    pub fn new(pool: Vec<CandidateProfile>) -> Self {
        Self { pool }
    }
}

impl CandidateSource for StaticSource {
    /// Candidates whose ZIP or city equals the key (any candidate for an empty key)
    fn candidates(&mut self, location_key: &str, count: usize) -> Vec<CandidateProfile> {
        let key = location_key.trim();
        self.pool
            .iter()
            .filter(|c| {
                key.is_empty()
                    || c.location.zip == key
                    || c.location.city.eq_ignore_ascii_case(key)
            })
            .take(count)
            .cloned()
            .collect()
    }
}
