use crate::models::{BonusReason, CandidateProfile, Factor, MatchResult};

/// Check if a candidate clears a minimum tech score
#[inline]
pub fn meets_min_tech_score(candidate: &CandidateProfile, min_tech_score: u8) -> bool {
    candidate.tech_score >= min_tech_score
}

/// Keep only candidates at or above a minimum tech score, preserving order
pub fn filter_by_min_tech(
    candidates: Vec<CandidateProfile>,
    min_tech_score: u8,
) -> Vec<CandidateProfile> {
    candidates
        .into_iter()
        .filter(|c| meets_min_tech_score(c, min_tech_score))
        .collect()
}

/// Human-readable reasons a candidate matched
///
/// Thresholds are read from the breakdown, never from the total: bonus
/// points are invisible there and must not turn a partial factor into a
/// reason. Bonuses are listed after the factor reasons.
pub fn match_reasons(result: &MatchResult) -> Vec<String> {
    let mut reasons = Vec::new();
    let points = |factor| result.breakdown.get(factor).unwrap_or(0);

    match points(Factor::Location) {
        25 => reasons.push("Works in your ZIP code".to_string()),
        20 => reasons.push("Works in your city".to_string()),
        _ => {}
    }

    if points(Factor::PriceCompatibility) >= 15 {
        reasons.push("Sells homes in your price range".to_string());
    }

    if points(Factor::Timeline) == 15 {
        reasons.push("Available immediately for your ASAP timeline".to_string());
    }

    if points(Factor::Communication) == 10 {
        reasons.push("Shares your communication style".to_string());
    }

    if points(Factor::Experience) == 10 {
        reasons.push(format!(
            "{} years of experience guiding first-time sellers",
            result.candidate.years_experience
        ));
    }

    if points(Factor::Specialization) == 10 {
        reasons.push("Specializes in your property type".to_string());
    }

    if points(Factor::TechSavvy) == 5 {
        reasons.push("Strong digital tools and communication".to_string());
    }

    for bonus in &result.bonuses {
        reasons.push(match bonus {
            BonusReason::TopRated => "Top-rated by past clients".to_string(),
            BonusReason::HighActivity => "Closed many deals recently".to_string(),
        });
    }

    reasons
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        Availability, CommunicationStyle, Location, Personality, ScoreBreakdown,
    };
    use uuid::Uuid;

    fn create_test_candidate(tech_score: u8) -> CandidateProfile {
        CandidateProfile {
            id: Uuid::from_u128(tech_score as u128),
            name: "Test Agent".to_string(),
            organization: "Compass".to_string(),
            phone: None,
            email: None,
            location: Location::new("94105", "San Francisco", "CA"),
            years_experience: 12,
            recent_activity_count: 5,
            avg_value: Some(500_000.0),
            rating: None,
            review_count: 0,
            specializations: vec![],
            tech_score,
            personality: Personality::Analytical,
            communication_style: CommunicationStyle::Minimal,
            availability: Availability::TwoWeeks,
        }
    }

    fn result_with(points: &[(Factor, u8)], bonuses: Vec<BonusReason>) -> MatchResult {
        let mut breakdown = ScoreBreakdown::default();
        for (factor, p) in points {
            breakdown.push(*factor, *p);
        }
        MatchResult {
            candidate: create_test_candidate(60),
            score: 0,
            breakdown,
            bonuses,
        }
    }

    #[test]
    fn test_filter_by_min_tech() {
        let candidates = vec![
            create_test_candidate(40),
            create_test_candidate(75),
            create_test_candidate(50),
        ];

        let filtered = filter_by_min_tech(candidates, 50);

        let scores: Vec<u8> = filtered.iter().map(|c| c.tech_score).collect();
        assert_eq!(scores, vec![75, 50]);
    }

    #[test]
    fn test_reasons_from_breakdown() {
        let result = result_with(
            &[
                (Factor::Location, 25),
                (Factor::PriceCompatibility, 15),
                (Factor::Timeline, 8),
                (Factor::Experience, 10),
            ],
            vec![],
        );

        let reasons = match_reasons(&result);

        assert_eq!(
            reasons,
            vec![
                "Works in your ZIP code",
                "Sells homes in your price range",
                "12 years of experience guiding first-time sellers",
            ]
        );
    }

    #[test]
    fn test_total_does_not_drive_reasons() {
        let mut result = result_with(&[(Factor::Location, 10)], vec![BonusReason::TopRated]);
        result.score = 100;

        let reasons = match_reasons(&result);

        assert_eq!(reasons, vec!["Top-rated by past clients"]);
    }
}
