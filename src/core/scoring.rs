use crate::models::{
    Availability, BonusReason, CandidateProfile, CommunicationStyle, Factor, MatchResult,
    RequesterProfile, ScoreBreakdown, Timeline,
};

/// Rating at or above which the top-rated bonus applies
pub const TOP_RATED_THRESHOLD: f32 = 4.5;

/// Recent activity count above which the high-activity bonus applies
pub const HIGH_ACTIVITY_THRESHOLD: u32 = 20;

/// Score one candidate against a requester
///
/// Scoring formula:
/// total = clamp(
///     location (25) + price_compatibility (20) + timeline (15)
///   + communication (10) + experience (10) + specialization (10)
///   + personality (5) + tech_savvy (5)
///   + bonuses, 0, 100)
///
/// Bonuses are reported in `bonuses` but never in the breakdown, so anything
/// that explains a match must read the breakdown rather than the total.
pub fn calculate_match_score(
    requester: &RequesterProfile,
    candidate: &CandidateProfile,
) -> MatchResult {
    let mut breakdown = ScoreBreakdown::default();

    breakdown.push(Factor::Location, location_points(requester, candidate));
    breakdown.push(
        Factor::PriceCompatibility,
        price_points(requester.home_value, candidate.value_anchor()),
    );
    breakdown.push(
        Factor::Timeline,
        timeline_points(requester.timeline, candidate.availability),
    );
    breakdown.push(
        Factor::Communication,
        communication_points(requester.communication_style, candidate.communication_style),
    );
    breakdown.push(
        Factor::Experience,
        experience_points(requester.first_time, candidate.years_experience),
    );
    breakdown.push(
        Factor::Specialization,
        specialization_points(&requester.property_type, candidate),
    );
    breakdown.push(
        Factor::Personality,
        if requester.personality == candidate.personality { 5 } else { 3 },
    );
    breakdown.push(
        Factor::TechSavvy,
        tech_points(requester.prefers_digital, candidate.tech_score),
    );

    let bonuses = bonus_reasons(candidate);
    let bonus_total: u32 = bonuses.iter().map(|b| b.points() as u32).sum();
    let score = (breakdown.sum() + bonus_total).min(100) as u8;

    MatchResult {
        candidate: candidate.clone(),
        score,
        breakdown,
        bonuses,
    }
}

/// Blank fields never match, not even another blank
#[inline]
fn same_field(ours: &str, theirs: &str) -> bool {
    let ours = ours.trim();
    !ours.is_empty() && ours == theirs.trim()
}

#[inline]
fn location_points(requester: &RequesterProfile, candidate: &CandidateProfile) -> u8 {
    let (ours, theirs) = (&requester.location, &candidate.location);
    if same_field(&ours.zip, &theirs.zip) {
        25
    } else if same_field(&ours.city, &theirs.city) {
        20
    } else if same_field(&ours.state, &theirs.state) {
        10
    } else {
        0
    }
}

/// Relative price gap; a non-positive requester anchor is the worst case
#[inline]
pub(crate) fn price_ratio(requester_value: f64, candidate_value: f64) -> f64 {
    if requester_value <= 0.0 {
        return 1.0;
    }
    (requester_value - candidate_value).abs() / requester_value
}

#[inline]
fn price_points(requester_value: f64, candidate_value: f64) -> u8 {
    let ratio = price_ratio(requester_value, candidate_value);
    if ratio < 0.10 {
        20
    } else if ratio < 0.25 {
        15
    } else if ratio < 0.50 {
        10
    } else {
        5
    }
}

/// An ASAP requester paired with a non-immediate agent falls through to 8, not 12
#[inline]
fn timeline_points(timeline: Timeline, availability: Availability) -> u8 {
    if timeline == Timeline::Asap && availability == Availability::Immediate {
        15
    } else if matches!(
        timeline,
        Timeline::OneToThreeMonths | Timeline::ThreeToSixMonths
    ) {
        12
    } else {
        8
    }
}

#[inline]
fn communication_points(requester: CommunicationStyle, candidate: CommunicationStyle) -> u8 {
    if requester == candidate {
        10
    } else if requester == CommunicationStyle::Frequent
        && matches!(
            candidate,
            CommunicationStyle::Frequent | CommunicationStyle::Balanced
        )
    {
        8
    } else {
        5
    }
}

#[inline]
fn experience_points(first_time: bool, years: u32) -> u8 {
    if !first_time {
        return 8;
    }
    if years > 7 {
        10
    } else if years > 3 {
        7
    } else {
        4
    }
}

#[inline]
fn specialization_points(property_type: &str, candidate: &CandidateProfile) -> u8 {
    if candidate.specializes_in(property_type) {
        10
    } else if candidate.is_generalist() {
        7
    } else {
        4
    }
}

#[inline]
fn tech_points(prefers_digital: bool, tech_score: u8) -> u8 {
    if !prefers_digital {
        return 3;
    }
    if tech_score > 70 {
        5
    } else if tech_score > 50 {
        3
    } else {
        1
    }
}

fn bonus_reasons(candidate: &CandidateProfile) -> Vec<BonusReason> {
    let mut bonuses = Vec::new();
    if candidate.rating.is_some_and(|r| r >= TOP_RATED_THRESHOLD) {
        bonuses.push(BonusReason::TopRated);
    }
    if candidate.recent_activity_count > HIGH_ACTIVITY_THRESHOLD {
        bonuses.push(BonusReason::HighActivity);
    }
    bonuses
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Location, Personality, ALL_TYPES_TAG};
    use uuid::Uuid;

    fn create_test_requester() -> RequesterProfile {
        RequesterProfile {
            location: Location::new("94105", "San Francisco", "CA"),
            home_value: 500_000.0,
            timeline: Timeline::Asap,
            communication_style: CommunicationStyle::Frequent,
            personality: Personality::Professional,
            property_type: "Single Family".to_string(),
            first_time: true,
            prefers_digital: true,
        }
    }

    fn create_test_candidate() -> CandidateProfile {
        CandidateProfile {
            id: Uuid::nil(),
            name: "Test Agent".to_string(),
            organization: "Compass".to_string(),
            phone: None,
            email: None,
            location: Location::new("94105", "San Francisco", "CA"),
            years_experience: 9,
            recent_activity_count: 10,
            avg_value: Some(520_000.0),
            rating: Some(4.0),
            review_count: 12,
            specializations: vec!["Single Family".to_string()],
            tech_score: 80,
            personality: Personality::Professional,
            communication_style: CommunicationStyle::Frequent,
            availability: Availability::Immediate,
        }
    }

    #[test]
    fn test_perfect_match() {
        let result = calculate_match_score(&create_test_requester(), &create_test_candidate());

        assert_eq!(result.breakdown.sum(), 100);
        assert_eq!(result.score, 100);
        assert!(result.bonuses.is_empty());
        for factor in Factor::ALL {
            assert_eq!(result.breakdown.get(factor), Some(factor.max_points()));
        }
    }

    #[test]
    fn test_location_fallthrough() {
        let requester = create_test_requester();
        let mut candidate = create_test_candidate();

        candidate.location = Location::new("94110", "San Francisco", "CA");
        assert_eq!(location_points(&requester, &candidate), 20);

        candidate.location = Location::new("94301", "Palo Alto", "CA");
        assert_eq!(location_points(&requester, &candidate), 10);

        candidate.location = Location::new("10001", "New York", "NY");
        assert_eq!(location_points(&requester, &candidate), 0);
    }

    #[test]
    fn test_blank_location_fields_do_not_match() {
        let mut requester = create_test_requester();
        let mut candidate = create_test_candidate();

        requester.location = Location::new("", "", "");
        candidate.location = Location::new("", "", "");
        assert_eq!(location_points(&requester, &candidate), 0);

        requester.location = Location::new("", "Springfield", "IL");
        candidate.location = Location::new("", "Springfield", "");
        assert_eq!(location_points(&requester, &candidate), 20);

        requester.location = Location::new("62701", "", "IL");
        candidate.location = Location::new("62704", "", "IL");
        assert_eq!(location_points(&requester, &candidate), 10);
    }

    #[test]
    fn test_price_buckets() {
        assert_eq!(price_points(500_000.0, 520_000.0), 20);
        assert_eq!(price_points(500_000.0, 600_000.0), 15);
        assert_eq!(price_points(500_000.0, 700_000.0), 10);
        assert_eq!(price_points(500_000.0, 900_000.0), 5);
    }

    #[test]
    fn test_price_zero_anchor_is_worst_case() {
        assert_eq!(price_points(0.0, 520_000.0), 5);
        assert_eq!(price_points(-1.0, 0.0), 5);
        // Absent candidate anchor reads as zero: ratio 1.0
        assert_eq!(price_points(500_000.0, 0.0), 5);
    }

    #[test]
    fn test_timeline_asap_falls_through_to_eight() {
        assert_eq!(timeline_points(Timeline::Asap, Availability::Immediate), 15);
        assert_eq!(timeline_points(Timeline::Asap, Availability::OneWeek), 8);
        assert_eq!(timeline_points(Timeline::OneToThreeMonths, Availability::OneWeek), 12);
        assert_eq!(timeline_points(Timeline::ThreeToSixMonths, Availability::Immediate), 12);
        assert_eq!(timeline_points(Timeline::Exploring, Availability::Immediate), 8);
    }

    #[test]
    fn test_communication_points() {
        use CommunicationStyle::*;
        assert_eq!(communication_points(Minimal, Minimal), 10);
        assert_eq!(communication_points(Frequent, Balanced), 8);
        assert_eq!(communication_points(Frequent, Minimal), 5);
        assert_eq!(communication_points(Balanced, Frequent), 5);
    }

    #[test]
    fn test_experience_ignores_years_for_repeat_sellers() {
        assert_eq!(experience_points(true, 8), 10);
        assert_eq!(experience_points(true, 7), 7);
        assert_eq!(experience_points(true, 3), 4);
        assert_eq!(experience_points(false, 1), 8);
        assert_eq!(experience_points(false, 20), 8);
    }

    #[test]
    fn test_specialization_catch_all() {
        let mut candidate = create_test_candidate();
        candidate.specializations = vec![ALL_TYPES_TAG.to_string()];
        assert_eq!(specialization_points("Condo", &candidate), 7);

        candidate.specializations = vec!["Luxury".to_string()];
        assert_eq!(specialization_points("Condo", &candidate), 4);
    }

    #[test]
    fn test_tech_points() {
        assert_eq!(tech_points(true, 71), 5);
        assert_eq!(tech_points(true, 70), 3);
        assert_eq!(tech_points(true, 50), 1);
        assert_eq!(tech_points(false, 99), 3);
    }

    #[test]
    fn test_bonuses_not_in_breakdown() {
        let requester = create_test_requester();
        let mut candidate = create_test_candidate();
        candidate.location = Location::new("10001", "New York", "NY");
        candidate.rating = Some(4.8);
        candidate.recent_activity_count = 25;

        let result = calculate_match_score(&requester, &candidate);

        assert_eq!(result.breakdown.sum(), 75);
        assert_eq!(result.score, 83);
        assert_eq!(
            result.bonuses,
            vec![BonusReason::TopRated, BonusReason::HighActivity]
        );
    }

    #[test]
    fn test_total_clamped_to_100() {
        let mut candidate = create_test_candidate();
        candidate.rating = Some(5.0);
        candidate.recent_activity_count = 40;

        let result = calculate_match_score(&create_test_requester(), &candidate);
        assert_eq!(result.breakdown.sum(), 100);
        assert_eq!(result.score, 100);
        assert_eq!(result.bonuses.len(), 2);
    }
}
