//! Seller-side pricing and timeline helpers.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Multiplier applied to the optimal price for a fast sale
pub const QUICK_SALE_FACTOR: f64 = 0.95;

/// Multiplier applied to the optimal price for a patient, premium listing
pub const PREMIUM_FACTOR: f64 = 1.05;

/// Share of a staging budget actually spent
pub const STAGING_SPEND_RATE: f64 = 0.8;

/// Listing price bands around an optimal price
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBands {
    pub current: f64,
    pub optimal: f64,
    pub quick_sale: f64,
    pub premium: f64,
}

impl PriceBands {
    pub fn around(current: f64, optimal: f64) -> Self {
        Self {
            current,
            optimal,
            quick_sale: optimal * QUICK_SALE_FACTOR,
            premium: optimal * PREMIUM_FACTOR,
        }
    }

    /// Percent change from the current price to the optimal one
    pub fn change_pct(&self) -> f64 {
        if self.current <= 0.0 {
            return 0.0;
        }
        (self.optimal / self.current - 1.0) * 100.0
    }
}

/// Bands centred on the current price
pub fn price_bands(current: f64) -> PriceBands {
    PriceBands::around(current, current)
}

/// Bands around an optimal price drawn within ±5% of the current one
pub fn suggest_price_bands<R: Rng + ?Sized>(rng: &mut R, current: f64) -> PriceBands {
    let optimal = current * rng.gen_range(QUICK_SALE_FACTOR..=PREMIUM_FACTOR);
    PriceBands::around(current, optimal)
}

/// How soon the seller wants to close
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SellingWindow {
    #[serde(rename = "7 days")]
    SevenDays,
    #[serde(rename = "14 days")]
    FourteenDays,
    #[serde(rename = "30 days")]
    ThirtyDays,
    #[serde(rename = "60 days")]
    SixtyDays,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlanStep {
    pub when: &'static str,
    pub action: &'static str,
}

const SPRINT_PLAN: &[PlanStep] = &[
    PlanStep { when: "Day 1", action: "Professional photos" },
    PlanStep { when: "Day 2", action: "List on MLS" },
    PlanStep { when: "Day 3-4", action: "Social media blast" },
    PlanStep { when: "Day 5-6", action: "Open houses" },
    PlanStep { when: "Day 7", action: "Review offers" },
];

const STANDARD_PLAN: &[PlanStep] = &[
    PlanStep { when: "Week 1", action: "Preparation and staging" },
    PlanStep { when: "Week 2", action: "Marketing launch" },
    PlanStep { when: "Week 3+", action: "Showings and offers" },
];

impl SellingWindow {
    pub fn days(self) -> u32 {
        match self {
            SellingWindow::SevenDays => 7,
            SellingWindow::FourteenDays => 14,
            SellingWindow::ThirtyDays => 30,
            SellingWindow::SixtyDays => 60,
        }
    }

    /// Only the one-week window gets a day-by-day sprint
    pub fn action_plan(self) -> &'static [PlanStep] {
        match self {
            SellingWindow::SevenDays => SPRINT_PLAN,
            _ => STANDARD_PLAN,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StagingPlan {
    pub room: String,
    pub steps: &'static [&'static str],
    pub total_cost: f64,
}

pub fn staging_plan(room: &str, budget: f64) -> StagingPlan {
    StagingPlan {
        room: room.to_string(),
        steps: &["Remove clutter", "Add fresh flowers", "Update lighting"],
        total_cost: budget * STAGING_SPEND_RATE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_price_bands_centred_on_current() {
        let bands = price_bands(750_000.0);

        assert_close(bands.optimal, 750_000.0);
        assert_close(bands.quick_sale, 712_500.0);
        assert_close(bands.premium, 787_500.0);
        assert_close(bands.change_pct(), 0.0);
    }

    #[test]
    fn test_bands_follow_optimal_not_current() {
        let bands = PriceBands::around(500_000.0, 510_000.0);

        assert_close(bands.quick_sale, 484_500.0);
        assert_close(bands.premium, 535_500.0);
        assert_close(bands.change_pct(), 2.0);
    }

    #[test]
    fn test_suggested_optimal_within_five_percent() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..100 {
            let bands = suggest_price_bands(&mut rng, 1_000_000.0);
            assert!(bands.optimal >= 950_000.0 && bands.optimal <= 1_050_000.0);
            assert!(bands.quick_sale < bands.optimal && bands.optimal < bands.premium);
        }
    }

    #[test]
    fn test_suggestion_is_seed_deterministic() {
        let a = suggest_price_bands(&mut ChaCha8Rng::seed_from_u64(3), 600_000.0);
        let b = suggest_price_bands(&mut ChaCha8Rng::seed_from_u64(3), 600_000.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_current_has_no_change() {
        assert_close(price_bands(0.0).change_pct(), 0.0);
    }

    #[test]
    fn test_action_plans() {
        let sprint = SellingWindow::SevenDays.action_plan();
        assert_eq!(sprint.len(), 5);
        assert_eq!(sprint[0].when, "Day 1");
        assert_eq!(sprint[4].action, "Review offers");

        for window in [
            SellingWindow::FourteenDays,
            SellingWindow::ThirtyDays,
            SellingWindow::SixtyDays,
        ] {
            assert_eq!(window.action_plan().len(), 3);
            assert_eq!(window.action_plan()[0].when, "Week 1");
        }
        assert_eq!(SellingWindow::ThirtyDays.days(), 30);
    }

    #[test]
    fn test_selling_window_labels() {
        let window: SellingWindow = serde_json::from_str("\"14 days\"").unwrap();
        assert_eq!(window, SellingWindow::FourteenDays);
    }

    #[test]
    fn test_staging_spends_eighty_percent() {
        let plan = staging_plan("Kitchen", 1_500.0);
        assert_eq!(plan.room, "Kitchen");
        assert_eq!(plan.steps.len(), 3);
        assert_close(plan.total_cost, 1_200.0);
    }
}
