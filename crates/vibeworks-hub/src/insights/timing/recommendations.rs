use super::super::moon::MoonPhaseKind;
use super::super::numerology::{LifePathNumber, UniversalDayNumber};
use super::super::seed::user_seed;
use serde::Serialize;

const BASE_SCORE: i64 = 5;
const MAX_SCORE: i64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TimingCategory {
    #[serde(rename = "Deal Closing")]
    DealClosing,
    #[serde(rename = "New Ventures")]
    NewVentures,
    #[serde(rename = "Strategic Planning")]
    StrategicPlanning,
}

impl TimingCategory {
    pub const fn ordered() -> [Self; 3] {
        [Self::DealClosing, Self::NewVentures, Self::StrategicPlanning]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::DealClosing => "Deal Closing",
            Self::NewVentures => "New Ventures",
            Self::StrategicPlanning => "Strategic Planning",
        }
    }

    /// Cosmetic per-user nudge so colleagues see slightly different numbers on
    /// the same day. Each category reads a different slice of the seed.
    fn user_offset(self, seed: u64) -> i64 {
        let seed = seed as i128;
        let offset = match self {
            Self::DealClosing => seed % 3 - 1,
            Self::NewVentures => (seed * 2) % 3 - 1,
            Self::StrategicPlanning => (seed / 3) % 3,
        };
        offset as i64
    }

    fn recommendation(self, score: i64) -> &'static str {
        match self {
            Self::DealClosing if score >= 8 => "Highly favorable - Push for closes",
            Self::DealClosing if score >= 6 => "Favorable - Good day for negotiations",
            Self::DealClosing => "Mixed - Focus on relationship building",
            Self::NewVentures if score >= 8 => "Excellent timing for launches",
            Self::NewVentures if score >= 6 => "Good for planning new initiatives",
            Self::NewVentures => "Better to refine existing projects",
            Self::StrategicPlanning if score >= 7 => "Ideal for deep strategic work",
            Self::StrategicPlanning => "Good for tactical execution",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BusinessRecommendation {
    pub category: TimingCategory,
    pub score: u8,
    pub recommendation: &'static str,
    pub reasoning: String,
}

struct CategoryScore {
    category: TimingCategory,
    score: i64,
    reasoning: String,
}

impl CategoryScore {
    fn new(category: TimingCategory, seed: Option<u64>) -> Self {
        let offset = seed.map(|seed| category.user_offset(seed)).unwrap_or(0);
        Self {
            category,
            score: BASE_SCORE + offset,
            reasoning: String::new(),
        }
    }

    fn bump(&mut self, points: i64, reason: &str) {
        self.score += points;
        self.reasoning.push_str(reason);
    }

    fn finish(self, fallback_reasoning: &str) -> BusinessRecommendation {
        let score = self.score.clamp(0, MAX_SCORE);
        let reasoning = if self.reasoning.is_empty() {
            fallback_reasoning.to_string()
        } else {
            self.reasoning
        };
        BusinessRecommendation {
            category: self.category,
            score: score as u8,
            recommendation: self.category.recommendation(score),
            reasoning,
        }
    }
}

/// Scores Deal Closing, New Ventures and Strategic Planning, in that order,
/// on a 0-10 scale.
pub fn today_business_recommendations(
    life_path: LifePathNumber,
    universal_day: UniversalDayNumber,
    moon_phase: MoonPhaseKind,
    user_id: Option<&str>,
) -> [BusinessRecommendation; 3] {
    let seed = user_seed(user_id);

    let mut deal = CategoryScore::new(TimingCategory::DealClosing, seed);
    if universal_day.value() == 8 {
        deal.bump(3, "Universal Day 8 (Power). ");
    }
    if moon_phase == MoonPhaseKind::FullMoon {
        deal.bump(2, "Full Moon energy. ");
    }
    if matches!(life_path.value(), 8 | 22) {
        deal.bump(1, &format!("Your Life Path {life_path}. "));
    }
    // Deal reasoning always ends with the moon's guidance.
    deal.reasoning.push_str(moon_phase.business_guidance());

    let mut venture = CategoryScore::new(TimingCategory::NewVentures, seed);
    if universal_day.value() == 1 {
        venture.bump(3, "Universal Day 1 (New Beginnings). ");
    }
    if moon_phase == MoonPhaseKind::NewMoon {
        venture.bump(2, "New Moon - perfect for launches. ");
    }

    let mut strategy = CategoryScore::new(TimingCategory::StrategicPlanning, seed);
    if universal_day.value() == 7 {
        strategy.bump(3, "Universal Day 7 (Analysis). ");
    }
    if matches!(life_path.value(), 7 | 11) {
        strategy.bump(1, "Your natural strategic energy. ");
    }

    [
        deal.finish(""),
        venture.finish("Focus on existing momentum."),
        strategy.finish("Balance strategy with action."),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn life_path(value: u8) -> LifePathNumber {
        LifePathNumber::try_from(value).expect("valid life path")
    }

    fn day(value: u8) -> UniversalDayNumber {
        UniversalDayNumber::try_from(value).expect("valid universal day")
    }

    #[test]
    fn categories_come_back_in_fixed_order() {
        let recommendations = today_business_recommendations(
            life_path(5),
            day(5),
            MoonPhaseKind::FirstQuarter,
            None,
        );
        let categories: Vec<_> = recommendations.iter().map(|rec| rec.category).collect();
        assert_eq!(categories, TimingCategory::ordered().to_vec());
        assert!(recommendations.iter().all(|rec| rec.score == 5));
        assert_eq!(recommendations[1].reasoning, "Focus on existing momentum.");
        assert_eq!(recommendations[2].reasoning, "Balance strategy with action.");
        assert_eq!(
            recommendations[0].reasoning,
            MoonPhaseKind::FirstQuarter.business_guidance()
        );
    }

    #[test]
    fn deal_closing_stacks_bonuses_and_clamps() {
        let [deal, _, _] =
            today_business_recommendations(life_path(8), day(8), MoonPhaseKind::FullMoon, None);

        assert_eq!(deal.score, 10);
        assert_eq!(deal.recommendation, "Highly favorable - Push for closes");
        assert!(deal
            .reasoning
            .starts_with("Universal Day 8 (Power). Full Moon energy. Your Life Path 8. "));
        assert!(deal.reasoning.ends_with("Maximum visibility and energy."));
    }

    #[test]
    fn new_ventures_favour_day_one_under_a_new_moon() {
        let [_, venture, _] =
            today_business_recommendations(life_path(3), day(1), MoonPhaseKind::NewMoon, None);

        assert_eq!(venture.score, 10);
        assert_eq!(venture.recommendation, "Excellent timing for launches");
        assert_eq!(
            venture.reasoning,
            "Universal Day 1 (New Beginnings). New Moon - perfect for launches. "
        );
    }

    #[test]
    fn strategic_planning_rewards_day_seven_and_seekers() {
        let [_, _, strategy] = today_business_recommendations(
            life_path(7),
            day(7),
            MoonPhaseKind::WaningGibbous,
            None,
        );

        assert_eq!(strategy.score, 9);
        assert_eq!(strategy.recommendation, "Ideal for deep strategic work");
    }

    #[test]
    fn user_offsets_vary_each_category_independently() {
        // "ab" sums to 195: 195 % 3 = 0, 390 % 3 = 0, (195 / 3) % 3 = 2
        let [deal, venture, strategy] = today_business_recommendations(
            life_path(5),
            day(5),
            MoonPhaseKind::FirstQuarter,
            Some("ab"),
        );

        assert_eq!(deal.score, 4);
        assert_eq!(deal.recommendation, "Mixed - Focus on relationship building");
        assert_eq!(venture.score, 4);
        assert_eq!(strategy.score, 7);
        assert_eq!(strategy.recommendation, "Ideal for deep strategic work");
    }

    #[test]
    fn offsets_stay_within_their_ranges() {
        for seed in 0..500u64 {
            let deal = TimingCategory::DealClosing.user_offset(seed);
            let venture = TimingCategory::NewVentures.user_offset(seed);
            let strategy = TimingCategory::StrategicPlanning.user_offset(seed);
            assert!((-1..=1).contains(&deal));
            assert!((-1..=1).contains(&venture));
            assert!((0..=2).contains(&strategy));
        }
    }

    #[test]
    fn serializes_category_labels() {
        let recommendations =
            today_business_recommendations(life_path(1), day(2), MoonPhaseKind::NewMoon, None);
        let value = serde_json::to_value(&recommendations).expect("serializes");
        assert_eq!(value[0]["category"], "Deal Closing");
        assert_eq!(value[1]["category"], "New Ventures");
        assert_eq!(value[2]["category"], "Strategic Planning");
        assert_eq!(value[1]["score"], 7);
    }
}
