use super::super::moon::MoonPhaseKind;
use super::super::numerology::{LifePathNumber, UniversalDayNumber};
use serde::{Deserialize, Serialize};

const BASE_PROBABILITY: i32 = 50;
const LARGE_DEAL_THRESHOLD: f64 = 100_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DealConfidence {
    Low,
    Medium,
    High,
}

impl DealConfidence {
    /// Confidence grows with the number of rules that fired, not with the score.
    pub const fn from_factor_count(count: usize) -> Self {
        if count >= 5 {
            Self::High
        } else if count >= 3 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DealProbability {
    pub probability: u8,
    pub confidence: DealConfidence,
    pub factors: Vec<String>,
    pub recommendation: &'static str,
}

fn recommendation_for(probability: u8) -> &'static str {
    match probability {
        75.. => "🔥 HIGHLY FAVORABLE - Push for close today",
        60..=74 => "✅ FAVORABLE - Good timing to advance",
        40..=59 => "⚠️ MIXED - Proceed with caution",
        _ => "❌ CHALLENGING - Consider delaying or restructuring",
    }
}

/// Non-finite and negative amounts are scored as zero.
pub fn normalize_deal_value(raw: f64) -> f64 {
    if raw.is_finite() && raw > 0.0 {
        raw
    } else {
        0.0
    }
}

/// Additive closing score from a base of 50. Factors are listed in the order
/// their rules were evaluated.
pub fn calculate_deal_probability(
    deal_value: f64,
    deal_stage: &str,
    life_path: LifePathNumber,
    universal_day: UniversalDayNumber,
    moon_phase: MoonPhaseKind,
) -> DealProbability {
    let mut score = BASE_PROBABILITY;
    let mut factors = Vec::new();

    match life_path.value() {
        8 | 22 => {
            score += 15;
            factors.push(format!(
                "Life Path {life_path} (Power/Manifestation) - Highly favorable"
            ));
        }
        1 | 11 => {
            score += 10;
            factors.push(format!("Life Path {life_path} (Leadership) - Favorable"));
        }
        _ => {}
    }

    match universal_day.value() {
        8 => {
            score += 20;
            factors.push("Universal Day 8 (Material Success) - Perfect for deals".to_string());
        }
        1 => {
            score += 10;
            factors.push("Universal Day 1 (New Beginnings) - Good for initiating".to_string());
        }
        9 => {
            score -= 10;
            factors.push(
                "Universal Day 9 (Completion) - Better to finish existing deals".to_string(),
            );
        }
        _ => {}
    }

    match moon_phase {
        MoonPhaseKind::FullMoon => {
            score += 15;
            factors.push("Full Moon - Peak energy for closing".to_string());
        }
        MoonPhaseKind::NewMoon => {
            score += 10;
            factors.push("New Moon - Great for starting negotiations".to_string());
        }
        phase if phase.is_waning() => {
            score -= 5;
            factors.push("Waning Moon - Less favorable for new deals".to_string());
        }
        _ => {}
    }

    if matches!(deal_stage, "Negotiation" | "Proposal") {
        score += 5;
        factors.push("Deal stage optimal for closing".to_string());
    }

    if deal_value > LARGE_DEAL_THRESHOLD {
        score -= 5;
        factors.push("Large deal - requires more alignment".to_string());
    }

    let probability = score.clamp(0, 100) as u8;

    DealProbability {
        probability,
        confidence: DealConfidence::from_factor_count(factors.len()),
        factors,
        recommendation: recommendation_for(probability),
    }
}
