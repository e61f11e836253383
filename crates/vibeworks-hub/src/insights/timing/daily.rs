use super::super::moon::{current_moon_phase, next_full_moon_date, next_new_moon_date, MoonPhase};
use super::super::numerology::{calculate_universal_day, LifePathNumber, UniversalDayNumber};
use super::super::tarot::{daily_tarot, TarotCard};
use super::recommendations::{today_business_recommendations, BusinessRecommendation};
use chrono::NaiveDate;
use serde::Serialize;

/// Everything the dashboard's timing widgets show for one user on one day.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyTiming {
    pub date: NaiveDate,
    pub universal_day_number: UniversalDayNumber,
    pub universal_day_energy: &'static str,
    pub moon_phase: MoonPhase,
    pub tarot: TarotCard,
    pub business_recommendations: [BusinessRecommendation; 3],
    pub next_full_moon: NaiveDate,
    pub next_new_moon: NaiveDate,
}

pub fn daily_timing(
    date: NaiveDate,
    life_path: LifePathNumber,
    user_id: Option<&str>,
) -> DailyTiming {
    let universal_day = calculate_universal_day(date);
    let moon_phase = current_moon_phase(date);
    let business_recommendations =
        today_business_recommendations(life_path, universal_day, moon_phase.phase, user_id);

    DailyTiming {
        date,
        universal_day_number: universal_day,
        universal_day_energy: universal_day.energy(),
        tarot: daily_tarot(date, user_id),
        business_recommendations,
        next_full_moon: next_full_moon_date(date),
        next_new_moon: next_new_moon_date(date),
        moon_phase,
    }
}
