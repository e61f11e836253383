use std::io::Read;
use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, info};

use super::astrology::{greeting, DayPart, ZodiacSign};
use super::calendar::validate_birth_date;
use super::clock::Clock;
use super::error::InsightError;
use super::moon::current_moon_phase;
use super::numerology::{
    calculate_life_path, calculate_universal_day, LifePathNumber, LifePathProfile,
    UniversalDayNumber,
};
use super::pipeline::{score_pipeline, PipelineImportError, PipelineImporter, ScoredDeal};
use super::team::{analyze_team_compatibility, TeamCompatibility, TeamMember};
use super::timing::{
    best_launch_days, calculate_deal_probability, daily_timing, normalize_deal_value,
    DailyTiming, DealProbability,
};
use crate::config::InsightsConfig;

/// Dashboard header for a member: who they are numerologically and what today holds.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NumerologyReport {
    pub birth_date: NaiveDate,
    pub life_path_number: LifePathNumber,
    pub is_master_number: bool,
    pub profile: &'static LifePathProfile,
    pub sun_sign: ZodiacSign,
    pub sun_sign_glyph: &'static str,
    pub today: NaiveDate,
    pub universal_day_number: UniversalDayNumber,
    pub universal_day_energy: &'static str,
    pub greeting: String,
    pub subtitle: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchWindow {
    pub from: NaiveDate,
    pub window_days: u32,
    pub days: Vec<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineReport {
    pub today: NaiveDate,
    pub deals: Vec<ScoredDeal>,
}

/// Entry point for every scoring operation. Callers may pin "today"; otherwise
/// the clock decides it.
pub struct InsightsService<C> {
    clock: Arc<C>,
    launch_window_days: u32,
}

impl<C> InsightsService<C>
where
    C: Clock + 'static,
{
    pub fn new(clock: Arc<C>, config: &InsightsConfig) -> Self {
        Self {
            clock,
            launch_window_days: config.launch_window_days,
        }
    }

    pub fn launch_window_days(&self) -> u32 {
        self.launch_window_days
    }

    pub fn today(&self, pinned: Option<NaiveDate>) -> NaiveDate {
        pinned.unwrap_or_else(|| self.clock.today())
    }

    /// Greeting and subtitle follow `hour` when given, otherwise the clock's
    /// current hour, independently of whether `today` is pinned.
    pub fn numerology(
        &self,
        birth_date: NaiveDate,
        first_name: Option<&str>,
        today: Option<NaiveDate>,
        hour: Option<u32>,
    ) -> Result<NumerologyReport, InsightError> {
        let hour = match hour {
            Some(hour) if hour > 23 => return Err(InsightError::InvalidHour(hour)),
            Some(hour) => hour,
            None => self.clock.hour(),
        };
        let today = self.today(today);
        let birth_date = validate_birth_date(birth_date, today)?;
        let life_path = calculate_life_path(birth_date);
        let universal_day = calculate_universal_day(today);
        let sun_sign = ZodiacSign::from_birth_date(birth_date);

        debug!(
            life_path = life_path.value(),
            universal_day = universal_day.value(),
            sun_sign = sun_sign.label(),
            "computed numerology report"
        );

        Ok(NumerologyReport {
            birth_date,
            life_path_number: life_path,
            is_master_number: life_path.is_master(),
            profile: life_path.profile(),
            sun_sign,
            sun_sign_glyph: sun_sign.glyph(),
            today,
            universal_day_number: universal_day,
            universal_day_energy: universal_day.energy(),
            greeting: greeting(hour, first_name),
            subtitle: DayPart::from_hour(hour).subtitle(),
        })
    }

    pub fn deal_probability(
        &self,
        deal_value: f64,
        deal_stage: &str,
        life_path: LifePathNumber,
        today: Option<NaiveDate>,
    ) -> DealProbability {
        let today = self.today(today);
        let universal_day = calculate_universal_day(today);
        let moon_phase = current_moon_phase(today).phase;
        let result = calculate_deal_probability(
            normalize_deal_value(deal_value),
            deal_stage,
            life_path,
            universal_day,
            moon_phase,
        );

        info!(
            life_path = life_path.value(),
            universal_day = universal_day.value(),
            moon_phase = moon_phase.label(),
            probability = result.probability,
            "scored deal"
        );
        result
    }

    pub fn daily(
        &self,
        life_path: LifePathNumber,
        user_id: Option<&str>,
        today: Option<NaiveDate>,
    ) -> DailyTiming {
        let timing = daily_timing(self.today(today), life_path, user_id);
        debug!(
            date = %timing.date,
            universal_day = timing.universal_day_number.value(),
            moon_phase = timing.moon_phase.phase.label(),
            tarot = timing.tarot.name,
            "built daily timing"
        );
        timing
    }

    pub fn launch_days(&self, from: Option<NaiveDate>) -> LaunchWindow {
        let from = self.today(from);
        let days = best_launch_days(from, self.launch_window_days);
        debug!(%from, window_days = self.launch_window_days, found = days.len(), "searched launch days");
        LaunchWindow {
            from,
            window_days: self.launch_window_days,
            days,
        }
    }

    pub fn team(&self, members: &[TeamMember]) -> TeamCompatibility {
        let result = analyze_team_compatibility(members);
        debug!(members = members.len(), overall = result.overall, "analyzed team");
        result
    }

    pub fn pipeline<R: Read>(
        &self,
        reader: R,
        life_path: LifePathNumber,
        today: Option<NaiveDate>,
    ) -> Result<PipelineReport, PipelineImportError> {
        let today = self.today(today);
        let deals = PipelineImporter::from_reader(reader)?;
        let deals = score_pipeline(deals, life_path, today);
        info!(%today, deals = deals.len(), "scored pipeline export");
        Ok(PipelineReport { today, deals })
    }
}
