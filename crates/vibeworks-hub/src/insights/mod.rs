//! Deterministic numerology, moon phase, tarot and business-timing scores.
//!
//! Every calculation is a pure function of a calendar date, a life path
//! number and, where personalised, a user id. The service layer resolves
//! "today" through a [`Clock`] so the HTTP surface and the CLI agree on the
//! reference time zone.

pub mod astrology;
pub mod calendar;
pub mod clock;
mod error;
pub mod moon;
pub mod numerology;
pub mod pipeline;
pub mod router;
mod seed;
pub mod service;
pub mod tarot;
pub mod team;
pub mod timing;

#[cfg(test)]
mod tests;

pub use astrology::{greeting, DayPart, ZodiacSign};
pub use calendar::{parse_date, validate_birth_date};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::InsightError;
pub use moon::{
    current_moon_phase, lunar_cycle_position, moon_phase_at, next_full_moon,
    next_full_moon_date, next_new_moon, next_new_moon_date, MoonPhase, MoonPhaseKind,
    SYNODIC_MONTH_DAYS,
};
pub use numerology::{
    calculate_life_path, calculate_universal_day, LifePathNumber, LifePathProfile,
    UniversalDayNumber,
};
pub use pipeline::{score_pipeline, PipelineDeal, PipelineImportError, PipelineImporter, ScoredDeal};
pub use router::insights_router;
pub use service::{InsightsService, LaunchWindow, NumerologyReport, PipelineReport};
pub use tarot::{daily_tarot, Arcana, TarotCard};
pub use team::{analyze_team_compatibility, TeamCompatibility, TeamMember};
pub use timing::{
    best_launch_days, calculate_deal_probability, daily_timing, today_business_recommendations,
    BusinessRecommendation, DailyTiming, DealConfidence, DealProbability, TimingCategory,
};
