//! Mean-lunation moon phase model.
//!
//! The phase is a single modulo against a reference new moon; no ephemeris is
//! consulted, so results can drift from the observed sky by up to a day.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Mean length of a lunation in days.
pub const SYNODIC_MONTH_DAYS: f64 = 29.530_588_67;

/// 2000-01-06T18:14:00Z as Unix milliseconds.
const REFERENCE_NEW_MOON_MILLIS: i64 = 947_182_440_000;
const MILLIS_PER_DAY: f64 = 86_400_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoonPhaseKind {
    #[serde(rename = "New Moon")]
    NewMoon,
    #[serde(rename = "Waxing Crescent")]
    WaxingCrescent,
    #[serde(rename = "First Quarter")]
    FirstQuarter,
    #[serde(rename = "Waxing Gibbous")]
    WaxingGibbous,
    #[serde(rename = "Full Moon")]
    FullMoon,
    #[serde(rename = "Waning Gibbous")]
    WaningGibbous,
    #[serde(rename = "Last Quarter")]
    LastQuarter,
    #[serde(rename = "Waning Crescent")]
    WaningCrescent,
}

impl MoonPhaseKind {
    pub const fn ordered() -> [Self; 8] {
        [
            Self::NewMoon,
            Self::WaxingCrescent,
            Self::FirstQuarter,
            Self::WaxingGibbous,
            Self::FullMoon,
            Self::WaningGibbous,
            Self::LastQuarter,
            Self::WaningCrescent,
        ]
    }

    /// Buckets a position in `[0, 1)` into eight equal bands. The new moon band
    /// straddles the wrap point.
    pub fn from_cycle_position(position: f64) -> Self {
        if !(0.0625..0.9375).contains(&position) {
            Self::NewMoon
        } else if position < 0.1875 {
            Self::WaxingCrescent
        } else if position < 0.3125 {
            Self::FirstQuarter
        } else if position < 0.4375 {
            Self::WaxingGibbous
        } else if position < 0.5625 {
            Self::FullMoon
        } else if position < 0.6875 {
            Self::WaningGibbous
        } else if position < 0.8125 {
            Self::LastQuarter
        } else {
            Self::WaningCrescent
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::NewMoon => "New Moon",
            Self::WaxingCrescent => "Waxing Crescent",
            Self::FirstQuarter => "First Quarter",
            Self::WaxingGibbous => "Waxing Gibbous",
            Self::FullMoon => "Full Moon",
            Self::WaningGibbous => "Waning Gibbous",
            Self::LastQuarter => "Last Quarter",
            Self::WaningCrescent => "Waning Crescent",
        }
    }

    pub const fn is_waning(self) -> bool {
        matches!(self, Self::WaningGibbous | Self::WaningCrescent)
    }

    pub const fn illumination(self) -> u8 {
        match self {
            Self::NewMoon => 0,
            Self::WaxingCrescent | Self::WaningCrescent => 25,
            Self::FirstQuarter | Self::LastQuarter => 50,
            Self::WaxingGibbous | Self::WaningGibbous => 75,
            Self::FullMoon => 100,
        }
    }

    pub const fn emoji(self) -> &'static str {
        match self {
            Self::NewMoon => "🌑",
            Self::WaxingCrescent => "🌒",
            Self::FirstQuarter => "🌓",
            Self::WaxingGibbous => "🌔",
            Self::FullMoon => "🌕",
            Self::WaningGibbous => "🌖",
            Self::LastQuarter => "🌗",
            Self::WaningCrescent => "🌘",
        }
    }

    pub const fn meaning(self) -> &'static str {
        match self {
            Self::NewMoon => "New beginnings, fresh starts, planting seeds",
            Self::WaxingCrescent => "Growth, expansion, building momentum",
            Self::FirstQuarter => "Action, decision-making, overcoming obstacles",
            Self::WaxingGibbous => "Refinement, adjustment, preparation",
            Self::FullMoon => "Culmination, celebration, peak energy",
            Self::WaningGibbous => "Gratitude, sharing, teaching",
            Self::LastQuarter => "Release, forgiveness, letting go",
            Self::WaningCrescent => "Rest, reflection, introspection",
        }
    }

    pub const fn business_guidance(self) -> &'static str {
        match self {
            Self::NewMoon => "Perfect for starting new projects, launching ventures, setting intentions. Initiate deals.",
            Self::WaxingCrescent => "Build on new initiatives. Network actively. Momentum is building.",
            Self::FirstQuarter => "Make bold decisions. Push through resistance. Take decisive action on deals.",
            Self::WaxingGibbous => "Fine-tune strategies. Prepare for launches. Refine pitches before major presentations.",
            Self::FullMoon => "Close major deals. Launch products. Celebrate wins. Maximum visibility and energy.",
            Self::WaningGibbous => "Share knowledge. Mentor team members. Express gratitude to clients and partners.",
            Self::LastQuarter => "Cut underperforming projects. Release what doesn't serve you. Make space for new opportunities.",
            Self::WaningCrescent => "Review and reflect. Rest before next cycle. Strategic planning, not execution.",
        }
    }
}

/// Wire shape of a moon phase reading.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoonPhase {
    pub phase: MoonPhaseKind,
    pub illumination: u8,
    pub emoji: &'static str,
    pub meaning: &'static str,
    pub business_guidance: &'static str,
}

impl From<MoonPhaseKind> for MoonPhase {
    fn from(kind: MoonPhaseKind) -> Self {
        Self {
            phase: kind,
            illumination: kind.illumination(),
            emoji: kind.emoji(),
            meaning: kind.meaning(),
            business_guidance: kind.business_guidance(),
        }
    }
}

fn days_since_reference(at: DateTime<Utc>) -> f64 {
    (at.timestamp_millis() - REFERENCE_NEW_MOON_MILLIS) as f64 / MILLIS_PER_DAY
}

/// Fraction of the current lunation elapsed at `at`, in `[0, 1)`.
///
/// Instants before the reference epoch wrap forward rather than going negative.
pub fn lunar_cycle_position(at: DateTime<Utc>) -> f64 {
    let position = days_since_reference(at).rem_euclid(SYNODIC_MONTH_DAYS) / SYNODIC_MONTH_DAYS;
    if position >= 1.0 {
        0.0
    } else {
        position
    }
}

pub fn moon_phase_at(at: DateTime<Utc>) -> MoonPhase {
    MoonPhaseKind::from_cycle_position(lunar_cycle_position(at)).into()
}

/// Calendar dates are read at 00:00 UTC.
pub fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

pub fn current_moon_phase(date: NaiveDate) -> MoonPhase {
    moon_phase_at(start_of_day(date))
}

/// First instant strictly after `from` at which the cycle reaches `target`.
fn next_cycle_point(from: DateTime<Utc>, target: f64) -> DateTime<Utc> {
    let position = lunar_cycle_position(from);
    let cycles = if position < target {
        target - position
    } else {
        1.0 + target - position
    };
    let millis = (cycles * SYNODIC_MONTH_DAYS * MILLIS_PER_DAY).ceil().max(1.0) as i64;
    from.checked_add_signed(Duration::milliseconds(millis))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

pub fn next_full_moon(from: DateTime<Utc>) -> DateTime<Utc> {
    next_cycle_point(from, 0.5)
}

pub fn next_new_moon(from: DateTime<Utc>) -> DateTime<Utc> {
    next_cycle_point(from, 1.0)
}

/// UTC date of the next full moon after the start of `from`. Equal to `from`
/// only when the full moon falls later that same UTC day.
pub fn next_full_moon_date(from: NaiveDate) -> NaiveDate {
    next_full_moon(start_of_day(from)).date_naive()
}

/// UTC date of the next new moon after the start of `from`; see
/// [`next_full_moon_date`] for the same-day case.
pub fn next_new_moon_date(from: NaiveDate) -> NaiveDate {
    next_new_moon(start_of_day(from)).date_naive()
}
