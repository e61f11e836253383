use super::super::moon::{current_moon_phase, MoonPhaseKind};
use super::super::numerology::calculate_universal_day;
use chrono::NaiveDate;

pub const MAX_LAUNCH_DAYS: usize = 5;

/// Days within `window_days` of `from` (inclusive of `from`) whose universal
/// day is 1 or 8 and whose moon is new or full. Returns at most
/// [`MAX_LAUNCH_DAYS`] dates in calendar order.
pub fn best_launch_days(from: NaiveDate, window_days: u32) -> Vec<NaiveDate> {
    from.iter_days()
        .take(window_days as usize)
        .filter(|day| {
            let ideal_day = matches!(calculate_universal_day(*day).value(), 1 | 8);
            let ideal_moon = matches!(
                current_moon_phase(*day).phase,
                MoonPhaseKind::NewMoon | MoonPhaseKind::FullMoon
            );
            ideal_day && ideal_moon
        })
        .take(MAX_LAUNCH_DAYS)
        .collect()
}
