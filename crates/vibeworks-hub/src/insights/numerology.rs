use super::error::InsightError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Numerology archetype derived from a birth date; one of 1-9, 11, 22 or 33.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct LifePathNumber(u8);

impl LifePathNumber {
    pub const fn value(self) -> u8 {
        self.0
    }

    pub const fn is_master(self) -> bool {
        matches!(self.0, 11 | 22 | 33)
    }

    pub fn profile(self) -> &'static LifePathProfile {
        life_path_profile(self)
    }
}

impl TryFrom<u8> for LifePathNumber {
    type Error = InsightError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1..=9 | 11 | 22 | 33 => Ok(Self(value)),
            other => Err(InsightError::InvalidLifePath(other)),
        }
    }
}

impl From<LifePathNumber> for u8 {
    fn from(value: LifePathNumber) -> Self {
        value.0
    }
}

impl fmt::Display for LifePathNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Day-wide numerology value shared by every user; always fully reduced to 1-9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct UniversalDayNumber(u8);

impl UniversalDayNumber {
    pub const fn value(self) -> u8 {
        self.0
    }

    pub const fn energy(self) -> &'static str {
        match self.0 {
            1 => "New Beginnings & Leadership",
            2 => "Partnership & Cooperation",
            3 => "Creativity & Expression",
            4 => "Foundation & Structure",
            5 => "Change & Adventure",
            6 => "Harmony & Service",
            7 => "Analysis & Strategy",
            8 => "Power & Material Success",
            _ => "Completion & Wisdom",
        }
    }
}

impl TryFrom<u8> for UniversalDayNumber {
    type Error = InsightError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1..=9 => Ok(Self(value)),
            other => Err(InsightError::InvalidUniversalDay(other)),
        }
    }
}

impl From<UniversalDayNumber> for u8 {
    fn from(value: UniversalDayNumber) -> Self {
        value.0
    }
}

impl fmt::Display for UniversalDayNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Sums the digits of month, day and year written without zero padding, so
/// 1980-05-28 contributes the stream `5 28 1980`.
fn date_digit_sum(date: NaiveDate) -> u32 {
    digit_sum(date.month()) + digit_sum(date.day()) + digit_sum(date.year().unsigned_abs())
}

fn digit_sum(mut value: u32) -> u32 {
    let mut sum = 0;
    while value > 0 {
        sum += value % 10;
        value /= 10;
    }
    sum
}

fn reduce_to_single_digit(mut sum: u32) -> u8 {
    while sum > 9 {
        sum = digit_sum(sum);
    }
    // Month and day are never zero, so the sum bottoms out at 1.
    sum.max(1) as u8
}

/// Life path for a birth date. A raw digit sum of exactly 11, 22 or 33 is a
/// master number and is kept; anything else is reduced to a single digit.
pub fn calculate_life_path(birth_date: NaiveDate) -> LifePathNumber {
    let sum = date_digit_sum(birth_date);
    if matches!(sum, 11 | 22 | 33) {
        return LifePathNumber(sum as u8);
    }
    LifePathNumber(reduce_to_single_digit(sum))
}

/// Universal day for a calendar date, with no master-number exception.
pub fn calculate_universal_day(date: NaiveDate) -> UniversalDayNumber {
    UniversalDayNumber(reduce_to_single_digit(date_digit_sum(date)))
}

#[derive(Debug, Clone, Serialize)]
pub struct LifePathProfile {
    pub title: &'static str,
    pub description: &'static str,
    pub strengths: &'static [&'static str],
}

static PROFILES: [LifePathProfile; 12] = [
    LifePathProfile {
        title: "The Leader",
        description: "Independent, pioneering, and ambitious. Natural-born leaders who forge their own path.",
        strengths: &["Leadership", "Independence", "Innovation", "Determination"],
    },
    LifePathProfile {
        title: "The Peacemaker",
        description: "Diplomatic, intuitive, and cooperative. Natural mediators who seek harmony.",
        strengths: &["Diplomacy", "Intuition", "Cooperation", "Sensitivity"],
    },
    LifePathProfile {
        title: "The Creative",
        description: "Expressive, optimistic, and imaginative. Natural communicators and artists.",
        strengths: &["Creativity", "Communication", "Optimism", "Social Skills"],
    },
    LifePathProfile {
        title: "The Builder",
        description: "Practical, organized, and dependable. Natural organizers who build strong foundations.",
        strengths: &["Organization", "Reliability", "Hard Work", "Discipline"],
    },
    LifePathProfile {
        title: "The Freedom Seeker",
        description: "Adventurous, versatile, and dynamic. Natural explorers who embrace change.",
        strengths: &["Adaptability", "Freedom", "Adventure", "Versatility"],
    },
    LifePathProfile {
        title: "The Nurturer",
        description: "Responsible, caring, and protective. Natural healers and caregivers.",
        strengths: &["Compassion", "Responsibility", "Service", "Harmony"],
    },
    LifePathProfile {
        title: "The Seeker",
        description: "Analytical, spiritual, and introspective. Natural philosophers and truth-seekers.",
        strengths: &["Analysis", "Wisdom", "Spirituality", "Intuition"],
    },
    LifePathProfile {
        title: "The Powerhouse",
        description: "Ambitious, efficient, and authoritative. Natural executives and manifestors.",
        strengths: &["Ambition", "Authority", "Material Success", "Efficiency"],
    },
    LifePathProfile {
        title: "The Humanitarian",
        description: "Compassionate, idealistic, and generous. Natural humanitarians and visionaries.",
        strengths: &["Compassion", "Idealism", "Wisdom", "Generosity"],
    },
    LifePathProfile {
        title: "The Master Intuitive",
        description: "Highly intuitive, inspirational, and spiritual. Channels higher wisdom to inspire others.",
        strengths: &["Intuition", "Inspiration", "Spiritual Insight", "Vision"],
    },
    LifePathProfile {
        title: "The Master Builder",
        description: "Visionary architect of grand plans. Turns dreams into reality on a massive scale.",
        strengths: &["Mastery", "Manifestation", "Vision", "Global Impact"],
    },
    LifePathProfile {
        title: "The Master Teacher",
        description: "Highest level of spiritual teaching and healing. Selfless service to humanity through love and compassion.",
        strengths: &["Master Teaching", "Unconditional Love", "Healing", "Global Service"],
    },
];

fn life_path_profile(number: LifePathNumber) -> &'static LifePathProfile {
    let index = match number.value() {
        value @ 1..=9 => usize::from(value - 1),
        11 => 9,
        22 => 10,
        _ => 11,
    };
    &PROFILES[index]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    #[test]
    fn master_teacher_sum_is_preserved() {
        assert_eq!(calculate_life_path(date(1980, 5, 28)).value(), 33);
    }

    #[test]
    fn master_numbers_eleven_and_twenty_two_are_preserved() {
        assert_eq!(calculate_life_path(date(2000, 1, 8)).value(), 11);
        assert_eq!(calculate_life_path(date(2004, 7, 9)).value(), 22);
    }

    #[test]
    fn master_number_reached_mid_reduction_is_reduced_further() {
        // 1+1+1+9+8+9 = 29 -> 11 -> 2
        assert_eq!(calculate_life_path(date(1989, 1, 1)).value(), 2);
    }

    #[test]
    fn universal_day_never_keeps_master_numbers() {
        assert_eq!(calculate_universal_day(date(2000, 1, 8)).value(), 2);
        assert_eq!(calculate_universal_day(date(2004, 7, 9)).value(), 4);
        assert_eq!(calculate_universal_day(date(1980, 5, 28)).value(), 6);
    }

    #[test]
    fn universal_day_stays_in_single_digits_across_a_decade() {
        let mut day = date(2020, 1, 1);
        while day < date(2030, 1, 1) {
            let number = calculate_universal_day(day).value();
            assert!((1..=9).contains(&number), "{day} produced {number}");
            day = day.succ_opt().expect("next day");
        }
    }

    #[test]
    fn life_path_rejects_unknown_values() {
        assert_eq!(
            LifePathNumber::try_from(12),
            Err(InsightError::InvalidLifePath(12))
        );
        assert!(LifePathNumber::try_from(0).is_err());
        assert!(LifePathNumber::try_from(22).expect("master").is_master());
    }

    #[test]
    fn universal_day_rejects_zero_and_double_digits() {
        assert!(UniversalDayNumber::try_from(0).is_err());
        assert!(UniversalDayNumber::try_from(11).is_err());
        assert_eq!(
            UniversalDayNumber::try_from(8).expect("valid").energy(),
            "Power & Material Success"
        );
    }

    #[test]
    fn profiles_cover_master_numbers() {
        let teacher = LifePathNumber::try_from(33).expect("valid");
        assert_eq!(teacher.profile().title, "The Master Teacher");
        let leader = LifePathNumber::try_from(1).expect("valid");
        assert_eq!(leader.profile().title, "The Leader");
        assert_eq!(leader.profile().strengths.len(), 4);
    }

    #[test]
    fn serializes_as_bare_integer() {
        let number = LifePathNumber::try_from(11).expect("valid");
        assert_eq!(serde_json::to_string(&number).expect("serializes"), "11");
        let parsed: Result<LifePathNumber, _> = serde_json::from_str("10");
        assert!(parsed.is_err());
    }
}
