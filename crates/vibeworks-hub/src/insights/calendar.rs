use super::error::InsightError;
use chrono::NaiveDate;
use serde::Deserialize;

const DAYS_PER_YEAR: f64 = 365.25;
const MAX_AGE_YEARS: f64 = 150.0;

pub fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub fn deserialize_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_date(&raw).map_err(serde::de::Error::custom)
}

pub fn deserialize_optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    opt.map(|value| parse_date(&value).map_err(serde::de::Error::custom))
        .transpose()
}

/// Rejects birth dates after `today`, before 1900-01-01, or more than 150
/// years (of 365.25 days) back.
pub fn validate_birth_date(birth_date: NaiveDate, today: NaiveDate) -> Result<NaiveDate, InsightError> {
    if birth_date > today {
        return Err(InsightError::BirthDateInFuture);
    }

    let earliest = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap_or(NaiveDate::MIN);
    if birth_date < earliest {
        return Err(InsightError::BirthDateTooEarly);
    }

    let age_years = (today - birth_date).num_days() as f64 / DAYS_PER_YEAR;
    if age_years > MAX_AGE_YEARS {
        return Err(InsightError::BirthDateUnrealistic);
    }

    Ok(birth_date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    #[test]
    fn parse_date_trims_and_reports_input() {
        assert_eq!(parse_date(" 2024-02-29 "), Ok(date(2024, 2, 29)));
        let err = parse_date("02/29/2024").expect_err("wrong format");
        assert!(err.contains("'02/29/2024'"));
    }

    #[test]
    fn optional_dates_accept_null_and_reject_garbage() {
        #[derive(Deserialize)]
        struct Payload {
            #[serde(default, deserialize_with = "deserialize_optional_date")]
            today: Option<NaiveDate>,
        }

        let missing: Payload = serde_json::from_str("{}").expect("parses");
        assert_eq!(missing.today, None);
        let null: Payload = serde_json::from_str(r#"{"today":null}"#).expect("parses");
        assert_eq!(null.today, None);
        let set: Payload = serde_json::from_str(r#"{"today":"2025-01-02"}"#).expect("parses");
        assert_eq!(set.today, Some(date(2025, 1, 2)));
        assert!(serde_json::from_str::<Payload>(r#"{"today":"soon"}"#).is_err());
    }

    #[test]
    fn birth_date_bounds() {
        let today = date(2025, 6, 1);
        assert_eq!(validate_birth_date(date(1990, 5, 28), today), Ok(date(1990, 5, 28)));
        assert_eq!(validate_birth_date(today, today), Ok(today));
        assert_eq!(
            validate_birth_date(date(2025, 6, 2), today),
            Err(InsightError::BirthDateInFuture)
        );
        assert_eq!(
            validate_birth_date(date(1899, 12, 31), today),
            Err(InsightError::BirthDateTooEarly)
        );
        assert_eq!(validate_birth_date(date(1900, 1, 1), today), Ok(date(1900, 1, 1)));
    }

    #[test]
    fn ages_past_one_hundred_fifty_are_unrealistic() {
        let today = date(2051, 1, 2);
        assert_eq!(
            validate_birth_date(date(1900, 1, 1), today),
            Err(InsightError::BirthDateUnrealistic)
        );
        assert!(validate_birth_date(date(1901, 1, 2), today).is_ok());
    }
}
