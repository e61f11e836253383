use serde::{Deserialize, Deserializer, Serialize};
use std::io::Read;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineDeal {
    pub name: String,
    pub value: f64,
    pub stage: String,
}

pub(crate) fn parse_deals<R: Read>(reader: R) -> Result<Vec<PipelineDeal>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut deals = Vec::new();

    for record in csv_reader.deserialize::<PipelineRow>() {
        let row = record?;
        let value = row.value.as_deref().map(parse_amount).unwrap_or(0.0);
        deals.push(PipelineDeal {
            value,
            stage: row.stage.unwrap_or_default(),
            name: row.name,
        });
    }

    Ok(deals)
}

#[derive(Debug, Deserialize)]
struct PipelineRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Value", default, deserialize_with = "empty_string_as_none")]
    value: Option<String>,
    #[serde(rename = "Stage", default, deserialize_with = "empty_string_as_none")]
    stage: Option<String>,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

/// Accepts plain numbers and currency-formatted amounts such as `$12,500.00`.
/// Anything unparseable, negative or non-finite is scored as zero.
fn parse_amount(raw: &str) -> f64 {
    let cleaned: String = raw.chars().filter(|c| !matches!(c, '$' | ',')).collect();
    match cleaned.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => value,
        _ => {
            warn!(value = raw, "unreadable deal value; scoring as zero");
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts_strip_currency_formatting() {
        assert_eq!(parse_amount("$12,500.50"), 12_500.5);
        assert_eq!(parse_amount("900"), 900.0);
        assert_eq!(parse_amount("n/a"), 0.0);
        assert_eq!(parse_amount("-40"), 0.0);
        assert_eq!(parse_amount("NaN"), 0.0);
    }

    #[test]
    fn blank_stage_becomes_empty() {
        let deals = parse_deals("Name,Value,Stage\nSolo,10,\n".as_bytes()).expect("parses");
        assert_eq!(
            deals,
            vec![PipelineDeal {
                name: "Solo".to_string(),
                value: 10.0,
                stage: String::new(),
            }]
        );
    }
}
