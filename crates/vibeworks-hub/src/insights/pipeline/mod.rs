mod parser;

use super::moon::current_moon_phase;
use super::numerology::{calculate_universal_day, LifePathNumber};
use super::timing::{calculate_deal_probability, DealProbability};
use chrono::NaiveDate;
use serde::Serialize;
use std::io::Read;
use std::path::Path;
use tracing::debug;

pub use parser::PipelineDeal;

#[derive(Debug)]
pub enum PipelineImportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for PipelineImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PipelineImportError::Io(err) => write!(f, "failed to read pipeline export: {}", err),
            PipelineImportError::Csv(err) => write!(f, "invalid pipeline CSV data: {}", err),
        }
    }
}

impl std::error::Error for PipelineImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PipelineImportError::Io(err) => Some(err),
            PipelineImportError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for PipelineImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for PipelineImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Reads a CRM pipeline export with `Name`, `Value` and `Stage` columns.
pub struct PipelineImporter;

impl PipelineImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<PipelineDeal>, PipelineImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<PipelineDeal>, PipelineImportError> {
        Ok(parser::parse_deals(reader)?)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredDeal {
    pub name: String,
    pub value: f64,
    pub stage: String,
    pub probability: DealProbability,
}

/// Scores every deal against one user's life path and the day's cosmic
/// inputs, best odds first. Ties keep their export order.
pub fn score_pipeline(
    deals: Vec<PipelineDeal>,
    life_path: LifePathNumber,
    today: NaiveDate,
) -> Vec<ScoredDeal> {
    let universal_day = calculate_universal_day(today);
    let moon_phase = current_moon_phase(today).phase;

    let mut scored: Vec<ScoredDeal> = deals
        .into_iter()
        .map(|deal| {
            let probability = calculate_deal_probability(
                deal.value,
                &deal.stage,
                life_path,
                universal_day,
                moon_phase,
            );
            ScoredDeal {
                name: deal.name,
                value: deal.value,
                stage: deal.stage,
                probability,
            }
        })
        .collect();

    scored.sort_by(|left, right| right.probability.probability.cmp(&left.probability.probability));
    debug!(
        deals = scored.len(),
        universal_day = universal_day.value(),
        moon_phase = moon_phase.label(),
        "scored pipeline"
    );
    scored
}
