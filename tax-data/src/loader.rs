use std::io::Read;

use rust_decimal::Decimal;
use serde::Deserialize;
use tax_core::Slab;
use thiserror::Error;

/// Errors that can occur when loading slab data.
#[derive(Debug, Error)]
pub enum SlabLoaderError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("no slabs found for regime '{0}'")]
    NoSlabs(String),
}

impl From<csv::Error> for SlabLoaderError {
    fn from(err: csv::Error) -> Self {
        SlabLoaderError::CsvParse(err.to_string())
    }
}

/// A single row of a slab CSV file.
///
/// - `regime`: the regime the slab belongs to (e.g. `new-2024-25`)
/// - `min_income`: inclusive lower bound in rupees
/// - `max_income`: exclusive upper bound (empty for unbounded)
/// - `rate`: marginal rate as a percentage (e.g. `5` for 5%)
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SlabRecord {
    pub regime: String,
    pub min_income: Decimal,
    #[serde(deserialize_with = "deserialize_optional_decimal")]
    pub max_income: Option<Decimal>,
    pub rate: Decimal,
}

impl From<&SlabRecord> for Slab {
    fn from(record: &SlabRecord) -> Self {
        Slab::new(record.min_income, record.max_income, record.rate)
    }
}

fn deserialize_optional_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => s
            .trim()
            .parse::<Decimal>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

/// Reads slab tables from CSV.
///
/// A file may hold several regimes; [`SlabLoader::slabs_for`] picks one.
/// The result is not validated here: hand it to a
/// [`RegimeConfig`](tax_core::RegimeConfig) and call `validate`.
pub struct SlabLoader;

impl SlabLoader {
    /// Parse slab records from a CSV reader, in file order.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<SlabRecord>, SlabLoaderError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let records = csv_reader
            .deserialize()
            .collect::<Result<Vec<SlabRecord>, csv::Error>>()?;

        tracing::debug!(count = records.len(), "parsed slab records");
        Ok(records)
    }

    /// Returns the slabs of `regime`, sorted by lower bound.
    pub fn slabs_for(
        records: &[SlabRecord],
        regime: &str,
    ) -> Result<Vec<Slab>, SlabLoaderError> {
        let mut slabs: Vec<Slab> = records
            .iter()
            .filter(|record| record.regime == regime)
            .map(Slab::from)
            .collect();

        if slabs.is_empty() {
            return Err(SlabLoaderError::NoSlabs(regime.to_string()));
        }

        slabs.sort_by(|a, b| a.min_income.cmp(&b.min_income));
        Ok(slabs)
    }
}
