//! TOML regime files.
//!
//! ```toml
//! name = "New Tax Regime FY 2024-25"
//! standard_deduction = 75000
//! rebate_ceiling = 25000
//! rebate_income_limit = 700000
//! cess_rate = 4
//!
//! [[slabs]]
//! min_income = 0
//! max_income = 300000
//! rate = 0
//!
//! [[slabs]]
//! min_income = 300000
//! rate = 5
//! ```
//!
//! A slab without `max_income` is unbounded.

use std::fs::File;
use std::path::{Path, PathBuf};

use tax_core::{RegimeConfig, RegimeConfigError};
use thiserror::Error;
use tracing::{info, warn};

use crate::loader::{SlabLoader, SlabLoaderError};

#[derive(Debug, Error)]
pub enum RegimeFileError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse regime file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Slabs(#[from] SlabLoaderError),

    #[error("invalid regime: {0}")]
    Invalid(#[from] RegimeConfigError),
}

pub struct RegimeFile;

impl RegimeFile {
    /// Parses and validates a regime from TOML text.
    pub fn parse_str(content: &str) -> Result<RegimeConfig, RegimeFileError> {
        let config: RegimeConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<RegimeConfig, RegimeFileError> {
        let content = std::fs::read_to_string(path).map_err(|source| {
            warn!("Failed to read regime file at {:?}: {}", path, source);
            RegimeFileError::Read {
                path: path.to_path_buf(),
                source,
            }
        })?;

        Self::parse_str(&content)
    }
}

/// Builds the active regime.
///
/// Starts from `regime_path` when given, otherwise from the built-in
/// FY 2024-25 regime. When `slabs_path` is given, the slab table is
/// replaced by the `slab_set` rows of that CSV file. The result is
/// validated either way.
pub fn load_regime(
    regime_path: Option<&Path>,
    slabs_path: Option<&Path>,
    slab_set: &str,
) -> Result<RegimeConfig, RegimeFileError> {
    let mut config = match regime_path {
        Some(path) => {
            info!(path = %path.display(), "loading regime file");
            RegimeFile::from_path(path)?
        }
        None => RegimeConfig::new_regime_fy_2024_25(),
    };

    if let Some(path) = slabs_path {
        info!(path = %path.display(), slab_set, "loading slab table");
        let file = File::open(path).map_err(|source| RegimeFileError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let records = SlabLoader::parse(file)?;
        config = config.with_slabs(SlabLoader::slabs_for(&records, slab_set)?);
    }

    config.validate()?;
    Ok(config)
}
