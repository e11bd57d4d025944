//! Loaders that turn on-disk regime data into a validated [`RegimeConfig`].
//!
//! [`RegimeConfig`]: tax_core::RegimeConfig

pub mod loader;
pub mod regime_file;

pub use loader::{SlabLoader, SlabLoaderError, SlabRecord};
pub use regime_file::{RegimeFile, RegimeFileError, load_regime};
