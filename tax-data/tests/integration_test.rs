//! Integration tests for regime loading against on-disk fixtures.

use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;
use tax_core::{RegimeConfig, RegimeConfigError, TaxEngine};
use tax_data::{RegimeFile, RegimeFileError, SlabLoaderError, load_regime};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("test-data")
        .join(name)
}

#[test]
fn toml_fixture_matches_built_in_regime() {
    let config = RegimeFile::from_path(&fixture("new_regime_2024_25.toml"))
        .expect("fixture regime should load");

    assert_eq!(config, RegimeConfig::new_regime_fy_2024_25());
}

#[test]
fn csv_slabs_replace_built_in_table() {
    let config = load_regime(None, Some(&fixture("slabs.csv")), "flat-ten")
        .expect("flat-ten slab set should load");

    assert_eq!(config.slabs.len(), 1);

    let engine = TaxEngine::new(&config).unwrap();
    // 11,25,000 taxable at a flat 10% = 1,12,500, plus 4% cess.
    assert_eq!(engine.compute(dec!(1200000)).total_tax, dec!(117000));
}

#[test]
fn toml_and_csv_combine() {
    let config = load_regime(
        Some(&fixture("new_regime_2024_25.toml")),
        Some(&fixture("slabs.csv")),
        "new-2024-25",
    )
    .unwrap();

    let engine = TaxEngine::new(&config).unwrap();
    assert_eq!(engine.compute(dec!(1200000)).total_tax, dec!(71500));
}

#[test]
fn non_contiguous_csv_slab_set_is_rejected() {
    let err = load_regime(None, Some(&fixture("slabs.csv")), "broken").unwrap_err();

    assert!(matches!(
        err,
        RegimeFileError::Invalid(RegimeConfigError::NotContiguous { index: 1, .. })
    ));
}

#[test]
fn unknown_csv_slab_set_is_rejected() {
    let err = load_regime(None, Some(&fixture("slabs.csv")), "old-regime").unwrap_err();

    assert!(matches!(err, RegimeFileError::Slabs(SlabLoaderError::NoSlabs(_))));
}

#[test]
fn missing_csv_file_is_a_read_error() {
    let err = load_regime(None, Some(&fixture("nope.csv")), "new-2024-25").unwrap_err();

    assert!(matches!(err, RegimeFileError::Read { .. }));
}
