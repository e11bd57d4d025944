use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::Slab;

/// Errors found while validating a [`RegimeConfig`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegimeConfigError {
    #[error("regime has no slabs")]
    NoSlabs,

    #[error("first slab must start at 0, found {0}")]
    FirstSlabNotZero(Decimal),

    #[error("slab {index} starts at {found} but previous slab ends at {expected}")]
    NotContiguous {
        index: usize,
        expected: Decimal,
        found: Decimal,
    },

    #[error("slab {index} upper bound {max} is not above its lower bound {min}")]
    EmptySlab {
        index: usize,
        min: Decimal,
        max: Decimal,
    },

    #[error("only the last slab may be unbounded (slab {0} has no upper bound)")]
    UnboundedBeforeLast(usize),

    #[error("last slab must be unbounded")]
    LastSlabBounded,

    #[error("slab {index} has negative rate {rate}")]
    NegativeRate { index: usize, rate: Decimal },

    #[error("slab {index} rate {rate} is below the previous slab's rate {previous}")]
    DecreasingRate {
        index: usize,
        rate: Decimal,
        previous: Decimal,
    },

    #[error("{field} must not be negative, found {value}")]
    NegativeConstant { field: &'static str, value: Decimal },
}

/// Slab table and policy constants for one tax regime.
///
/// All amounts are in rupees; `cess_rate` is a percentage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegimeConfig {
    pub name: String,
    pub standard_deduction: Decimal,
    /// Largest rebate that can be granted.
    pub rebate_ceiling: Decimal,
    /// Rebate applies while taxable income (after the standard deduction)
    /// is at or below this amount.
    pub rebate_income_limit: Decimal,
    pub cess_rate: Decimal,
    pub slabs: Vec<Slab>,
}

impl RegimeConfig {
    /// New tax regime for FY 2024-25 (Budget 2024).
    pub fn new_regime_fy_2024_25() -> Self {
        Self {
            name: "New Tax Regime FY 2024-25".to_string(),
            standard_deduction: Decimal::from(75_000),
            rebate_ceiling: Decimal::from(25_000),
            rebate_income_limit: Decimal::from(700_000),
            cess_rate: Decimal::from(4),
            slabs: vec![
                Slab::new(Decimal::ZERO, Some(Decimal::from(300_000)), Decimal::ZERO),
                Slab::new(
                    Decimal::from(300_000),
                    Some(Decimal::from(700_000)),
                    Decimal::from(5),
                ),
                Slab::new(
                    Decimal::from(700_000),
                    Some(Decimal::from(1_000_000)),
                    Decimal::from(10),
                ),
                Slab::new(
                    Decimal::from(1_000_000),
                    Some(Decimal::from(1_200_000)),
                    Decimal::from(15),
                ),
                Slab::new(
                    Decimal::from(1_200_000),
                    Some(Decimal::from(1_500_000)),
                    Decimal::from(20),
                ),
                Slab::new(Decimal::from(1_500_000), None, Decimal::from(30)),
            ],
        }
    }

    /// Returns a copy of this configuration with its slab table replaced.
    pub fn with_slabs(
        mut self,
        slabs: Vec<Slab>,
    ) -> Self {
        self.slabs = slabs;
        self
    }

    /// Checks the slab table and constants.
    ///
    /// Slabs must start at zero, be contiguous with strictly increasing
    /// bounds, end with a single unbounded slab, and carry non-negative,
    /// non-decreasing rates.
    pub fn validate(&self) -> Result<(), RegimeConfigError> {
        for (field, value) in [
            ("standard_deduction", self.standard_deduction),
            ("rebate_ceiling", self.rebate_ceiling),
            ("rebate_income_limit", self.rebate_income_limit),
            ("cess_rate", self.cess_rate),
        ] {
            if value < Decimal::ZERO {
                return Err(RegimeConfigError::NegativeConstant { field, value });
            }
        }

        let first = self.slabs.first().ok_or(RegimeConfigError::NoSlabs)?;
        if !first.min_income.is_zero() {
            return Err(RegimeConfigError::FirstSlabNotZero(first.min_income));
        }

        let last_index = self.slabs.len() - 1;
        let mut previous: Option<&Slab> = None;

        for (index, slab) in self.slabs.iter().enumerate() {
            if slab.rate < Decimal::ZERO {
                return Err(RegimeConfigError::NegativeRate {
                    index,
                    rate: slab.rate,
                });
            }

            match slab.max_income {
                Some(max) if max <= slab.min_income => {
                    return Err(RegimeConfigError::EmptySlab {
                        index,
                        min: slab.min_income,
                        max,
                    });
                }
                Some(_) if index == last_index => {
                    return Err(RegimeConfigError::LastSlabBounded);
                }
                None if index != last_index => {
                    return Err(RegimeConfigError::UnboundedBeforeLast(index));
                }
                _ => {}
            }

            if let Some(prev) = previous {
                // prev is bounded: only the last slab may be open-ended.
                let expected = prev.max_income.unwrap_or(Decimal::MAX);
                if slab.min_income != expected {
                    return Err(RegimeConfigError::NotContiguous {
                        index,
                        expected,
                        found: slab.min_income,
                    });
                }
                if slab.rate < prev.rate {
                    return Err(RegimeConfigError::DecreasingRate {
                        index,
                        rate: slab.rate,
                        previous: prev.rate,
                    });
                }
            }

            previous = Some(slab);
        }

        Ok(())
    }
}

impl Default for RegimeConfig {
    fn default() -> Self {
        Self::new_regime_fy_2024_25()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn two_slab_config(slabs: Vec<Slab>) -> RegimeConfig {
        RegimeConfig::new_regime_fy_2024_25().with_slabs(slabs)
    }

    #[test]
    fn built_in_regime_is_valid() {
        assert_eq!(RegimeConfig::new_regime_fy_2024_25().validate(), Ok(()));
    }

    #[test]
    fn built_in_regime_constants() {
        let config = RegimeConfig::default();

        assert_eq!(config.standard_deduction, dec!(75000));
        assert_eq!(config.rebate_ceiling, dec!(25000));
        assert_eq!(config.rebate_income_limit, dec!(700000));
        assert_eq!(config.cess_rate, dec!(4));
        assert_eq!(config.slabs.len(), 6);
    }

    #[test]
    fn rejects_empty_slab_table() {
        let config = two_slab_config(vec![]);

        assert_eq!(config.validate(), Err(RegimeConfigError::NoSlabs));
    }

    #[test]
    fn rejects_first_slab_above_zero() {
        let config = two_slab_config(vec![Slab::new(dec!(100), None, dec!(5))]);

        assert_eq!(
            config.validate(),
            Err(RegimeConfigError::FirstSlabNotZero(dec!(100)))
        );
    }

    #[test]
    fn rejects_gap_between_slabs() {
        let config = two_slab_config(vec![
            Slab::new(dec!(0), Some(dec!(300000)), dec!(0)),
            Slab::new(dec!(400000), None, dec!(5)),
        ]);

        assert_eq!(
            config.validate(),
            Err(RegimeConfigError::NotContiguous {
                index: 1,
                expected: dec!(300000),
                found: dec!(400000),
            })
        );
    }

    #[test]
    fn rejects_bounded_last_slab() {
        let config = two_slab_config(vec![
            Slab::new(dec!(0), Some(dec!(300000)), dec!(0)),
            Slab::new(dec!(300000), Some(dec!(700000)), dec!(5)),
        ]);

        assert_eq!(config.validate(), Err(RegimeConfigError::LastSlabBounded));
    }

    #[test]
    fn rejects_unbounded_slab_before_last() {
        let config = two_slab_config(vec![
            Slab::new(dec!(0), None, dec!(0)),
            Slab::new(dec!(300000), None, dec!(5)),
        ]);

        assert_eq!(
            config.validate(),
            Err(RegimeConfigError::UnboundedBeforeLast(0))
        );
    }

    #[test]
    fn rejects_inverted_bounds() {
        let config = two_slab_config(vec![
            Slab::new(dec!(0), Some(dec!(0)), dec!(0)),
            Slab::new(dec!(0), None, dec!(5)),
        ]);

        assert_eq!(
            config.validate(),
            Err(RegimeConfigError::EmptySlab {
                index: 0,
                min: dec!(0),
                max: dec!(0),
            })
        );
    }

    #[test]
    fn rejects_decreasing_rates() {
        let config = two_slab_config(vec![
            Slab::new(dec!(0), Some(dec!(300000)), dec!(10)),
            Slab::new(dec!(300000), None, dec!(5)),
        ]);

        assert_eq!(
            config.validate(),
            Err(RegimeConfigError::DecreasingRate {
                index: 1,
                rate: dec!(5),
                previous: dec!(10),
            })
        );
    }

    #[test]
    fn rejects_negative_rate() {
        let config = two_slab_config(vec![Slab::new(dec!(0), None, dec!(-1))]);

        assert_eq!(
            config.validate(),
            Err(RegimeConfigError::NegativeRate {
                index: 0,
                rate: dec!(-1),
            })
        );
    }

    #[test]
    fn rejects_negative_cess() {
        let mut config = RegimeConfig::default();
        config.cess_rate = dec!(-4);

        assert_eq!(
            config.validate(),
            Err(RegimeConfigError::NegativeConstant {
                field: "cess_rate",
                value: dec!(-4),
            })
        );
    }
}
