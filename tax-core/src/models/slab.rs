use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A contiguous income bracket taxed at a single marginal rate.
///
/// `min_income` is inclusive, `max_income` is exclusive; `None` means the
/// slab has no upper bound. `rate` is a percentage (`5` means 5%).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slab {
    pub min_income: Decimal,
    #[serde(default)]
    pub max_income: Option<Decimal>,
    pub rate: Decimal,
}

impl Slab {
    pub fn new(
        min_income: Decimal,
        max_income: Option<Decimal>,
        rate: Decimal,
    ) -> Self {
        Self {
            min_income,
            max_income,
            rate,
        }
    }

    pub fn is_unbounded(&self) -> bool {
        self.max_income.is_none()
    }

    /// Portion of `taxable_income` that falls inside this slab.
    ///
    /// Zero unless `taxable_income` is strictly above `min_income`, so a
    /// value sitting exactly on a boundary belongs to the lower slab.
    pub fn portion_of(
        &self,
        taxable_income: Decimal,
    ) -> Decimal {
        if taxable_income <= self.min_income {
            return Decimal::ZERO;
        }
        let upper = match self.max_income {
            Some(max) => taxable_income.min(max),
            None => taxable_income,
        };
        upper - self.min_income
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn portion_is_zero_at_lower_bound() {
        let slab = Slab::new(dec!(300000), Some(dec!(700000)), dec!(5));

        assert_eq!(slab.portion_of(dec!(300000)), Decimal::ZERO);
    }

    #[test]
    fn portion_is_clamped_to_upper_bound() {
        let slab = Slab::new(dec!(300000), Some(dec!(700000)), dec!(5));

        assert_eq!(slab.portion_of(dec!(1125000)), dec!(400000));
    }

    #[test]
    fn portion_inside_slab() {
        let slab = Slab::new(dec!(300000), Some(dec!(700000)), dec!(5));

        assert_eq!(slab.portion_of(dec!(575000)), dec!(275000));
    }

    #[test]
    fn unbounded_slab_takes_everything_above_min() {
        let slab = Slab::new(dec!(1500000), None, dec!(30));

        assert!(slab.is_unbounded());
        assert_eq!(slab.portion_of(dec!(2000000)), dec!(500000));
    }
}
