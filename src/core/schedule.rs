use std::{
    array,
    ops::{Mul, RangeInclusive},
};

use serde::Serialize;

use crate::core::{
    error::{TariffError, ensure_within},
    month::{MONTHS_PER_YEAR, Monthly},
};

/// Number of price cap reviews in a year.
pub const N_REVIEWS: usize = 4;

/// Months between two consecutive reviews.
pub const REVIEW_INTERVAL: usize = 3;

/// Quarterly multiplicative adjustments of the unit prices.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PriceCapSchedule([f64; N_REVIEWS]);

impl PriceCapSchedule {
    pub const FACTOR_RANGE: RangeInclusive<f64> = 0.0..=2.0;

    pub const FLAT: Self = Self([1.0; N_REVIEWS]);

    pub const fn factors(&self) -> [f64; N_REVIEWS] {
        self.0
    }

    /// Per-review multipliers: review `i` scales every month starting from `delay + 3i`.
    ///
    /// A review starting past the last month is all ones.
    pub fn steps(self, delay: PriceCapDelay) -> impl Iterator<Item = Monthly<f64>> {
        self.0.into_iter().enumerate().map(move |(index, factor)| {
            let start = delay.0 + REVIEW_INTERVAL * index;
            array::from_fn(|month| if month >= start { factor } else { 1.0 })
        })
    }

    /// Running product of all the review steps.
    pub fn cumulative_multipliers(self, delay: PriceCapDelay) -> Monthly<f64> {
        self.project(1.0, delay)
    }

    /// Scale the base price month by month, applying the reviews in order.
    ///
    /// Every month ends up as `base * f0 * f1 * …` multiplied left to right,
    /// so the reviews compound and are never reverted.
    pub fn project<T>(self, base: T, delay: PriceCapDelay) -> Monthly<T>
    where
        T: Copy + Mul<f64, Output = T>,
    {
        self.steps(delay).fold([base; MONTHS_PER_YEAR], |prices, step| {
            array::from_fn(|month| prices[month] * step[month])
        })
    }
}

impl TryFrom<&[f64]> for PriceCapSchedule {
    type Error = TariffError;

    fn try_from(factors: &[f64]) -> Result<Self, Self::Error> {
        let factors: [f64; N_REVIEWS] = factors.try_into().map_err(|_| {
            TariffError::InvalidConfiguration(format!(
                "the price cap schedule must have exactly {N_REVIEWS} factors, got {}",
                factors.len()
            ))
        })?;
        for factor in factors {
            ensure_within(
                "price cap factor",
                factor,
                &Self::FACTOR_RANGE,
                TariffError::InvalidConfiguration,
            )?;
        }
        Ok(Self(factors))
    }
}

/// Delay in months before the first price cap review takes effect.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PriceCapDelay(usize);

impl PriceCapDelay {
    pub const MAX: usize = MONTHS_PER_YEAR - 1;

    pub fn try_new(months: usize) -> Result<Self, TariffError> {
        if months <= Self::MAX {
            Ok(Self(months))
        } else {
            Err(TariffError::InvalidConfiguration(format!(
                "the price cap delay must be within 0..={}, got {months}",
                Self::MAX
            )))
        }
    }

    pub const fn months(self) -> usize {
        self.0
    }
}
