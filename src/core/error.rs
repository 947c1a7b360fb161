use std::ops::RangeInclusive;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TariffError {
    #[error("invalid tariff configuration: {0}")]
    InvalidConfiguration(String),

    #[error("the period must be at least one day long")]
    InvalidPeriod,

    #[error("invalid usage: {0}")]
    InvalidUsage(String),
}

/// Check that `value` lies within `range`, `NaN` never does.
pub fn ensure_within(
    what: &str,
    value: f64,
    range: &RangeInclusive<f64>,
    error: fn(String) -> TariffError,
) -> Result<(), TariffError> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(error(format!(
            "{what} must be within {}..={}, got {value}",
            range.start(),
            range.end()
        )))
    }
}
