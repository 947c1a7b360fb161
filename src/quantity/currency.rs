quantity!(
    /// Minor currency unit, the unit all tariff prices are quoted in.
    Pence, via: f64, suffix: "p", precision: 2
);

quantity!(
    /// Major currency unit.
    Pounds, via: f64, prefix: "£", precision: 2
);

impl Pence {
    pub fn to_pounds(self) -> Pounds {
        Pounds(self.0 / 100.0)
    }
}

impl Pounds {
    /// Round to whole pennies, ties to even.
    pub fn round_to_pennies(self) -> Self {
        Self((self.0 * 100.0).round_ties_even() / 100.0)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_to_pounds() {
        assert_abs_diff_eq!(Pence(1234.0).to_pounds().0, 12.34);
    }

    #[test]
    fn test_round_to_pennies() {
        assert_abs_diff_eq!(Pounds(12.344_9).round_to_pennies().0, 12.34);
        assert_abs_diff_eq!(Pounds(12.345_1).round_to_pennies().0, 12.35);
        assert_abs_diff_eq!(Pounds(-0.004).round_to_pennies().0, 0.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Pounds(1.5).to_string(), "£1.50");
        assert_eq!(Pounds(-0.25).to_string(), "-£0.25");
        assert_eq!(Pence(29.111).to_string(), "29.11 p");
    }
}
