quantity!(Days, via: f64, suffix: "days", precision: 3);

impl Days {
    pub const ONE: Self = Self(1.0);

    /// Average month length, 365.25 / 12 rounded to three places.
    pub const AVERAGE_MONTH: Self = Self(30.437);
}
