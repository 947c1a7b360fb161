use crate::quantity::{currency::Pence, energy::KilowattHours, time::Days};

quantity!(
    /// Unit price.
    PencePerKilowattHour, via: f64, suffix: "p/kWh", precision: 2
);

quantity!(
    /// Standing charge, payable every day regardless of the usage.
    PencePerDay, via: f64, suffix: "p/day", precision: 2
);

implement_mul!(PencePerKilowattHour, KilowattHours, Pence);
implement_mul!(PencePerDay, Days, Pence);
