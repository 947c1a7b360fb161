use std::{array, ops::Add};

use chrono::Month;

pub const MONTHS_PER_YEAR: usize = 12;

/// One value per forecast month, index `0` being the first month.
pub type Monthly<T> = [T; MONTHS_PER_YEAR];

/// Calendar months of the forecast year starting with `first`.
pub fn calendar(first: Month) -> Monthly<Month> {
    let mut month = first;
    array::from_fn(|_| {
        let current = month;
        month = month.succ();
        current
    })
}

/// Sum of the monthly values.
///
/// The first eight months are added pairwise in a tree and the remaining four one by one,
/// which keeps the totals identical to the vectorised pairwise summation down to the last bit.
pub fn total<T: Copy + Add<Output = T>>(values: &Monthly<T>) -> T {
    let [m0, m1, m2, m3, m4, m5, m6, m7, m8, m9, m10, m11] = *values;
    ((m0 + m1) + (m2 + m3)) + ((m4 + m5) + (m6 + m7)) + m8 + m9 + m10 + m11
}

/// Three-letter month name, for example `Jan`.
pub fn abbreviation(month: Month) -> &'static str {
    &month.name()[..3]
}
