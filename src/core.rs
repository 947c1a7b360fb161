pub mod error;
pub mod forecast;
pub mod month;
pub mod schedule;
pub mod tariff;
