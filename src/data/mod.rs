pub mod flag;
pub mod forecast;
pub mod geocode;
pub mod lookup;
