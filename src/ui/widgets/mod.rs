pub mod backdrop;
pub mod current;
pub mod daily;
pub mod hourly;
pub mod menu;
pub mod pins;
pub mod search;
mod shared;
