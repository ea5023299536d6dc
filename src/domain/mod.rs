pub mod normalize;
pub mod view_model;
pub mod weather;
