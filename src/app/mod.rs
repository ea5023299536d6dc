pub mod events;
pub mod pins;
pub mod scene;
pub mod state;
