//! Presentation layers stacked around the game board

pub mod hud;
pub mod starfield;
pub mod title;

pub use hud::{GamePoints, Lives};
pub use starfield::StarField;
pub use title::TitleScreen;
