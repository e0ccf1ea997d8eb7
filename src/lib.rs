pub mod action;
pub mod bot;
pub mod error;
pub mod input;
pub mod scenario;
pub mod strategy;
pub mod vec2;
pub mod world;

pub use action::*;
pub use bot::*;
pub use error::*;
pub use input::*;
pub use strategy::*;
pub use vec2::*;
pub use world::*;
