//! Card-pattern rule engine. Keep this crate free of IO and platform concerns.

pub mod cards;
pub mod catalog;
pub mod config;
pub mod deck;
pub mod events;
pub mod goal;
pub mod pattern;
pub mod rng;
pub mod scoring;
pub mod selection;
pub mod state;

pub use cards::*;
pub use catalog::*;
pub use config::*;
pub use deck::*;
pub use events::*;
pub use goal::*;
pub use pattern::*;
pub use rng::*;
pub use scoring::*;
pub use selection::*;
pub use state::*;
