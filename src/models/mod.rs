//! Core data models: normalised input records and derived views.

mod draft;
mod ids;
mod matchup;
mod owner;
mod record;
mod roster;
mod season;
mod store;
mod views;

pub use draft::*;
pub use ids::*;
pub use matchup::*;
pub use owner::*;
pub use record::*;
pub use roster::*;
pub use season::*;
pub use store::*;
pub use views::*;
