pub mod item;
pub mod sightseeing;

pub use item::Item;
pub use sightseeing::{Sightseeing, SightseeingCategory};
