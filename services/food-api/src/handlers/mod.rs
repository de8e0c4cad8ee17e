//! HTTP handlers

pub mod docs;
pub mod foods;
pub mod stats;

pub use docs::{docs, welcome};
pub use foods::{foods_by_category, get_food, list_foods, random_food};
pub use stats::stats;
