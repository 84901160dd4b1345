//! Hand categories, classification and comparison.
//!
//! ## Key Types
//!
//! - `HandCategory`: the closed set of eight combination shapes
//! - `Hand`: a classified, immutable combination owned by one seat
//! - `classify`: the only way to build a `Hand`
//! - `Hand::beats`: the comparator used by the turn engine

pub mod category;
pub mod classify;
pub mod compare;
pub mod hand;

pub use category::HandCategory;
pub use classify::{category_of, classify};
pub use hand::{grouped_top_card, Hand, HandCards};
