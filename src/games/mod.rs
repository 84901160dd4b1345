//! Game implementations of `RulesEngine`.

pub mod big_two;

pub use big_two::BigTwo;
