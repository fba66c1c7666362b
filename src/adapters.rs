//! Adapters implementing the ports

pub mod selectors;

pub use selectors::{MinimaxSelector, RandomSelector};
