//! Ports - boundaries between the solver core and whoever picks moves

pub mod selector;

pub use selector::MoveSelector;
