//! Path oracle implementations.
mod astar;

pub use astar::AstarOracle;
