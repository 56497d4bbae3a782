//! Online A* planner that picks Pac-Man's next move every tick.

pub mod agent;
pub mod config;
pub mod console_interface;
pub mod core;
pub mod error;
pub mod levels;
pub mod models;
pub mod search;

#[cfg(test)]
mod test;
