//! Domain model types for PDPTW evaluation.
//!
//! Provides the core abstractions: calls (pickup+delivery pairs with time
//! windows), vehicles with capacity and a home node, the immutable problem
//! instance with its travel and handling matrices, and the flat solution
//! encoding.

mod call;
mod problem;
mod solution;
mod vehicle;

pub use call::{Call, TimeWindow};
pub use problem::Problem;
pub use solution::Solution;
pub use vehicle::Vehicle;
