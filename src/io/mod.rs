//! Problem-file input.
//!
//! Reads the line-oriented, `%`-commented text format and materializes the
//! matrices the evaluators consume, including the precomputed home-node
//! legs (`first_travel_time`/`first_travel_cost`) and the combined per-call
//! port cost.

mod parse;

pub use parse::{load_problem, parse_problem};
