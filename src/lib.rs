//! # pdp-eval
//!
//! Evaluation oracle for pickup-and-delivery problems with time windows
//! (PDPTW): given an immutable problem instance and a flat solution
//! encoding, decides feasibility and computes total cost. Designed to be
//! called millions of times by an outer search procedure, which this crate
//! deliberately does not provide.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Call, TimeWindow, Vehicle, Problem, Solution)
//! - [`decode`] — Route decoding: sentinel splitting and pickup/delivery parity
//! - [`evaluation`] — Feasibility checking and cost evaluation
//! - [`io`] — Problem-file parser for the `%`-commented text format
//!
//! ## Solution encoding
//!
//! A solution is a flat sequence of 1-based call indices. `0` separates one
//! vehicle's route from the next; the segment after the last sentinel holds
//! the calls left unserved (the final sentinel is implicit). Each call index
//! appears exactly twice within its segment: the first occurrence is its
//! pickup, the second its delivery.

pub mod decode;
pub mod evaluation;
pub mod io;
pub mod models;
