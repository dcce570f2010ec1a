//! Feasibility checking and cost evaluation.
//!
//! Both entry points are pure functions of `(problem, solution)`: they
//! decode the routes fresh on every call, share no state, and can run
//! concurrently against the same [`Problem`](crate::models::Problem).

mod cost;
mod feasibility;

pub use cost::solution_cost;
pub use feasibility::{check_feasibility, Feasibility};
