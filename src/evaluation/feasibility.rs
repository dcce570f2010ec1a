//! Feasibility checker.

use std::fmt;

use crate::decode::{decode_events, split_segments};
use crate::models::{Problem, Solution};

/// Verdict of a feasibility check.
///
/// `Display` renders the fixed reason strings that solver-facing callers
/// match on: `"Feasible"`, `"incompatible vessel and cargo"`,
/// `"Capacity exceeded"`, and `"Time window exceeded at call {index}"`
/// (the index is the zero-based event position within the failing
/// vehicle's route).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feasibility {
    /// Every vehicle's route satisfies all constraints.
    Feasible,
    /// A route contains a call the vehicle may not carry.
    IncompatibleCargo {
        /// Failing vehicle index.
        vehicle: usize,
    },
    /// A route's running load exceeds the vehicle's capacity.
    CapacityExceeded {
        /// Failing vehicle index.
        vehicle: usize,
    },
    /// An event cannot be reached before its time window closes.
    TimeWindowExceeded {
        /// Failing vehicle index.
        vehicle: usize,
        /// Zero-based event position within the vehicle's route.
        position: usize,
    },
}

impl Feasibility {
    /// Whether the solution is feasible.
    pub fn is_feasible(&self) -> bool {
        matches!(self, Feasibility::Feasible)
    }

    /// The human-readable reason string.
    pub fn reason(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Feasibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Feasibility::Feasible => write!(f, "Feasible"),
            Feasibility::IncompatibleCargo { .. } => write!(f, "incompatible vessel and cargo"),
            Feasibility::CapacityExceeded { .. } => write!(f, "Capacity exceeded"),
            Feasibility::TimeWindowExceeded { position, .. } => {
                write!(f, "Time window exceeded at call {}", position)
            }
        }
    }
}

/// Checks a solution against compatibility, capacity, and time window
/// constraints.
///
/// Vehicles are checked in ascending index order and evaluation stops at
/// the first violation, so at most one failing vehicle is ever reported.
/// Empty routes are skipped; the unserved segment is not constrained.
///
/// # Examples
///
/// ```
/// use pdp_eval::evaluation::check_feasibility;
/// use pdp_eval::models::{Call, Problem, Solution, TimeWindow, Vehicle};
///
/// let problem = Problem::new(
///     2,
///     vec![Vehicle::new(0, 0.0, 10.0)],
///     vec![Call::new(
///         0,
///         1,
///         5.0,
///         100.0,
///         TimeWindow::new(0.0, 100.0).unwrap(),
///         TimeWindow::new(0.0, 200.0).unwrap(),
///     )],
///     vec![true],
///     vec![0.0, 10.0, 10.0, 0.0],
///     vec![0.0, 30.0, 30.0, 0.0],
///     vec![0.0, 10.0],
///     vec![0.0, 30.0],
///     vec![0.0],
///     vec![0.0],
///     vec![20.0],
/// )
/// .unwrap();
/// let solution = Solution::new(vec![1, 1, 0], &problem).unwrap();
///
/// let verdict = check_feasibility(&problem, &solution);
/// assert!(verdict.is_feasible());
/// assert_eq!(verdict.reason(), "Feasible");
/// ```
pub fn check_feasibility(problem: &Problem, solution: &Solution) -> Feasibility {
    let segments = split_segments(solution.flat(), problem.num_vehicles());

    for vehicle in 0..problem.num_vehicles() {
        let segment = segments[vehicle];
        if segment.is_empty() {
            continue;
        }

        if segment.iter().any(|&id| !problem.compatible(vehicle, id - 1)) {
            return Feasibility::IncompatibleCargo { vehicle };
        }

        let events = decode_events(segment);

        let capacity = problem.vehicle(vehicle).capacity();
        let mut load = 0.0;
        for event in &events {
            load += event.load_delta(problem);
            if load > capacity {
                return Feasibility::CapacityExceeded { vehicle };
            }
        }

        // Forward time simulation. The first leg's travel time already
        // includes the vehicle's start time offset.
        let mut current_time = 0.0;
        let mut prev_node = 0;
        for (position, event) in events.iter().enumerate() {
            let node = event.node(problem);
            let travel = if position == 0 {
                problem.first_travel_time(vehicle, node)
            } else {
                problem.travel_time(vehicle, prev_node, node)
            };
            let window = event.window(problem);
            let arrival = (current_time + travel).max(window.earliest());
            if window.is_violated(arrival) {
                return Feasibility::TimeWindowExceeded { vehicle, position };
            }
            current_time = arrival + event.handling_time(problem, vehicle);
            prev_node = node;
        }
    }

    Feasibility::Feasible
}
