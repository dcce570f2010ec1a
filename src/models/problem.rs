//! Immutable PDPTW problem instance.

use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};

use super::{Call, Vehicle};

/// An immutable PDPTW instance.
///
/// Holds the calls, the vehicles, the vehicle-call compatibility table, and
/// the travel/handling matrices. All matrices are stored as flat row-major
/// vectors behind accessor methods; shapes and index ranges are validated
/// once in [`Problem::new`], so the evaluators index without further checks
/// (debug builds still assert bounds).
///
/// The instance is read-only after construction and can be shared freely
/// across concurrent evaluations of different solutions.
///
/// # Examples
///
/// ```
/// use pdp_eval::models::{Call, Problem, TimeWindow, Vehicle};
///
/// // 2 nodes, 1 vehicle at node 0, 1 call from node 0 to node 1.
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
/// assert_eq!(problem.num_calls(), 1);
/// assert_eq!(problem.travel_time(0, 0, 1), 10.0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Problem {
    num_nodes: usize,
    vehicles: Vec<Vehicle>,
    calls: Vec<Call>,
    /// `num_vehicles x num_calls`, row-major.
    compatible: Vec<bool>,
    /// `num_vehicles x num_nodes x num_nodes`, row-major.
    travel_time: Vec<f64>,
    travel_cost: Vec<f64>,
    /// `num_vehicles x num_nodes`; home-node leg, start time already added
    /// into the time variant.
    first_travel_time: Vec<f64>,
    first_travel_cost: Vec<f64>,
    /// `num_vehicles x num_calls`.
    loading_time: Vec<f64>,
    unloading_time: Vec<f64>,
    /// Combined pickup+delivery handling cost per `(vehicle, call)`.
    port_cost: Vec<f64>,
}

impl Problem {
    /// Creates a problem instance, validating every matrix shape and index
    /// range.
    ///
    /// Returns an error naming the violated precondition if any dimension
    /// does not match or a node index is out of range.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        num_nodes: usize,
        vehicles: Vec<Vehicle>,
        calls: Vec<Call>,
        compatible: Vec<bool>,
        travel_time: Vec<f64>,
        travel_cost: Vec<f64>,
        first_travel_time: Vec<f64>,
        first_travel_cost: Vec<f64>,
        loading_time: Vec<f64>,
        unloading_time: Vec<f64>,
        port_cost: Vec<f64>,
    ) -> Result<Self> {
        ensure!(num_nodes > 0, "instance has no nodes");
        ensure!(!vehicles.is_empty(), "instance has no vehicles");
        ensure!(!calls.is_empty(), "instance has no calls");

        let nv = vehicles.len();
        let nc = calls.len();
        let nn = num_nodes;

        for (v, vehicle) in vehicles.iter().enumerate() {
            ensure!(
                vehicle.home_node() < nn,
                "vehicle {}: home node {} out of range (num_nodes = {})",
                v + 1,
                vehicle.home_node(),
                nn
            );
        }
        for (c, call) in calls.iter().enumerate() {
            ensure!(
                call.origin() < nn && call.destination() < nn,
                "call {}: node out of range (num_nodes = {})",
                c + 1,
                nn
            );
        }

        ensure!(
            compatible.len() == nv * nc,
            "compatibility table has {} entries, expected {}",
            compatible.len(),
            nv * nc
        );
        ensure!(
            travel_time.len() == nv * nn * nn,
            "travel time matrix has {} entries, expected {}",
            travel_time.len(),
            nv * nn * nn
        );
        ensure!(
            travel_cost.len() == nv * nn * nn,
            "travel cost matrix has {} entries, expected {}",
            travel_cost.len(),
            nv * nn * nn
        );
        ensure!(
            first_travel_time.len() == nv * nn,
            "first travel time matrix has {} entries, expected {}",
            first_travel_time.len(),
            nv * nn
        );
        ensure!(
            first_travel_cost.len() == nv * nn,
            "first travel cost matrix has {} entries, expected {}",
            first_travel_cost.len(),
            nv * nn
        );
        ensure!(
            loading_time.len() == nv * nc,
            "loading time matrix has {} entries, expected {}",
            loading_time.len(),
            nv * nc
        );
        ensure!(
            unloading_time.len() == nv * nc,
            "unloading time matrix has {} entries, expected {}",
            unloading_time.len(),
            nv * nc
        );
        ensure!(
            port_cost.len() == nv * nc,
            "port cost matrix has {} entries, expected {}",
            port_cost.len(),
            nv * nc
        );

        Ok(Self {
            num_nodes,
            vehicles,
            calls,
            compatible,
            travel_time,
            travel_cost,
            first_travel_time,
            first_travel_cost,
            loading_time,
            unloading_time,
            port_cost,
        })
    }

    /// Number of nodes (ports).
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    /// Number of vehicles.
    pub fn num_vehicles(&self) -> usize {
        self.vehicles.len()
    }

    /// Number of calls.
    pub fn num_calls(&self) -> usize {
        self.calls.len()
    }

    /// All calls, indexed 0-based.
    pub fn calls(&self) -> &[Call] {
        &self.calls
    }

    /// All vehicles, indexed 0-based.
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// The call with 0-based index `c`.
    pub fn call(&self, c: usize) -> &Call {
        &self.calls[c]
    }

    /// The vehicle with 0-based index `v`.
    pub fn vehicle(&self, v: usize) -> &Vehicle {
        &self.vehicles[v]
    }

    /// Whether vehicle `v` may carry call `c`.
    pub fn compatible(&self, v: usize, c: usize) -> bool {
        debug_assert!(v < self.num_vehicles() && c < self.num_calls());
        self.compatible[v * self.num_calls() + c]
    }

    /// Travel time for vehicle `v` from node `i` to node `j`.
    pub fn travel_time(&self, v: usize, i: usize, j: usize) -> f64 {
        debug_assert!(v < self.num_vehicles() && i < self.num_nodes && j < self.num_nodes);
        self.travel_time[(v * self.num_nodes + i) * self.num_nodes + j]
    }

    /// Travel cost for vehicle `v` from node `i` to node `j`.
    pub fn travel_cost(&self, v: usize, i: usize, j: usize) -> f64 {
        debug_assert!(v < self.num_vehicles() && i < self.num_nodes && j < self.num_nodes);
        self.travel_cost[(v * self.num_nodes + i) * self.num_nodes + j]
    }

    /// Time for vehicle `v` to reach node `j` from its home node, including
    /// the vehicle's start time.
    pub fn first_travel_time(&self, v: usize, j: usize) -> f64 {
        debug_assert!(v < self.num_vehicles() && j < self.num_nodes);
        self.first_travel_time[v * self.num_nodes + j]
    }

    /// Cost for vehicle `v` to reach node `j` from its home node.
    pub fn first_travel_cost(&self, v: usize, j: usize) -> f64 {
        debug_assert!(v < self.num_vehicles() && j < self.num_nodes);
        self.first_travel_cost[v * self.num_nodes + j]
    }

    /// Pickup handling time for call `c` on vehicle `v`.
    pub fn loading_time(&self, v: usize, c: usize) -> f64 {
        debug_assert!(v < self.num_vehicles() && c < self.num_calls());
        self.loading_time[v * self.num_calls() + c]
    }

    /// Delivery handling time for call `c` on vehicle `v`.
    pub fn unloading_time(&self, v: usize, c: usize) -> f64 {
        debug_assert!(v < self.num_vehicles() && c < self.num_calls());
        self.unloading_time[v * self.num_calls() + c]
    }

    /// Combined pickup+delivery handling cost for call `c` on vehicle `v`.
    pub fn port_cost(&self, v: usize, c: usize) -> f64 {
        debug_assert!(v < self.num_vehicles() && c < self.num_calls());
        self.port_cost[v * self.num_calls() + c]
    }
}
