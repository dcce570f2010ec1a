//! Vehicle type.

use serde::{Deserialize, Serialize};

/// A vehicle (vessel) that serves calls.
///
/// Every vehicle starts at its home node at its start time and may carry at
/// most `capacity` load units at once. The home-node leg is precomputed in
/// [`Problem`](super::Problem) as `first_travel_time`/`first_travel_cost`,
/// so the home node itself never appears in a decoded route.
///
/// # Examples
///
/// ```
/// use pdp_eval::models::Vehicle;
///
/// let v = Vehicle::new(3, 120.0, 200.0);
/// assert_eq!(v.home_node(), 3);
/// assert_eq!(v.start_time(), 120.0);
/// assert_eq!(v.capacity(), 200.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    home_node: usize,
    start_time: f64,
    capacity: f64,
}

impl Vehicle {
    /// Creates a vehicle with the given home node (0-based), start time,
    /// and capacity.
    pub fn new(home_node: usize, start_time: f64, capacity: f64) -> Self {
        Self {
            home_node,
            start_time,
            capacity,
        }
    }

    /// Home node (0-based) where the vehicle starts.
    pub fn home_node(&self) -> usize {
        self.home_node
    }

    /// Time at which the vehicle becomes available.
    pub fn start_time(&self) -> f64 {
        self.start_time
    }

    /// Maximum load the vehicle may carry at once.
    pub fn capacity(&self) -> f64 {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_new() {
        let v = Vehicle::new(0, 0.0, 50.0);
        assert_eq!(v.home_node(), 0);
        assert_eq!(v.start_time(), 0.0);
        assert_eq!(v.capacity(), 50.0);
    }
}
