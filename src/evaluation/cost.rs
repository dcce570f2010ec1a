//! Cost evaluator.

use crate::decode::{decode_events, split_segments};
use crate::models::{Problem, Solution};

/// Computes the total monetary cost of a solution.
///
/// The total is the sum of three parts:
///
/// - penalty cost for every call in the unserved segment,
/// - travel cost per vehicle: the home-node leg to the first event's
///   origin plus the legs between consecutive decoded events,
/// - port handling cost per vehicle.
///
/// Each call occurs twice in its segment and both the penalty and the
/// combined `port_cost` are per call, not per occurrence, so those two
/// sums are halved.
///
/// The node sequence for the travel legs comes from the same sort/parity
/// decoding the feasibility checker uses, keeping the two evaluators in
/// exact agreement.
///
/// # Examples
///
/// ```
/// use pdp_eval::evaluation::solution_cost;
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
///     vec![5.0, 30.0],
///     vec![0.0],
///     vec![0.0],
///     vec![20.0],
/// )
/// .unwrap();
///
/// // Home leg to node 0 costs 5, node 0 -> node 1 costs 30, port cost 20.
/// let served = Solution::new(vec![1, 1, 0], &problem).unwrap();
/// assert_eq!(solution_cost(&problem, &served), 5.0 + 30.0 + 20.0);
///
/// // Unserved: just the penalty.
/// let unserved = Solution::new(vec![0, 1, 1], &problem).unwrap();
/// assert_eq!(solution_cost(&problem, &unserved), 100.0);
/// ```
pub fn solution_cost(problem: &Problem, solution: &Solution) -> f64 {
    let num_vehicles = problem.num_vehicles();
    let segments = split_segments(solution.flat(), num_vehicles);

    // Both occurrences of an unserved call carry its penalty, so halve.
    let not_transport_cost: f64 = segments[num_vehicles]
        .iter()
        .map(|&id| problem.call(id - 1).penalty())
        .sum::<f64>()
        / 2.0;

    let mut total_cost = not_transport_cost;
    for vehicle in 0..num_vehicles {
        let segment = segments[vehicle];
        if segment.is_empty() {
            continue;
        }
        let events = decode_events(segment);

        let mut route_travel_cost = problem.first_travel_cost(vehicle, events[0].node(problem));
        for pair in events.windows(2) {
            route_travel_cost +=
                problem.travel_cost(vehicle, pair[0].node(problem), pair[1].node(problem));
        }

        // port_cost is the combined pickup+delivery cost, summed once per
        // occurrence, so halve.
        let cost_in_ports: f64 = segment
            .iter()
            .map(|&id| problem.port_cost(vehicle, id - 1))
            .sum::<f64>()
            / 2.0;

        total_cost += route_travel_cost + cost_in_ports;
    }

    total_cost
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Call, TimeWindow, Vehicle};

    fn wide_window() -> TimeWindow {
        TimeWindow::new(0.0, 1_000.0).expect("valid")
    }

    /// 3 nodes, 1 vehicle, 2 calls. Travel cost between distinct nodes i, j
    /// is `10 * (i + 1) + (j + 1)`; home legs cost 1 per target node index.
    fn two_call_problem() -> Problem {
        let n = 3;
        let mut travel_cost = vec![0.0; n * n];
        for i in 0..n {
            for j in 0..n {
                if i != j {
                    travel_cost[i * n + j] = 10.0 * (i + 1) as f64 + (j + 1) as f64;
                }
            }
        }
        Problem::new(
            n,
            vec![Vehicle::new(0, 0.0, 100.0)],
            vec![
                Call::new(0, 1, 5.0, 400.0, wide_window(), wide_window()),
                Call::new(1, 2, 5.0, 600.0, wide_window(), wide_window()),
            ],
            vec![true; 2],
            vec![0.0; n * n],
            travel_cost,
            vec![0.0; n],
            vec![0.0, 1.0, 2.0],
            vec![0.0; 2],
            vec![0.0; 2],
            vec![100.0, 200.0],
        )
        .expect("valid problem")
    }

    #[test]
    fn test_fully_unserved_costs_sum_of_penalties() {
        let p = two_call_problem();
        let s = Solution::new(vec![0, 1, 1, 2, 2], &p).expect("valid");
        assert!((solution_cost(&p, &s) - 1_000.0).abs() < 1e-10);
    }

    #[test]
    fn test_single_route_cost() {
        let p = two_call_problem();
        // Route: pickup 1 (node 0), deliver 1 (node 1). Home leg to node 0
        // costs 0, leg 0->1 costs 12, port cost 100. Call 2 unserved: 600.
        let s = Solution::new(vec![1, 1, 0, 2, 2], &p).expect("valid");
        assert!((solution_cost(&p, &s) - (12.0 + 100.0 + 600.0)).abs() < 1e-10);
    }

    #[test]
    fn test_route_cost_follows_decoded_node_order() {
        let p = two_call_problem();
        // Interleaved: nodes 0 (pickup 1), 1 (pickup 2), 1 (deliver 1),
        // 2 (deliver 2). Legs: home->0 = 0, 0->1 = 12, 1->1 = 0, 1->2 = 23.
        // Ports: (100 + 200 + 100 + 200) / 2 = 300.
        let s = Solution::new(vec![1, 2, 1, 2, 0], &p).expect("valid");
        assert!((solution_cost(&p, &s) - (12.0 + 23.0 + 300.0)).abs() < 1e-10);
    }

    #[test]
    fn test_first_leg_uses_first_event_origin() {
        let p = two_call_problem();
        // Route starts with call 2, whose origin is node 1: home leg costs 1.
        // Legs 1->2 = 23. Ports 200. Call 1 unserved: 400.
        let s = Solution::new(vec![2, 2, 0, 1, 1], &p).expect("valid");
        assert!((solution_cost(&p, &s) - (1.0 + 23.0 + 200.0 + 400.0)).abs() < 1e-10);
    }

    #[test]
    fn test_serving_a_call_replaces_its_penalty() {
        let p = two_call_problem();
        let all_unserved = Solution::new(vec![0, 1, 1, 2, 2], &p).expect("valid");
        let one_served = Solution::new(vec![2, 2, 0, 1, 1], &p).expect("valid");
        // Serving call 2 replaces its 600 penalty with 1 + 23 + 200.
        let diff = solution_cost(&p, &all_unserved) - solution_cost(&p, &one_served);
        assert!((diff - (600.0 - 224.0)).abs() < 1e-10);
    }

    #[test]
    fn test_cost_idempotent() {
        let p = two_call_problem();
        let s = Solution::new(vec![1, 2, 1, 2, 0], &p).expect("valid");
        assert_eq!(solution_cost(&p, &s), solution_cost(&p, &s));
    }
}
