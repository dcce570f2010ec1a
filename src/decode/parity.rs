//! Sentinel splitting and pickup/delivery parity decoding.
//!
//! # Algorithm
//!
//! Stable-sort the segment positions by call value. Because every call
//! appears exactly twice in its segment, the two occurrences of each call
//! end up in adjacent sorted slots `2k` and `2k + 1`, with stability
//! placing the earlier original position first. Even sorted rank therefore
//! means pickup, odd means delivery. Writing the decoded kind back through
//! the position index inverts the permutation, so the result is in original
//! route order.

use crate::models::{Problem, TimeWindow};

/// Whether a route event picks cargo up or sets it down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Pickup,
    Delivery,
}

/// One decoded stop in a vehicle's route.
///
/// Holds the 0-based call index and the recovered role; the node, time
/// window, and handling time follow from the role via the problem instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEvent {
    /// Call index, 0-based.
    pub call: usize,
    /// Pickup or delivery.
    pub kind: EventKind,
}

impl RouteEvent {
    /// The node visited by this event: the call's origin for a pickup, its
    /// destination for a delivery.
    pub fn node(&self, problem: &Problem) -> usize {
        let call = problem.call(self.call);
        match self.kind {
            EventKind::Pickup => call.origin(),
            EventKind::Delivery => call.destination(),
        }
    }

    /// The time window constraining this event's arrival.
    pub fn window<'a>(&self, problem: &'a Problem) -> &'a TimeWindow {
        let call = problem.call(self.call);
        match self.kind {
            EventKind::Pickup => call.pickup_window(),
            EventKind::Delivery => call.delivery_window(),
        }
    }

    /// Port handling time for this event on the given vehicle.
    pub fn handling_time(&self, problem: &Problem, vehicle: usize) -> f64 {
        match self.kind {
            EventKind::Pickup => problem.loading_time(vehicle, self.call),
            EventKind::Delivery => problem.unloading_time(vehicle, self.call),
        }
    }

    /// Change in vehicle load caused by this event.
    pub fn load_delta(&self, problem: &Problem) -> f64 {
        let size = problem.call(self.call).size();
        match self.kind {
            EventKind::Pickup => size,
            EventKind::Delivery => -size,
        }
    }
}

/// Splits the flat encoding into `num_vehicles + 1` segments.
///
/// Segments `0..num_vehicles` are the vehicle routes in order; the last
/// segment holds the unserved calls. The final sentinel is implicit, so
/// the input must contain exactly `num_vehicles` zeros (guaranteed for a
/// validated [`Solution`](crate::models::Solution)).
///
/// # Examples
///
/// ```
/// use pdp_eval::decode::split_segments;
///
/// let segments = split_segments(&[3, 3, 0, 1, 2, 1, 2, 0, 4, 4], 2);
/// assert_eq!(segments, vec![&[3, 3][..], &[1, 2, 1, 2][..], &[4, 4][..]]);
/// ```
pub fn split_segments(flat: &[usize], num_vehicles: usize) -> Vec<&[usize]> {
    let segments: Vec<&[usize]> = flat.split(|&x| x == 0).collect();
    debug_assert_eq!(segments.len(), num_vehicles + 1);
    segments
}

/// Decodes one vehicle segment into ordered pickup/delivery events.
///
/// The input holds 1-based call indices; the output is in the same order
/// with 0-based call indices and the recovered event kinds.
///
/// # Examples
///
/// ```
/// use pdp_eval::decode::{decode_events, EventKind};
///
/// let events = decode_events(&[2, 1, 2, 1]);
/// assert_eq!(events[0].call, 1);
/// assert_eq!(events[0].kind, EventKind::Pickup);
/// assert_eq!(events[2].call, 1);
/// assert_eq!(events[2].kind, EventKind::Delivery);
/// ```
pub fn decode_events(segment: &[usize]) -> Vec<RouteEvent> {
    let mut order: Vec<usize> = (0..segment.len()).collect();
    order.sort_by_key(|&p| segment[p]); // stable

    let mut events = vec![
        RouteEvent {
            call: 0,
            kind: EventKind::Pickup,
        };
        segment.len()
    ];
    for (rank, &pos) in order.iter().enumerate() {
        events[pos] = RouteEvent {
            call: segment[pos] - 1,
            kind: if rank % 2 == 0 {
                EventKind::Pickup
            } else {
                EventKind::Delivery
            },
        };
    }
    events
}
