//! Call (transportation request) and time window types.

use serde::{Deserialize, Serialize};

/// A time window constraint on a pickup or delivery event.
///
/// The vehicle must arrive no later than `latest` and may arrive as early
/// as `earliest` (waiting is allowed if early).
///
/// # Examples
///
/// ```
/// use pdp_eval::models::TimeWindow;
///
/// let tw = TimeWindow::new(100.0, 200.0).unwrap();
/// assert!(tw.earliest() <= tw.latest());
/// assert!(!tw.is_violated(150.0));
/// assert!(tw.is_violated(250.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeWindow {
    earliest: f64,
    latest: f64,
}

impl TimeWindow {
    /// Creates a new time window.
    ///
    /// Returns `None` if `earliest > latest` or either value is non-finite.
    pub fn new(earliest: f64, latest: f64) -> Option<Self> {
        if !earliest.is_finite() || !latest.is_finite() || earliest > latest {
            return None;
        }
        Some(Self { earliest, latest })
    }

    /// Earliest allowable arrival time.
    pub fn earliest(&self) -> f64 {
        self.earliest
    }

    /// Latest allowable arrival time.
    pub fn latest(&self) -> f64 {
        self.latest
    }

    /// Returns `true` if arriving at the given time violates this window.
    ///
    /// Arriving early is not a violation (the vehicle waits).
    pub fn is_violated(&self, arrival: f64) -> bool {
        arrival > self.latest
    }
}

/// A transportation call: one pickup and one delivery.
///
/// Cargo of `size` load units must be picked up at `origin` within the
/// pickup window and delivered at `destination` within the delivery window.
/// Leaving the call unserved costs `penalty`.
///
/// Node indices are 0-based.
///
/// # Examples
///
/// ```
/// use pdp_eval::models::{Call, TimeWindow};
///
/// let c = Call::new(
///     0,
///     1,
///     5.0,
///     100.0,
///     TimeWindow::new(0.0, 100.0).unwrap(),
///     TimeWindow::new(0.0, 200.0).unwrap(),
/// );
/// assert_eq!(c.origin(), 0);
/// assert_eq!(c.destination(), 1);
/// assert_eq!(c.size(), 5.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Call {
    origin: usize,
    destination: usize,
    size: f64,
    penalty: f64,
    pickup_window: TimeWindow,
    delivery_window: TimeWindow,
}

impl Call {
    /// Creates a new call.
    pub fn new(
        origin: usize,
        destination: usize,
        size: f64,
        penalty: f64,
        pickup_window: TimeWindow,
        delivery_window: TimeWindow,
    ) -> Self {
        Self {
            origin,
            destination,
            size,
            penalty,
            pickup_window,
            delivery_window,
        }
    }

    /// Pickup node (0-based).
    pub fn origin(&self) -> usize {
        self.origin
    }

    /// Delivery node (0-based).
    pub fn destination(&self) -> usize {
        self.destination
    }

    /// Cargo size in load units.
    pub fn size(&self) -> f64 {
        self.size
    }

    /// Cost of leaving this call unserved.
    pub fn penalty(&self) -> f64 {
        self.penalty
    }

    /// Time window for the pickup event.
    pub fn pickup_window(&self) -> &TimeWindow {
        &self.pickup_window
    }

    /// Time window for the delivery event.
    pub fn delivery_window(&self) -> &TimeWindow {
        &self.delivery_window
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_window_valid() {
        let tw = TimeWindow::new(10.0, 20.0).expect("valid");
        assert_eq!(tw.earliest(), 10.0);
        assert_eq!(tw.latest(), 20.0);
    }

    #[test]
    fn test_time_window_invalid() {
        assert!(TimeWindow::new(20.0, 10.0).is_none());
        assert!(TimeWindow::new(f64::NAN, 10.0).is_none());
        assert!(TimeWindow::new(10.0, f64::INFINITY).is_none());
    }

    #[test]
    fn test_time_window_violated() {
        let tw = TimeWindow::new(10.0, 20.0).expect("valid");
        assert!(!tw.is_violated(5.0));
        assert!(!tw.is_violated(20.0));
        assert!(tw.is_violated(20.1));
    }

    #[test]
    fn test_call_accessors() {
        let c = Call::new(
            2,
            7,
            12.0,
            350.0,
            TimeWindow::new(0.0, 50.0).expect("valid"),
            TimeWindow::new(10.0, 90.0).expect("valid"),
        );
        assert_eq!(c.origin(), 2);
        assert_eq!(c.destination(), 7);
        assert_eq!(c.size(), 12.0);
        assert_eq!(c.penalty(), 350.0);
        assert_eq!(c.pickup_window().latest(), 50.0);
        assert_eq!(c.delivery_window().earliest(), 10.0);
    }
}
