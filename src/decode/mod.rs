//! Route decoding.
//!
//! The flat encoding never tags an entry as pickup or delivery; the role of
//! each occurrence is recovered from its rank in a stable sort of the
//! vehicle's segment. Both evaluators consume exactly this decoding, so the
//! node sequence they walk is guaranteed to be identical.

mod parity;

pub use parity::{decode_events, split_segments, EventKind, RouteEvent};
