use log::{Level, log_enabled, trace};
use std::time::Instant;

/// Trace-level timer around one derivative evaluation.
///
/// Logs the body count and the number of pair interactions evaluated when
/// dropped. Does nothing unless trace logging is enabled.
pub struct ScopedTimer {
    label: &'static str,
    bodies: usize,
    start: Option<Instant>,
}

impl ScopedTimer {
    pub fn new(label: &'static str, bodies: usize) -> Self {
        let start = if log_enabled!(Level::Trace) {
            trace!("start {label} ({bodies} bodies)");
            Some(Instant::now())
        } else {
            None
        };
        Self {
            label,
            bodies,
            start,
        }
    }

    /// Ordered pairs visited by an exact pairwise sum over `bodies`.
    pub fn pair_count(bodies: usize) -> usize {
        bodies.saturating_mul(bodies.saturating_sub(1))
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        if let Some(start) = self.start {
            trace!(
                "end {} ({} pairs, {} µs)",
                self.label,
                Self::pair_count(self.bodies),
                start.elapsed().as_micros()
            );
        }
    }
}
