use serde::Serialize;

use crate::pair::PairResult;
use crate::point::Point;

/// One divide-and-conquer step, reported after both halves are solved and
/// the strip has been merged.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepEvent {
    /// Solver name, as in [`crate::Solver::name`].
    pub solver: &'static str,
    /// Recursion depth; the top-level call is 0.
    pub depth: usize,
    /// Split axis. Always 0 for the planar solvers.
    pub level: usize,
    /// Number of points in this partition.
    pub size: usize,
    /// The median point the partition was split at.
    pub midpoint: Point,
    /// Closest distance found in the left half.
    pub left: f64,
    /// Closest distance found in the right half.
    pub right: f64,
    /// min(left, right): the strip half-width.
    pub delta: f64,
    /// Number of points that fell into the strip.
    pub strip: usize,
    /// Best pair of the partition after the strip merge.
    pub best: PairResult,
}

/// Receives recursion steps from the traced solver variants.
///
/// Observers only watch; nothing they do changes the solver's result.
pub trait Observer {
    /// Returns false to let solvers skip building events.
    fn enabled(&self) -> bool {
        true
    }

    fn on_step(&mut self, event: &StepEvent);
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl Observer for NoopObserver {
    fn enabled(&self) -> bool {
        false
    }

    fn on_step(&mut self, _event: &StepEvent) {}
}

/// Collects events in emission order.
impl Observer for Vec<StepEvent> {
    fn on_step(&mut self, event: &StepEvent) {
        self.push(event.clone());
    }
}

/// Adapts a closure into an [`Observer`].
pub struct Callback<F>(pub F);

impl<F: FnMut(&StepEvent)> Observer for Callback<F> {
    fn on_step(&mut self, event: &StepEvent) {
        (self.0)(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(depth: usize) -> StepEvent {
        let a = Point::xy(0.0, 0.0);
        let b = Point::xy(1.0, 0.0);
        StepEvent {
            solver: "planar",
            depth,
            level: 0,
            size: 4,
            midpoint: a.clone(),
            left: 1.0,
            right: 2.0,
            delta: 1.0,
            strip: 2,
            best: PairResult {
                distance: 1.0,
                pair: (a, b),
            },
        }
    }

    #[test]
    fn vec_collects_in_order() {
        let mut events: Vec<StepEvent> = Vec::new();
        assert!(events.enabled());
        events.on_step(&event(2));
        events.on_step(&event(1));
        assert_eq!(events.iter().map(|e| e.depth).collect::<Vec<_>>(), vec![2, 1]);
    }

    #[test]
    fn noop_is_disabled() {
        assert!(!NoopObserver.enabled());
    }

    #[test]
    fn callback_forwards() {
        let mut seen = 0;
        {
            let mut cb = Callback(|e: &StepEvent| seen += e.size);
            cb.on_step(&event(0));
            cb.on_step(&event(0));
        }
        assert_eq!(seen, 8);
    }
}
