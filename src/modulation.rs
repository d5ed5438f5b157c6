//! This module provides the tick gate that splits the display refresh into a
//! slower logical cadence.

/// Counts display refreshes and opens once every `interval` refreshes.
///
/// Entities move a whole cell per logical tick, so the logical rate has to be far
/// below the refresh rate for the game to be playable. Rather than tying movement to
/// wall-clock time, the gate simply skips refreshes: at 60 refreshes per second and
/// an interval of 10, six logical ticks happen each second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickGate {
    counter: u32,
    interval: u32,
}

impl TickGate {
    /// Creates a gate that opens every `interval` refreshes (at least every refresh).
    pub fn new(interval: u32) -> Self {
        Self {
            counter: 0,
            interval: interval.max(1),
        }
    }

    /// Registers one refresh. Returns `true` if a logical tick is due on it.
    pub fn next(&mut self) -> bool {
        self.counter += 1;
        if self.counter >= self.interval {
            self.counter = 0;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.counter = 0;
    }

    pub fn interval(&self) -> u32 {
        self.interval
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_opens_every_interval() {
        let mut gate = TickGate::new(3);
        let opened: Vec<bool> = (0..7).map(|_| gate.next()).collect();
        assert_eq!(opened, vec![false, false, true, false, false, true, false]);
    }

    #[test]
    fn test_zero_interval_opens_every_refresh() {
        let mut gate = TickGate::new(0);
        assert_eq!(gate.interval(), 1);
        assert!(gate.next());
        assert!(gate.next());
    }

    #[test]
    fn test_reset_restarts_count() {
        let mut gate = TickGate::new(2);
        assert!(!gate.next());
        gate.reset();
        assert!(!gate.next());
        assert!(gate.next());
    }
}
