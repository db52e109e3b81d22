//! Busy gate shared by the mutating transaction sequences.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Single "operation in progress" flag.
///
/// Cloning shares the flag, so the render layer can read it while a
/// sequence holds the guard.
#[derive(Debug, Clone, Default)]
pub struct BusyFlag(Arc<AtomicBool>);

impl BusyFlag {
    /// Create an idle flag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a sequence currently holds the gate.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Take the gate, or `None` if it is already held.
    #[must_use]
    pub fn try_acquire(&self) -> Option<BusyGuard> {
        self.0
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| BusyGuard(Arc::clone(&self.0)))
    }
}

/// Holds the busy gate; releases it when dropped.
#[derive(Debug)]
#[must_use = "the gate is released as soon as the guard is dropped"]
pub struct BusyGuard(Arc<AtomicBool>);

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_sets_and_clears() {
        let flag = BusyFlag::new();
        assert!(!flag.is_busy());

        {
            let _guard = flag.try_acquire().unwrap();
            assert!(flag.is_busy());
            assert!(flag.try_acquire().is_none());
        }

        assert!(!flag.is_busy());
        assert!(flag.try_acquire().is_some());
    }

    #[test]
    fn clones_share_state() {
        let flag = BusyFlag::new();
        let observer = flag.clone();
        let _guard = flag.try_acquire().unwrap();
        assert!(observer.is_busy());
    }
}
