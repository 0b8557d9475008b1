//! Single-flight guard for the call-to-action control.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared flag that is set while a probe is in flight.
///
/// Clones share the same flag.
#[derive(Debug, Clone, Default)]
pub struct InFlight {
    busy: Arc<AtomicBool>,
}

impl InFlight {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the flag. Returns `None` if another probe already holds it.
    pub fn try_begin(&self) -> Option<InFlightTicket> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlightTicket {
                busy: Arc::clone(&self.busy),
            })
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

/// Held for the duration of one probe. Releases the flag on drop, so every
/// settlement path (including early returns) re-enables the control.
#[derive(Debug)]
pub struct InFlightTicket {
    busy: Arc<AtomicBool>,
}

impl Drop for InFlightTicket {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_begin_is_refused_while_held() {
        let guard = InFlight::new();
        let ticket = guard.try_begin();
        assert!(ticket.is_some());
        assert!(guard.is_busy());
        assert!(guard.try_begin().is_none());
    }

    #[test]
    fn test_drop_releases_flag() {
        let guard = InFlight::new();
        {
            let _ticket = guard.try_begin().unwrap();
            assert!(guard.is_busy());
        }
        assert!(!guard.is_busy());
        assert!(guard.try_begin().is_some());
    }

    #[test]
    fn test_clones_share_flag() {
        let guard = InFlight::new();
        let other = guard.clone();
        let _ticket = guard.try_begin().unwrap();
        assert!(other.is_busy());
        assert!(other.try_begin().is_none());
    }
}
