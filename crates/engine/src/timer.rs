//! Cancellable timers driven by a caller-owned millisecond clock.
//!
//! Nothing here sleeps. The runner asks for the nearest deadline, waits for
//! input at most that long, then lets the timers fire.

/// One-shot timer that is re-armed explicitly after each firing.
#[derive(Debug, Clone)]
pub struct Timer {
    delay_ms: u64,
    due_at: Option<u64>,
}

impl Timer {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            due_at: None,
        }
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    /// Schedule the next firing `delay_ms` after `now_ms`, replacing any
    /// pending one.
    pub fn arm(&mut self, now_ms: u64) {
        self.due_at = Some(now_ms.saturating_add(self.delay_ms));
    }

    pub fn cancel(&mut self) {
        self.due_at = None;
    }

    pub fn is_armed(&self) -> bool {
        self.due_at.is_some()
    }

    /// Fire if due. A fired timer is disarmed until `arm` is called again.
    pub fn fire(&mut self, now_ms: u64) -> bool {
        match self.due_at {
            Some(due) if now_ms >= due => {
                self.due_at = None;
                true
            }
            _ => false,
        }
    }

    /// Time left before the timer is due, `None` when disarmed.
    pub fn remaining_ms(&self, now_ms: u64) -> Option<u64> {
        self.due_at.map(|due| due.saturating_sub(now_ms))
    }
}

/// Fixed-cadence timer. Missed periods are skipped, not replayed.
#[derive(Debug, Clone)]
pub struct Interval {
    period_ms: u64,
    next_at: Option<u64>,
}

impl Interval {
    pub fn new(period_ms: u64) -> Self {
        Self {
            period_ms: period_ms.max(1),
            next_at: None,
        }
    }

    pub fn start(&mut self, now_ms: u64) {
        self.next_at = Some(now_ms.saturating_add(self.period_ms));
    }

    pub fn stop(&mut self) {
        self.next_at = None;
    }

    pub fn is_running(&self) -> bool {
        self.next_at.is_some()
    }

    /// Fire at most once per call, then move the deadline past `now_ms` on
    /// the original cadence.
    pub fn fire(&mut self, now_ms: u64) -> bool {
        let Some(next) = self.next_at else {
            return false;
        };
        if now_ms < next {
            return false;
        }
        let behind = (now_ms - next) / self.period_ms + 1;
        self.next_at = Some(next.saturating_add(behind * self.period_ms));
        true
    }

    pub fn remaining_ms(&self, now_ms: u64) -> Option<u64> {
        self.next_at.map(|next| next.saturating_sub(now_ms))
    }
}
