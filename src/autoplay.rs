use std::time::Duration;

/// Identifies one scheduled auto-advance. A fresh handle is issued every time
/// the timer is (re)scheduled.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct TimerHandle(u64);

#[derive(Debug, Clone, Copy)]
struct PendingAdvance {
    handle: TimerHandle,
    remaining: Duration,
}

/// Frame-driven repeating timer. At most one advance is pending at a time.
#[derive(Debug)]
pub struct AutoPlayTimer {
    interval: Duration,
    pending: Option<PendingAdvance>,
    next_id: u64,
}

impl AutoPlayTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            pending: None,
            next_id: 0,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn pending(&self) -> Option<TimerHandle> {
        self.pending.map(|p| p.handle)
    }

    /// Time left before the pending advance fires.
    pub fn remaining(&self) -> Option<Duration> {
        self.pending.map(|p| p.remaining)
    }

    /// Arms a new advance one interval from now, cancelling any pending one first.
    pub fn schedule(&mut self) -> TimerHandle {
        self.cancel();
        self.next_id += 1;
        let handle = TimerHandle(self.next_id);
        self.pending = Some(PendingAdvance {
            handle,
            remaining: self.interval,
        });
        handle
    }

    pub fn cancel(&mut self) -> Option<TimerHandle> {
        self.pending.take().map(|p| p.handle)
    }

    /// Moves the clock forward by `dt`. Returns true when the pending advance
    /// fired; the same handle is then re-armed for another full interval.
    pub fn advance(&mut self, dt: Duration) -> bool {
        let interval = self.interval;
        let Some(pending) = self.pending.as_mut() else {
            return false;
        };

        match pending.remaining.checked_sub(dt) {
            Some(left) if !left.is_zero() => {
                pending.remaining = left;
                false
            }
            _ => {
                // Fires once per frame at most, even after a long stall.
                pending.remaining = interval;
                true
            }
        }
    }
}
