// Debounce primitive for the search input: every keystroke cancels the
// pending re-filter and schedules a new one; the apply fires once after a
// quiet period. The UI loop polls fire_due() on each tick.
use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct Debouncer {
    quiet: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            deadline: None,
        }
    }

    /// Reschedules the pending fire to `now + quiet`.
    pub fn poke_at(&mut self, now: Instant) {
        self.deadline = Some(now + self.quiet);
    }

    pub fn poke(&mut self) {
        self.poke_at(Instant::now());
    }

    /// True exactly once after the quiet period elapses untouched.
    pub fn fire_due_at(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn fire_due(&mut self) -> bool {
        self.fire_due_at(Instant::now())
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }
}
