//! Wall-clock budget for one move decision.

use std::time::{Duration, Instant};

/// A polled time budget.
///
/// The match driver starts one per turn; agents query `remaining` during
/// any unbounded search and give up before it runs out.
///
/// ```
/// use std::time::Duration;
/// use rust_jaipur::search::Deadline;
///
/// let deadline = Deadline::after(Duration::from_millis(50));
/// assert!(!deadline.is_expired());
/// assert!(deadline.remaining() <= Duration::from_millis(50));
///
/// assert_eq!(Deadline::unbounded().remaining(), Duration::MAX);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Deadline {
    start: Instant,
    budget: Option<Duration>,
}

impl Deadline {
    /// Start a budget of `budget` from now.
    #[must_use]
    pub fn after(budget: Duration) -> Self {
        Self {
            start: Instant::now(),
            budget: Some(budget),
        }
    }

    /// A deadline that never expires.
    #[must_use]
    pub fn unbounded() -> Self {
        Self {
            start: Instant::now(),
            budget: None,
        }
    }

    /// Time spent since the deadline was started.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Time left, zero once expired.
    #[must_use]
    pub fn remaining(&self) -> Duration {
        self.budget
            .map_or(Duration::MAX, |budget| budget.saturating_sub(self.elapsed()))
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.budget.is_some_and(|budget| self.elapsed() > budget)
    }
}
