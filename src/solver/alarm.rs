//! Advisory wall-clock alarm bounding a search.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Cooperative time limit for the iterative-deepening driver.
///
/// A background thread sleeps for the budget and then sets a flag; the
/// driver polls the flag between depth iterations. Nothing is preempted: a
/// depth iteration already in progress always runs to completion, so the
/// real stop latency is "budget plus the tail of the current iteration".
pub struct Alarm {
    fired: Arc<AtomicBool>,
}

impl Alarm {
    /// Arms an alarm that fires once `budget` has elapsed.
    pub fn after(budget: Duration) -> Self {
        let fired = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&fired);
        thread::spawn(move || {
            thread::sleep(budget);
            flag.store(true, Ordering::Release);
        });
        Self { fired }
    }

    pub fn fired(&self) -> bool {
        self.fired.load(Ordering::Acquire)
    }
}
