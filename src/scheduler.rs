//! Browser Timers
//!
//! `Scheduler` backed by `setTimeout`.

use std::time::Duration;

use gloo_timers::callback::Timeout;
use todo_sync::Scheduler;

pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        // Fire-and-forget: the store ignores stale timers itself
        Timeout::new(millis, task).forget();
    }
}
