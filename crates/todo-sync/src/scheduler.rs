//! Delayed Tasks
//!
//! The store never sleeps itself; it hands delayed work to a `Scheduler`
//! (browser timeout in the frontend, virtual clock in tests).

use std::time::Duration;

/// Runs a callback once after `delay` on the current thread
pub trait Scheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>);
}
