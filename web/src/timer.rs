//! Component-scoped timers.
//!
//! Every simulated delay in the dashboard belongs to the component that
//! started it: scheduling again replaces the pending callback, and
//! unmounting the component clears it.

use std::time::Duration;

use leptos::prelude::*;

/// A single pending timeout owned by the current reactive owner.
#[derive(Clone, Copy)]
pub struct OwnedTimeout {
    handle: StoredValue<Option<TimeoutHandle>>,
}

impl OwnedTimeout {
    pub fn new() -> Self {
        let handle = StoredValue::new(None::<TimeoutHandle>);
        on_cleanup(move || {
            if let Some(Some(h)) = handle.try_get_value() {
                h.clear();
            }
        });
        Self { handle }
    }

    /// Run `f` once after `delay`, cancelling anything still pending.
    pub fn schedule(&self, delay: Duration, f: impl FnOnce() + 'static) {
        self.cancel();
        match set_timeout_with_handle(f, delay) {
            Ok(h) => self.handle.set_value(Some(h)),
            Err(e) => tracing::warn!("cannot schedule timeout: {e:?}"),
        }
    }

    pub fn cancel(&self) {
        if let Some(Some(h)) = self.handle.try_get_value() {
            h.clear();
        }
        self.handle.try_set_value(None);
    }
}

impl Default for OwnedTimeout {
    fn default() -> Self {
        Self::new()
    }
}

/// A repeating interval owned by the current reactive owner.
#[derive(Clone, Copy)]
pub struct OwnedInterval {
    handle: StoredValue<Option<IntervalHandle>>,
}

impl OwnedInterval {
    pub fn new() -> Self {
        let handle = StoredValue::new(None::<IntervalHandle>);
        on_cleanup(move || {
            if let Some(Some(h)) = handle.try_get_value() {
                h.clear();
            }
        });
        Self { handle }
    }

    /// Run `f` every `period` until stopped, replacing any running interval.
    pub fn start(&self, period: Duration, f: impl Fn() + 'static) {
        self.stop();
        match set_interval_with_handle(f, period) {
            Ok(h) => self.handle.set_value(Some(h)),
            Err(e) => tracing::warn!("cannot start interval: {e:?}"),
        }
    }

    pub fn stop(&self) {
        if let Some(Some(h)) = self.handle.try_get_value() {
            h.clear();
        }
        self.handle.try_set_value(None);
    }
}

impl Default for OwnedInterval {
    fn default() -> Self {
        Self::new()
    }
}
