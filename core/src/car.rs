//! # Car Model
//!
//! The single entity of the crate: a make, a model and a monetary value.
//!
//! Value rules are deliberately lopsided:
//! * [`Car::set_value`] refuses anything negative.
//! * [`Car::depreciate`] has no floor and may push the value below zero.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use tokio::runtime::Handle;
use tracing::debug;

use crate::error::CarError;
use crate::sink::NameSink;

/// Amount removed from a car's value by one call to [`Car::depreciate`].
pub const DEPRECIATION_STEP: f64 = 2500.0;

const FLAG_PREFIX: &str = "make";

/// Key of the flag the factory sets for a car of the given make.
pub fn flag_key(make: &str) -> String {
    format!("{FLAG_PREFIX}{make}")
}

#[derive(Clone)]
pub struct Car {
    make: String,
    model: String,
    value: f64,
    flags: BTreeMap<String, bool>,
    log_delay: Duration,
    sink: Arc<dyn NameSink>,
}

impl Car {
    pub(crate) fn new(
        make: String,
        model: String,
        value: f64,
        log_delay: Duration,
        sink: Arc<dyn NameSink>,
    ) -> Self {
        let flags = BTreeMap::from([(flag_key(&make), true)]);
        Self {
            make,
            model,
            value,
            flags,
            log_delay,
            sink,
        }
    }

    pub fn make(&self) -> &str {
        &self.make
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn flags(&self) -> &BTreeMap<String, bool> {
        &self.flags
    }

    /// Unknown keys read as `false`.
    pub fn has_flag(&self, key: &str) -> bool {
        self.flags.get(key).copied().unwrap_or(false)
    }

    pub fn depreciate(&mut self) {
        self.value -= DEPRECIATION_STEP;
    }

    /// Replaces the value, leaving the car untouched on error.
    pub fn set_value(&mut self, new_value: f64) -> Result<(), CarError> {
        if new_value.is_nan() || new_value < 0.0 {
            return Err(CarError::InvalidValue { value: new_value });
        }
        self.value = new_value;
        Ok(())
    }

    /// Schedules a one-shot write of `name <make>` to the car's sink.
    ///
    /// The write happens no earlier than `timeout` (or the factory's default
    /// delay when `None`) and never before this call returns. There is no
    /// handle to cancel it. Inside a Tokio runtime the write runs as a task;
    /// outside of one it runs on a detached thread.
    pub fn delay_log_name(&self, timeout: Option<Duration>) {
        let delay: Duration = timeout.unwrap_or(self.log_delay);
        let line: String = format!("name {}", self.make);
        let sink: Arc<dyn NameSink> = Arc::clone(&self.sink);

        debug!(make = %self.make, ?delay, "scheduling deferred name log");

        match Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move {
                    tokio::time::sleep(delay).await;
                    sink.write_line(line);
                });
            }
            Err(_) => {
                thread::spawn(move || {
                    thread::sleep(delay);
                    sink.write_line(line);
                });
            }
        }
    }

    pub fn say_hello(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Adding zero folds -0 into 0.
        write!(f, "Hello {} {}: ${}", self.make, self.model, self.value + 0.0)
    }
}

impl fmt::Debug for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Car")
            .field("make", &self.make)
            .field("model", &self.model)
            .field("value", &self.value)
            .field("flags", &self.flags)
            .field("log_delay", &self.log_delay)
            .finish_non_exhaustive()
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
