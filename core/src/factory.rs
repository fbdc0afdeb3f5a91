//! # Car Factory
//!
//! Every car produced by a factory shares the factory's output sink and
//! inherits its default log delay.

use std::sync::Arc;

use carlot_common::config::Config;
use tracing::debug;

use crate::car::Car;
use crate::sink::{NameSink, TracingSink};

#[derive(Clone)]
pub struct CarFactory {
    config: Config,
    sink: Arc<dyn NameSink>,
}

impl CarFactory {
    pub fn new(config: Config, sink: Arc<dyn NameSink>) -> Self {
        Self { config, sink }
    }

    pub fn with_sink(sink: Arc<dyn NameSink>) -> Self {
        Self::new(Config::default(), sink)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Creates a car. `value` is taken as-is, negative numbers included.
    pub fn create_car(&self, make: impl Into<String>, model: impl Into<String>, value: f64) -> Car {
        let make: String = make.into();
        let model: String = model.into();
        debug!(%make, %model, value, "creating car");

        Car::new(
            make,
            model,
            value,
            self.config.log_delay,
            Arc::clone(&self.sink),
        )
    }
}

impl Default for CarFactory {
    fn default() -> Self {
        Self::new(Config::default(), Arc::new(TracingSink))
    }
}

/// Shortcut for [`CarFactory::default`] followed by [`CarFactory::create_car`].
pub fn create_car(make: impl Into<String>, model: impl Into<String>, value: f64) -> Car {
    CarFactory::default().create_car(make, model, value)
}
