use std::time::Duration;

/// Delay applied to a deferred name log when the caller does not pick one.
pub const DEFAULT_LOG_DELAY: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Minimum time a car waits before writing its name to the output sink.
    ///
    /// Zero schedules the write as soon as possible, but never synchronously.
    pub log_delay: Duration,
    pub no_banner: bool,
    /// Quiet level; anything above zero hides headers.
    pub quiet: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_delay: DEFAULT_LOG_DELAY,
            no_banner: false,
            quiet: 0,
        }
    }
}

impl Config {
    pub fn with_log_delay_ms(mut self, millis: u64) -> Self {
        self.log_delay = Duration::from_millis(millis);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_hundred_millis() {
        let cfg = Config::default();
        assert_eq!(cfg.log_delay, Duration::from_millis(100));
        assert!(!cfg.no_banner);
        assert_eq!(cfg.quiet, 0);
    }

    #[test]
    fn log_delay_can_be_overridden() {
        let cfg = Config::default().with_log_delay_ms(0);
        assert_eq!(cfg.log_delay, Duration::ZERO);
    }
}
