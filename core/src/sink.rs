//! # Output Sinks
//!
//! A sink is where a car's deferred name log ends up. Writes are
//! fire-and-forget: a sink never reports failure back to the car.

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::info;

/// Target used for raw lines that the terminal should print without decoration.
pub const PRINT_TARGET: &str = "carlot::print";

pub trait NameSink: Send + Sync {
    fn write_line(&self, line: String);
}

/// Emits every line as an `INFO` event on [`PRINT_TARGET`].
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl NameSink for TracingSink {
    fn write_line(&self, line: String) {
        info!(target: PRINT_TARGET, "{line}");
    }
}

/// Forwards lines into an unbounded channel so the caller can await them.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: UnboundedSender<String>,
}

impl ChannelSink {
    pub fn new() -> (Self, UnboundedReceiver<String>) {
        let (tx, rx) = mpsc::unbounded_channel::<String>();
        (Self { tx }, rx)
    }
}

impl NameSink for ChannelSink {
    fn write_line(&self, line: String) {
        // Nobody listening anymore is fine.
        let _ = self.tx.send(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_sink_delivers_lines_in_order() {
        let (sink, mut rx) = ChannelSink::new();
        sink.write_line("name bmw".to_string());
        sink.write_line("name audi".to_string());

        assert_eq!(rx.try_recv().as_deref(), Ok("name bmw"));
        assert_eq!(rx.try_recv().as_deref(), Ok("name audi"));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn channel_sink_ignores_closed_receiver() {
        let (sink, rx) = ChannelSink::new();
        drop(rx);
        sink.write_line("name bmw".to_string());
    }
}
