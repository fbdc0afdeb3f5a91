//! Helpers shared by the end-to-end tests.

use std::sync::Arc;

use carlot_common::config::Config;
use carlot_core::{CarFactory, ChannelSink};
use tokio::sync::mpsc::UnboundedReceiver;

/// A factory whose cars write their deferred name logs into the returned receiver.
pub fn recording_factory(cfg: Config) -> (CarFactory, UnboundedReceiver<String>) {
    let (sink, rx) = ChannelSink::new();
    (CarFactory::new(cfg, Arc::new(sink)), rx)
}
