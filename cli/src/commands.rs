pub mod demo;
pub mod hello;

use std::time::Duration;

use anyhow::Context;
use carlot_common::config::Config;
use clap::{ArgAction, Parser, Subcommand};
use tokio::sync::mpsc::UnboundedReceiver;

use hello::HelloArgs;

/// Extra time granted to the runtime before a deferred name log counts as lost.
const NAME_LOG_GRACE: Duration = Duration::from_secs(1);

#[derive(Parser)]
#[command(name = "carlot")]
#[command(about = "Build a car, age it, and hear its name.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Default delay before a car logs its name, in milliseconds
    #[arg(long, global = true, default_value_t = 100)]
    pub delay_ms: u64,

    /// Hide headers (repeat for less output)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Walk a bmw 5 through greeting, depreciation and the delayed name log
    #[command(alias = "d")]
    Demo,
    /// Build a car from the given make, model and value
    #[command(alias = "h")]
    Hello(HelloArgs),
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Waits for the single line a car's deferred name log writes into the channel.
pub async fn wait_for_name_log(rx: &mut UnboundedReceiver<String>, cfg: &Config) -> anyhow::Result<String> {
    tokio::time::timeout(cfg.log_delay + NAME_LOG_GRACE, rx.recv())
        .await
        .context("deferred name log never arrived")?
        .context("name log channel closed")
}
