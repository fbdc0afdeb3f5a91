use std::sync::Arc;

use carlot_common::config::Config;
use carlot_core::{CarFactory, ChannelSink};
use clap::Args;
use tracing::{info, warn};

use crate::commands::wait_for_name_log;
use crate::terminal::print;

#[derive(Args)]
pub struct HelloArgs {
    pub make: String,
    pub model: String,
    #[arg(allow_negative_numbers = true)]
    pub value: f64,

    /// How many times to depreciate the car
    #[arg(long, default_value_t = 0)]
    pub depreciate: u32,

    /// Replace the value after depreciation; negative values are refused
    #[arg(long, allow_negative_numbers = true)]
    pub set_value: Option<f64>,
}

pub async fn hello(args: HelloArgs, cfg: &Config) -> anyhow::Result<()> {
    let (sink, mut rx) = ChannelSink::new();
    let factory = CarFactory::new(*cfg, Arc::new(sink));

    let mut car = factory.create_car(args.make, args.model, args.value);
    if car.value() < 0.0 {
        warn!("Starting value {} is negative", car.value());
    }

    for _ in 0..args.depreciate {
        car.depreciate();
    }
    if args.depreciate > 0 {
        info!("Depreciated {} time(s), value is now {}", args.depreciate, car.value());
    }

    if let Some(value) = args.set_value {
        car.set_value(value)?;
    }

    print::aligned_line("greeting", car.say_hello());
    for (key, set) in car.flags() {
        print::aligned_line(key, set);
    }

    car.delay_log_name(None);
    let line: String = wait_for_name_log(&mut rx, cfg).await?;
    print::print_status(line);
    Ok(())
}
