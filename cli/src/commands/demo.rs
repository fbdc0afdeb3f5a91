use std::sync::Arc;

use carlot_common::config::Config;
use carlot_core::{CarFactory, ChannelSink};
use tracing::info;

use crate::commands::wait_for_name_log;
use crate::terminal::print;

pub async fn demo(cfg: &Config) -> anyhow::Result<()> {
    let (sink, mut rx) = ChannelSink::new();
    let factory = CarFactory::new(*cfg, Arc::new(sink));

    let mut car = factory.create_car("bmw", "5", 40000.0);
    print::aligned_line("greeting", car.say_hello());

    car.depreciate();
    print::aligned_line("depreciated", car.say_hello());

    info!("Asking the {} to say its name in {:?}", car.make(), cfg.log_delay);
    car.delay_log_name(None);

    let line: String = wait_for_name_log(&mut rx, cfg).await?;
    print::print_status(line);
    Ok(())
}
