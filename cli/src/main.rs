mod commands;
mod terminal;

use commands::{CommandLine, Commands, demo, hello};
use carlot_common::config::Config;
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging();

    let cfg = Config::default().with_log_delay_ms(commands.delay_ms);
    let cfg = Config {
        no_banner: commands.no_banner,
        quiet: commands.quiet,
        ..cfg
    };

    print::banner(cfg.no_banner, cfg.quiet);

    let result = match commands.command {
        Commands::Demo => {
            print::header("running the showroom demo", cfg.quiet);
            demo::demo(&cfg).await
        }
        Commands::Hello(args) => {
            print::header("building your car", cfg.quiet);
            hello::hello(args, &cfg).await
        }
    };

    print::end_of_program();
    result
}
