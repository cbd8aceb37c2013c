use clap::Parser;
use sqlfacade_rs::cli::args::Cli;
use sqlfacade_rs::cli::dispatch::handle;
use sqlfacade_rs::logger;
use sqlfacade_rs::model::Config;

fn main() {
    let cli = Cli::parse();
    let config = match Config::load(cli.config.as_deref(), cli.env.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };
    logger::setup_logger(cli.verbose, &config.logging);
    handle(cli, config);
}
