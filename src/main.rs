use anyhow::Context;
use clap::Parser;

use ship_filter::Config;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::parse();
    if let Err(e) = ship_filter::run(&config)
        .with_context(|| format!("failed to filter {}", config.input.display()))
    {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
