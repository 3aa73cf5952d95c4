use anyhow::Result;
use clap::Parser;

use office_walkthrough::cli::Cli;
use office_walkthrough::config::LayoutConfig;
use office_walkthrough::session::Session;
use office_walkthrough::{headless, platform};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = match &cli.layout {
        Some(path) => LayoutConfig::load(path)?,
        None => LayoutConfig::default(),
    };
    let mut session = Session::new(&config);

    if cli.headless {
        let keys = headless::parse_keys(&cli.hold)?;
        headless::run(&mut session, cli.frames, &keys);
        return Ok(());
    }

    platform::run(session, cli.quiet)
}
