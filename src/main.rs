//! A terminal dashboard for personal health monitoring.

mod app;
mod config;
mod data;
mod error;
mod events;
mod logger;
mod session;
mod state;
mod ui;
mod utils;

use anyhow::Result;
use app::App;
use clap::{App as ClapApp, Arg};
use config::Config;

fn main() -> Result<()> {
    let matches = ClapApp::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Use a custom configuration directory")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("demo")
                .long("demo")
                .help("Run without persisting credentials to disk"),
        )
        .get_matches();

    let mut config = Config::new();
    config.load(matches.value_of("config"))?;

    App::start(config, matches.is_present("demo"))
}
