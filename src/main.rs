use clap::Parser;
use eyre::WrapErr;
use roster::config::Config;
use roster::menu::Menu;
use roster::model::Roster;
use std::io;
use std::path::PathBuf;
use tracing::{Level, debug};

#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Use FILE instead of roster.toml
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Number of students shown by the top students entry
    #[arg(long)]
    top: Option<usize>,
    /// Set verbosity level (repeat for more)
    #[arg(short, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    let level = match args.verbose {
        0 => Level::ERROR,
        1 => Level::WARN,
        2 => Level::INFO,
        3 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
    let config = Config::load_or_default(args.config.as_deref())?;
    debug!(?config, "configuration loaded");
    let mut roster = Roster::new();
    Menu::new(
        &mut roster,
        io::stdin().lock(),
        io::stdout().lock(),
        config.display.decimals,
        args.top.unwrap_or(config.ranking.top),
    )
    .run()
    .wrap_err("interactive session failed")
}
