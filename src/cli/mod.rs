mod args;
mod commands;
mod global;
mod handlers;

use clap::Parser;
use rcnb::{Codec, RcnbConfig};

use args::Commands;
use global::GlobalArgs;

#[derive(Parser)]
#[command(name = "rcnb")]
#[command(version)]
#[command(about = "Encode and decode data with the RCNB alphabets", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let default_filter = if cli.global.quiet { "error" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .format_target(false)
        .init();

    // Load configuration with user overrides
    let mut config = RcnbConfig::load_with_overrides()?;

    // Command-line flags win over every config layer
    if let Some(max_size) = cli.global.max_size {
        config.settings.max_size = max_size;
    }
    let codec = if cli.global.scalar {
        Codec::scalar()
    } else {
        config.codec()
    };
    log::debug!("using {} backend", codec.backend().name());

    match cli.command {
        Commands::Encode(args) => handlers::encode::handle(args, &cli.global, &config, codec),
        Commands::Decode(args) => handlers::decode::handle(args, &cli.global, &config, codec),
        Commands::Config(args) => handlers::config::handle(args, &config, codec),
    }
}
