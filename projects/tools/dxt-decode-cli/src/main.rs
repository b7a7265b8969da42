#![allow(unexpected_cfgs)]
#![cfg(not(tarpaulin_include))]

mod commands;
mod error;
mod util;
use argh::FromArgs;
use core::error::Error;
use tracing_subscriber::EnvFilter;

#[derive(FromArgs, Debug)]
/// Decoder for raw BC1/BC2/BC3 (DXT1/DXT3/DXT5) block streams
struct TopLevel {
    #[argh(subcommand)]
    command: Commands,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand)]
enum Commands {
    Decode(commands::decode::DecodeCmd),
}

fn main() -> Result<(), Box<dyn Error>> {
    // Silent unless RUST_LOG is set, e.g. RUST_LOG=dxt_decode_common=debug
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli: TopLevel = argh::from_env();

    match cli.command {
        Commands::Decode(cmd) => {
            commands::decode::handle_decode_command(cmd)?;
        }
    }

    Ok(())
}
