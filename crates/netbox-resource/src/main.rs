//! netbox-resource
//!
//! Polling resource reporting NetBox devices and server interfaces that
//! changed since the last seen version. The command is taken from the first
//! argument, or from the executable name when installed as
//! `check` / `in` / `out`.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use color_eyre::Result;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

mod commands;
mod config;
mod logging;

use config::Config;

/// NetBox change-detection resource
#[derive(Parser, Debug)]
#[command(name = "netbox-resource", version, about, long_about = None)]
struct Cli {
    /// Print build information and exit
    #[arg(short = 'b', long)]
    build_info: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List versions changed since the version given on stdin
    Check,
    /// Write the requested version to <DESTINATION>/version.json
    #[command(name = "in")]
    Get {
        /// Output directory
        destination: PathBuf,
    },
    /// Echo the version stored in <SOURCE>/version.json
    #[command(name = "out")]
    Put {
        /// Input directory
        source: PathBuf,
    },
}

const COMMAND_NAMES: [&str; 3] = ["check", "in", "out"];

/// Arguments with the command implied by the executable name made explicit
fn effective_args(mut args: Vec<OsString>) -> Vec<OsString> {
    let invoked_as = args
        .first()
        .and_then(|arg0| Path::new(arg0).file_name())
        .and_then(|name| name.to_str())
        .map(str::to_owned);

    if let Some(name) = invoked_as
        && COMMAND_NAMES.contains(&name.as_str())
    {
        args.insert(1, OsString::from(name));
    }
    args
}

fn build_info() -> String {
    format!(
        "version: {}\nplatform: {}/{}\nprofile: {}\n",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS,
        std::env::consts::ARCH,
        if cfg!(debug_assertions) { "debug" } else { "release" },
    )
}

/// Token cancelled on SIGINT, or SIGTERM on Unix
fn cancel_on_signal() -> CancellationToken {
    let token = CancellationToken::new();

    let signal_token = token.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("received interrupt, cancelling");
                signal_token.cancel();
            }
            Err(err) => error!("error setting up signal handler: {}", err),
        }
    });

    #[cfg(unix)]
    {
        let sigterm_token = token.clone();
        tokio::spawn(async move {
            use tokio::signal::unix::{SignalKind, signal};
            match signal(SignalKind::terminate()) {
                Ok(mut sigterm) => {
                    sigterm.recv().await;
                    info!("received SIGTERM, cancelling");
                    sigterm_token.cancel();
                }
                Err(err) => error!("error setting up SIGTERM handler: {}", err),
            }
        });
    }

    token
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    let cli = Cli::parse_from(effective_args(std::env::args_os().collect()));

    if cli.build_info {
        print!("{}", build_info());
        return Ok(());
    }

    let config = Config::load_default()?;
    logging::init(&config.log)?;

    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout().lock();

    match cli.command {
        Some(Command::Check) => {
            let cancel = cancel_on_signal();
            commands::check::run(&config, stdin, stdout, &cancel).await
        }
        Some(Command::Get { destination }) => commands::get::run(&destination, stdin, stdout),
        Some(Command::Put { source }) => commands::put::run(&source, stdin, stdout),
        None => {
            eyre::bail!("no command given; use one of: {}", COMMAND_NAMES.join(", "))
        }
    }
}
