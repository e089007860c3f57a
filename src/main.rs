// file: src/main.rs
// version: 1.0.0
// guid: 8e1d4b3c-2f90-4a76-b5e8-c3a7f0d9162b

//! gadb - Main entry point

use clap::Parser;
use gadb::{
    adb::{self, SystemAdb},
    cli::{
        args::{Cli, Commands},
        commands::*,
    },
    config::loader::ConfigLoader,
    logging::logger,
    Result,
};
use tokio::signal;
use tracing::{debug, warn};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = logger::init_logger(cli.verbose, cli.quiet) {
        eprintln!("Error: {}", e);
    }

    let interrupted = async {
        if signal::ctrl_c().await.is_err() {
            std::future::pending::<()>().await;
        }
    };

    tokio::select! {
        result = run(cli) => {
            if let Err(e) = result {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        _ = interrupted => {
            warn!("Interrupted by user");
            std::process::exit(130); // Standard exit code for Ctrl+C
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let loader = ConfigLoader::new();
    let settings = match &cli.config {
        Some(path) => loader.load(path)?,
        None => loader.load_default()?,
    };
    let resolved = settings.resolve(cli.user, cli.cache);
    debug!("Device user: {}", resolved.user);

    // No subcommand runs without a usable adb
    let binary = adb::resolve()?;
    debug!("Using adb at {}", binary);
    let adb = SystemAdb::with_binary(binary);

    match cli.command {
        Commands::Shell { command } => shell_command(&adb, &resolved.user, &command).await,
        Commands::Pull { remote, local } => {
            logger::with_async_operation_span("pull", || pull_command(&adb, &remote, local)).await
        }
        Commands::Push { local, remote } => {
            logger::with_async_operation_span("push", || push_command(&adb, local, &remote)).await
        }
        Commands::Ppath { package } => ppath_command(&adb, &package).await,
        Commands::Cache { roots } => {
            logger::with_async_operation_span("cache", || {
                cache_command(&adb, resolved.cache, &roots)
            })
            .await
        }
    }
}
