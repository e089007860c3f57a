// file: src/cli/args.rs
// version: 1.0.0
// guid: 4a9e3f61-b207-4d85-a3c6-5f1d8e0b9c24

//! Command line argument definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gadb")]
#[command(about = "gadb is like adb but does more")]
#[command(long_about = "An extended adb: run commands as root, pull and push privileged files, \
find package paths and mirror device directories locally.")]
#[command(version = crate::VERSION)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Device user to run as (default: root)
    #[arg(short, long, global = true, env = "GADB_USER")]
    pub user: Option<String>,

    /// Root path to cache files into
    #[arg(long, global = true, env = "GADB_CACHE", value_name = "DIR")]
    pub cache: Option<PathBuf>,

    /// Settings file (default: ~/.config/gadb/config.yaml)
    #[arg(long, global = true, env = "GADB_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Run a shell command on the device (interactive shell when none is given)
    Shell {
        #[arg(
            trailing_var_arg = true,
            allow_hyphen_values = true,
            value_name = "COMMAND"
        )]
        command: Vec<String>,
    },

    /// Pull files from the device
    Pull {
        remote: String,

        /// Local destination (default: current directory)
        local: Option<PathBuf>,
    },

    /// Push a file to the device, keeping the ownership found there
    Push { local: PathBuf, remote: String },

    /// Print the APK path of a package
    Ppath { package: String },

    /// Save device files locally under <cache>/<model>-<serial>
    Cache {
        /// Device root paths to cache
        #[arg(long = "root", value_name = "PATH", value_delimiter = ',', default_value = "/system")]
        roots: Vec<String>,
    },
}
