//! Command-line interface definitions using clap

use clap::Parser;

use crate::config::DEFAULT_CONFIG_PATH;

/// ipscope - IPv4 geolocation report service
#[derive(Parser, Debug)]
#[command(name = "ipscope")]
#[command(version)]
#[command(about = "Turns an IPv4 address into a ten-section geolocation report", long_about = None)]
pub struct Cli {
    /// Path to the TOML configuration file (missing file falls back to defaults)
    #[arg(long, short = 'c', default_value = DEFAULT_CONFIG_PATH)]
    pub config: String,

    /// Print a sample configuration file and exit
    #[arg(long)]
    pub print_config: bool,
}
