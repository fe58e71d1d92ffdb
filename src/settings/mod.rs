use crate::config::DEFAULT_REDRAW_EVERY;
use crate::data_model::settings::AppSettings;
use clap::Parser;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Parser, Debug)]
#[command(name = "sryping", version)]
#[command(about = "Interactive ICMP/TCP latency monitor", long_about = None)]
pub struct CliArgs {
    /// Config file holding the ping mode and saved pings
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Extended mode clears the screen after this many probes
    #[arg(long, default_value_t = DEFAULT_REDRAW_EVERY)]
    redraw_every: usize,
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("redraw threshold must be greater than zero (got {value})")]
    InvalidRedrawEvery { value: usize },
}

pub fn load_from_cli() -> Result<AppSettings, SettingsError> {
    let args = CliArgs::parse();
    from_args(args)
}

pub fn from_args(args: CliArgs) -> Result<AppSettings, SettingsError> {
    if args.redraw_every == 0 {
        return Err(SettingsError::InvalidRedrawEvery {
            value: args.redraw_every,
        });
    }

    Ok(AppSettings {
        config_path: args.config,
        redraw_every: args.redraw_every,
    })
}
