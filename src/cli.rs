//! Command-line arguments for the terminal binary.

use std::path::PathBuf;

use anyhow::{anyhow, Result};

use crate::types::TICK_MS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    /// Optional TOML tuning file.
    pub config: Option<PathBuf>,
    /// RNG seed; `None` seeds from entropy.
    pub seed: Option<u64>,
    /// Log destination. Logging is off unless this is set (or `RUST_LOG` is).
    pub log_file: Option<PathBuf>,
    pub tick_ms: u32,
    /// Print the effective config as TOML and exit.
    pub print_config: bool,
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            config: None,
            seed: None,
            log_file: None,
            tick_ms: TICK_MS,
            print_config: false,
        }
    }
}

pub const USAGE: &str = "usage: lane-runner [--config <path>] [--seed <u64>] \
[--log-file <path>] [--tick-ms <n>] [--print-config]";

/// Parse arguments, excluding the program name.
pub fn parse_args(args: &[String]) -> Result<CliArgs> {
    let mut out = CliArgs::default();
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                out.config = Some(PathBuf::from(value_for(args, &mut i, "--config")?));
            }
            "--seed" => {
                let v = value_for(args, &mut i, "--seed")?;
                out.seed = Some(
                    v.parse::<u64>()
                        .map_err(|_| anyhow!("invalid --seed value: {}", v))?,
                );
            }
            "--log-file" => {
                out.log_file = Some(PathBuf::from(value_for(args, &mut i, "--log-file")?));
            }
            "--tick-ms" => {
                let v = value_for(args, &mut i, "--tick-ms")?;
                out.tick_ms = match v.parse::<u32>() {
                    Ok(ms) if ms > 0 => ms,
                    _ => return Err(anyhow!("invalid --tick-ms value: {}", v)),
                };
            }
            "--print-config" => out.print_config = true,
            other => {
                return Err(anyhow!("unknown argument: {}\n{}", other, USAGE));
            }
        }
        i += 1;
    }
    Ok(out)
}

fn value_for<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("missing value for {}", flag))
}
