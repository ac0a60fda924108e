//! CLI parser
use clap::Parser;
use std::num::NonZeroU16;

use crate::constants::DEFAULT_DATABASE_PATH;

#[derive(Parser, Debug)]
/// CLI Options
pub struct CliOptions {
    #[clap(long, help = "Enable debug logging", env = "USERVEHICLE_DEBUG")]
    /// Enable debug logging. Env: USERVEHICLE_DEBUG
    pub debug: bool,
    #[clap(long, short, default_value = "9000", env = "USERVEHICLE_PORT")]
    /// http listener, defaults to `9000`.
    /// Env: USERVEHICLE_PORT
    pub port: NonZeroU16,
    #[clap(
        long,
        short,
        default_value = "127.0.0.1",
        env = "USERVEHICLE_LISTEN_ADDRESS"
    )]
    /// Listen address, defaults to `127.0.0.1`.
    /// Env: USERVEHICLE_LISTEN_ADDRESS
    pub listen_address: String,

    #[clap(long, short, default_value = DEFAULT_DATABASE_PATH, env = "USERVEHICLE_DATABASE_PATH")]
    /// Path to the database file, eg `/data/uservehicle.sqlite`.
    /// Env: USERVEHICLE_DATABASE_PATH
    pub database_path: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_flags() {
        let cli = CliOptions::try_parse_from(["uservehicle"]).expect("parse defaults");
        assert!(!cli.debug);
        assert_eq!(cli.port.get(), 9000);
        assert_eq!(cli.listen_address, "127.0.0.1");
        assert_eq!(cli.database_path, DEFAULT_DATABASE_PATH);
    }

    #[test]
    fn zero_port_is_rejected() {
        assert!(CliOptions::try_parse_from(["uservehicle", "--port", "0"]).is_err());
    }
}
