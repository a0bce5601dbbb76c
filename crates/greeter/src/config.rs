//! Server configuration from command-line flags and environment variables.

use clap::Parser;
use tracing_subscriber::EnvFilter;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 80;
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Server configuration.
///
/// Each value is taken from its flag first, then its environment variable:
/// - `--host` / `HOST` — bind address (default: `"0.0.0.0"`)
/// - `--port` / `PORT` — listen port (default: `80`)
/// - `--log-level` / `RUST_LOG` — tracing filter directive (default: `"info"`)
///
/// An empty or malformed value is rejected at parse time.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "greeter")]
#[command(about = "Serves a fixed JSON greeting on GET /")]
pub struct Config {
    #[arg(long, env = "HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    #[arg(
        long = "log-level",
        env = "RUST_LOG",
        default_value = DEFAULT_LOG_LEVEL,
        value_parser = parse_log_level
    )]
    pub log_level: String,
}

impl Config {
    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Builds the tracing filter for `log_level`.
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::new(&self.log_level)
    }
}

fn parse_log_level(directive: &str) -> Result<String, String> {
    EnvFilter::try_new(directive)
        .map(|_| directive.to_string())
        .map_err(|err| err.to_string())
}
