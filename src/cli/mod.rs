// CLI module for gemini-relay
// Author: kelexine (https://github.com/kelexine)

use crate::config::AppConfig;
use clap::Parser;
use std::path::PathBuf;

/// gemini-relay - prompt relay in front of the Google Gemini API
#[derive(Parser, Debug, Default)]
#[command(name = "gemini-relay", version, about, long_about = None)]
pub struct Args {
    /// Path to a TOML config file (default: ~/.gemini-relay/config.toml)
    #[arg(short, long, env = "GEMINI_RELAY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Address to bind, overrides server.host
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on, overrides server.port
    #[arg(short, long)]
    pub port: Option<u16>,
}

impl Args {
    /// Apply flag overrides on top of the loaded configuration.
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let args = Args::parse_from(["gemini-relay", "--host", "127.0.0.1", "--port", "9000"]);
        let mut config = AppConfig::default();
        args.apply(&mut config);

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9000);
    }

    #[test]
    fn test_no_flags_keep_config() {
        let args = Args::parse_from(["gemini-relay"]);
        let mut config = AppConfig::default();
        args.apply(&mut config);

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8000);
    }
}
