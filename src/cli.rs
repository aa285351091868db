//! Command-line interface.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{load_config, ClientConfig, ConfigError};

#[derive(Debug, Parser)]
#[command(name = "noclist")]
#[command(about = "Retrieve the NOC list from a BadSec server", long_about = None)]
pub struct Cli {
    /// Server host and port [default: http://0.0.0.0:8888]
    #[arg(long)]
    pub host: Option<String>,

    /// Optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log filter, e.g. "noclist=debug"
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Cli {
    /// Merge the config file (if any) with CLI overrides. Not validated yet.
    pub fn resolve_config(&self) -> Result<ClientConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => ClientConfig::default(),
        };
        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_HOST;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["noclist"]).unwrap();
        let config = cli.resolve_config().unwrap();
        assert_eq!(config.host, DEFAULT_HOST);
        assert!(cli.log_level.is_none());
    }

    #[test]
    fn test_host_flag() {
        let cli = Cli::try_parse_from(["noclist", "--host", "http://fakehost"]).unwrap();
        assert_eq!(cli.resolve_config().unwrap().host, "http://fakehost");
    }

    #[test]
    fn test_host_flag_overrides_file() {
        let path = std::env::temp_dir().join(format!("noclist-cli-{}.toml", std::process::id()));
        let contents = "host = \"http://from-file:1\"\n[timeouts]\nconnect_ms = 10\n";
        std::fs::write(&path, contents).unwrap();

        let file_only = Cli::try_parse_from(["noclist", "-c", path.to_str().unwrap()]).unwrap();
        assert_eq!(file_only.resolve_config().unwrap().host, "http://from-file:1");

        let both = Cli::try_parse_from([
            "noclist",
            "--config",
            path.to_str().unwrap(),
            "--host",
            "http://from-cli:2",
        ])
        .unwrap();
        let config = both.resolve_config().unwrap();
        assert_eq!(config.host, "http://from-cli:2");
        assert_eq!(config.timeouts.connect_ms, 10);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_unknown_flag_rejected() {
        assert!(Cli::try_parse_from(["noclist", "--port", "1"]).is_err());
    }
}
