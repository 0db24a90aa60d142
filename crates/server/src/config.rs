//! # Configuration
//!
//! Command line arguments with environment fallbacks. A `.env` file in the
//! working directory is loaded before parsing, so every `STOREFRONT_*`
//! variable can live there.

use clap::{Args as ClapArgs, Parser, Subcommand};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;
use storefront_core::catalog::{CatalogConfig, DEFAULT_API_BASE_URL};

#[derive(Parser, Debug)]
#[command(author, version, about = "Storefront: product catalog, filters and cart")]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<CliCommand>,

    #[command(flatten)]
    pub catalog: CatalogArgs,

    #[command(flatten)]
    pub listen: ListenArgs,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Start the storefront server (default)
    Serve,
    /// Fetch the catalog once, print a summary and exit
    Check,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct CatalogArgs {
    /// Base URL of the catalog API
    #[arg(long, global = true, env = "STOREFRONT_API_BASE_URL", default_value = DEFAULT_API_BASE_URL)]
    pub api_base_url: String,

    /// Per-request timeout in seconds; 0 disables it
    #[arg(long, global = true, env = "STOREFRONT_REQUEST_TIMEOUT_SECS", default_value_t = 10)]
    pub request_timeout_secs: u64,
}

impl CatalogArgs {
    pub fn to_config(&self) -> CatalogConfig {
        let timeout = match self.request_timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        };
        CatalogConfig::new(self.api_base_url.as_str()).with_timeout(timeout)
    }
}

#[derive(ClapArgs, Debug, Clone)]
pub struct ListenArgs {
    /// Address to bind
    #[arg(long, global = true, env = "STOREFRONT_HOST", default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, global = true, env = "STOREFRONT_PORT", default_value_t = 8080)]
    pub port: u16,
}

impl ListenArgs {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_serve_on_localhost() {
        let args = Args::try_parse_from(["storefront"]).unwrap();
        assert_eq!(args.command, None);
        assert_eq!(args.listen.addr(), SocketAddr::from(([127, 0, 0, 1], 8080)));
        let config = args.catalog.to_config();
        assert_eq!(config.timeout, Some(Duration::from_secs(10)));
    }

    #[test]
    fn test_flags_after_subcommand() {
        let args = Args::try_parse_from([
            "storefront",
            "serve",
            "--port",
            "9000",
            "--api-base-url",
            "http://localhost:3000/",
            "--request-timeout-secs",
            "0",
        ])
        .unwrap();
        assert_eq!(args.command, Some(CliCommand::Serve));
        assert_eq!(args.listen.port, 9000);
        let config = args.catalog.to_config();
        assert_eq!(config.base_url, "http://localhost:3000");
        assert_eq!(config.timeout, None);
    }

    #[test]
    fn test_check_subcommand() {
        let args = Args::try_parse_from(["storefront", "check"]).unwrap();
        assert_eq!(args.command, Some(CliCommand::Check));
    }
}
