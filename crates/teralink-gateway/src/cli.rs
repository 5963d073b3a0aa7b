use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;
use teralink_core::provider::DEFAULT_PROVIDER_DOMAIN;
use teralink_core::ProviderGate;
use teralink_telemetry::LogFormat;
use teralink_upstream::{UpstreamConfig, DEFAULT_BASE_URL};

pub const LISTEN_ADDR_ENV: &str = "TERALINK_LISTEN_ADDR";
pub const PORT_ENV: &str = "PORT";
pub const UPSTREAM_BASE_URL_ENV: &str = "TERALINK_UPSTREAM_BASE_URL";
pub const UPSTREAM_TIMEOUT_MS_ENV: &str = "TERALINK_UPSTREAM_TIMEOUT_MS";
pub const ALLOWED_DOMAINS_ENV: &str = "TERALINK_ALLOWED_DOMAINS";
pub const STATIC_DIR_ENV: &str = "TERALINK_STATIC_DIR";
pub const LOG_FORMAT_ENV: &str = "TERALINK_LOG_FORMAT";

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_UPSTREAM_TIMEOUT_MS: &str = "10000";
pub const DEFAULT_STATIC_DIR: &str = "public";

#[derive(Debug, Parser)]
#[command(name = "teralink-gateway")]
pub struct CLI {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    /// Overrides the port of `--listen-addr`, as injected by PaaS hosts.
    #[arg(long, env = PORT_ENV)]
    pub port: Option<u16>,

    #[arg(long, env = UPSTREAM_BASE_URL_ENV, default_value = DEFAULT_BASE_URL)]
    pub upstream_base_url: String,

    #[arg(
        long,
        env = UPSTREAM_TIMEOUT_MS_ENV,
        default_value = DEFAULT_UPSTREAM_TIMEOUT_MS,
    )]
    pub upstream_timeout_ms: u64,

    #[arg(
        long = "allowed-domain",
        env = ALLOWED_DOMAINS_ENV,
        value_delimiter = ',',
        default_value = DEFAULT_PROVIDER_DOMAIN,
    )]
    pub allowed_domains: Vec<String>,

    #[arg(long, env = STATIC_DIR_ENV, default_value = DEFAULT_STATIC_DIR)]
    pub static_dir: PathBuf,

    #[arg(
        long,
        env = LOG_FORMAT_ENV,
        value_enum,
        default_value_t = LogFormat::Text
    )]
    pub log_format: LogFormat,
}

impl CLI {
    /// The address to bind, with `--port` taking precedence over the port
    /// in `--listen-addr`.
    pub fn bind_addr(&self) -> SocketAddr {
        match self.port {
            Some(port) => SocketAddr::new(self.listen_addr.ip(), port),
            None => self.listen_addr,
        }
    }

    pub fn upstream_config(&self) -> UpstreamConfig {
        UpstreamConfig::builder()
            .base_url(self.upstream_base_url.clone())
            .timeout(Duration::from_millis(self.upstream_timeout_ms))
            .build()
    }

    pub fn provider_gate(&self) -> ProviderGate {
        ProviderGate::new(self.allowed_domains.iter().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = CLI::try_parse_from(["gateway"]).unwrap();
        assert_eq!(cli.listen_addr, "0.0.0.0:3000".parse::<SocketAddr>().unwrap());
        assert_eq!(cli.bind_addr(), cli.listen_addr);
        assert_eq!(cli.upstream_base_url, DEFAULT_BASE_URL);
        assert_eq!(cli.upstream_config().timeout, Duration::from_secs(10));
        assert_eq!(cli.provider_gate(), ProviderGate::default());
        assert_eq!(cli.static_dir, PathBuf::from("public"));
        assert_eq!(cli.log_format, LogFormat::Text);
    }

    #[test]
    fn overrides() {
        let cli = CLI::try_parse_from([
            "gateway",
            "--listen-addr",
            "127.0.0.1:8080",
            "--upstream-base-url",
            "http://localhost:9000/api",
            "--upstream-timeout-ms",
            "2500",
            "--allowed-domain",
            "1024terabox.com,teraboxapp.com",
            "--log-format",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.listen_addr.port(), 8080);
        assert_eq!(cli.upstream_config().base_url, "http://localhost:9000/api");
        assert_eq!(cli.upstream_config().timeout, Duration::from_millis(2500));
        assert_eq!(
            cli.provider_gate().domains(),
            ["1024terabox.com".to_string(), "teraboxapp.com".to_string()]
        );
        assert_eq!(cli.log_format, LogFormat::Json);
    }

    #[test]
    fn port_overrides_listen_addr_port() {
        let cli = CLI::try_parse_from(["gateway", "--port", "8081"]).unwrap();
        assert_eq!(cli.port, Some(8081));
        assert_eq!(cli.bind_addr(), "0.0.0.0:8081".parse::<SocketAddr>().unwrap());

        let cli = CLI::try_parse_from([
            "gateway",
            "--listen-addr",
            "127.0.0.1:9000",
            "--port",
            "5000",
        ])
        .unwrap();
        assert_eq!(cli.bind_addr(), "127.0.0.1:5000".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn rejects_bad_port() {
        assert!(CLI::try_parse_from(["gateway", "--port", "70000"]).is_err());
    }

    #[test]
    fn rejects_bad_listen_addr() {
        assert!(CLI::try_parse_from(["gateway", "--listen-addr", "nowhere"]).is_err());
    }
}
