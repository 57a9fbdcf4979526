use crate::handlers::PageConfig;
use clap::ArgAction;
use clap::Parser;
use clap::builder::{FalseyValueParser, NonEmptyStringValueParser};
use nodeview_core::InterfaceInspector;
use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Interface '{0}' doesn't exist")]
    InterfaceNotFound(String),
}

/// Process configuration, read once at startup.
///
/// Every flag can also be given through the environment variable named
/// next to it.
#[derive(Parser, Debug, Clone)]
#[command(name = "nodeview", version, about = "Serve a status page listing the nodes of a Consul datacenter", long_about = None)]
pub struct Config {
    /// Network interface whose IPv4 address identifies this machine
    #[arg(long, env = "IFACE", value_parser = NonEmptyStringValueParser::new())]
    pub iface: String,

    /// Consul datacenter to list nodes from
    #[arg(long, env = "DATACENTER", value_parser = NonEmptyStringValueParser::new())]
    pub datacenter: String,

    /// Port the status page listens on
    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Port of the Consul agent's HTTP API on the local address
    #[arg(long, env = "CONSUL_PORT", default_value_t = 8500)]
    pub consul_port: u16,

    /// ACL token sent with catalog queries
    #[arg(long, env = "CONSUL_HTTP_TOKEN", hide_env_values = true)]
    pub consul_token: Option<String>,

    /// Talk to the Consul agent over https
    #[arg(long, env = "CONSUL_HTTP_SSL", action = ArgAction::SetTrue, value_parser = FalseyValueParser::new())]
    pub consul_ssl: bool,

    /// Give up on a catalog query after this many seconds (default: wait indefinitely)
    #[arg(long, env = "CONSUL_TIMEOUT", value_name = "SECONDS", value_parser = clap::value_parser!(u64).range(1..))]
    pub consul_timeout: Option<u64>,

    /// Nodes whose name starts with this prefix are listed as web nodes
    #[arg(long, env = "WEB_PREFIX", default_value = "web")]
    pub web_prefix: String,

    /// Answer failures with 500/502 instead of 200
    #[arg(long, env = "ERROR_STATUS", action = ArgAction::SetTrue, value_parser = FalseyValueParser::new())]
    pub error_status: bool,
}

impl Config {
    /// Checks that need the host, run before the listener starts.
    pub fn validate(&self, inspector: &dyn InterfaceInspector) -> Result<(), ConfigError> {
        if !inspector.exists(&self.iface) {
            return Err(ConfigError::InterfaceNotFound(self.iface.clone()));
        }
        Ok(())
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }

    pub fn consul_timeout(&self) -> Option<Duration> {
        self.consul_timeout.map(Duration::from_secs)
    }

    pub fn page_config(&self) -> PageConfig {
        PageConfig {
            iface: self.iface.clone(),
            datacenter: self.datacenter.clone(),
            consul_port: self.consul_port,
            consul_scheme: if self.consul_ssl { "https" } else { "http" }.to_string(),
            consul_token: self.consul_token.clone(),
            error_status: self.error_status,
        }
    }
}
