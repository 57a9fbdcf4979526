use crate::catalog::{CatalogNode, NodeList};
use crate::error::{ConsulError, Result};
use reqwest::Client;
use reqwest::header::HeaderMap;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

pub const DEFAULT_ADDRESS: &str = "127.0.0.1:8500";
pub const DEFAULT_SCHEME: &str = "http";

const TOKEN_HEADER: &str = "X-Consul-Token";
const INDEX_HEADER: &str = "X-Consul-Index";
const KNOWN_LEADER_HEADER: &str = "X-Consul-KnownLeader";

/// Where and how to reach a Consul agent.
#[derive(Debug, Clone)]
pub struct ConsulConfig {
    /// `host:port` of the agent's HTTP API
    pub address: String,
    pub scheme: String,
    pub datacenter: Option<String>,
    pub token: Option<String>,
    /// Applied to the whole request. `None` waits as long as the agent does.
    pub timeout: Option<Duration>,
}

impl Default for ConsulConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS.to_string(),
            scheme: DEFAULT_SCHEME.to_string(),
            datacenter: None,
            token: None,
            timeout: None,
        }
    }
}

impl ConsulConfig {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            ..Self::default()
        }
    }

    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = scheme.into();
        self
    }

    pub fn with_datacenter(mut self, datacenter: impl Into<String>) -> Self {
        self.datacenter = Some(datacenter.into());
        self
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    fn base_url(&self) -> Result<Url> {
        let raw = format!("{}://{}/", self.scheme, self.address);
        let url = Url::parse(&raw)
            .map_err(|e| ConsulError::InvalidAddress(format!("{}: {}", raw, e)))?;

        if url.host_str().is_none() || url.path() != "/" {
            return Err(ConsulError::InvalidAddress(raw));
        }

        Ok(url)
    }
}

/// Build the HTTP client used for catalog queries.
///
/// Pooled connections are kept so a shared client can serve many
/// short-lived [`ConsulClient`]s.
pub fn build_http_client(timeout: Option<Duration>) -> Result<Client> {
    let mut builder = Client::builder()
        .user_agent(concat!("nodeview/", env!("CARGO_PKG_VERSION")))
        .pool_idle_timeout(Duration::from_secs(90))
        .tcp_keepalive(Duration::from_secs(60));

    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout).connect_timeout(timeout);
    }

    Ok(builder.build()?)
}

pub struct ConsulClient {
    http: Client,
    base_url: Url,
    datacenter: Option<String>,
    token: Option<String>,
}

impl ConsulClient {
    pub fn new(config: ConsulConfig) -> Result<Self> {
        let http = build_http_client(config.timeout)?;
        Self::with_http_client(config, http)
    }

    /// Reuse an existing HTTP client. The config's timeout is ignored here;
    /// it belongs to whoever built `http`.
    pub fn with_http_client(config: ConsulConfig, http: Client) -> Result<Self> {
        let base_url = config.base_url()?;
        debug!("Consul client for {}", base_url);

        Ok(Self {
            http,
            base_url,
            datacenter: config.datacenter,
            token: config.token,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn catalog(&self) -> Catalog<'_> {
        Catalog { client: self }
    }
}

/// Handle for the `/v1/catalog` endpoints.
pub struct Catalog<'a> {
    client: &'a ConsulClient,
}

impl Catalog<'_> {
    /// List every node registered in the configured datacenter.
    pub async fn nodes(&self) -> Result<NodeList> {
        let url = self
            .client
            .base_url
            .join("v1/catalog/nodes")
            .map_err(|e| ConsulError::InvalidAddress(e.to_string()))?;

        let mut request = self.client.http.get(url.clone());
        if let Some(ref datacenter) = self.client.datacenter {
            request = request.query(&[("dc", datacenter)]);
        }
        if let Some(ref token) = self.client.token {
            request = request.header(TOKEN_HEADER, token);
        }

        debug!("Querying {}", url);
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ConsulError::UnexpectedStatus {
                status: status.as_u16(),
                body: body.trim().to_string(),
            });
        }

        let last_index = header_str(response.headers(), INDEX_HEADER).and_then(|v| v.parse().ok());
        let known_leader =
            header_str(response.headers(), KNOWN_LEADER_HEADER).and_then(|v| v.parse().ok());

        let body = response.bytes().await?;
        // An empty catalog may come back as `null`
        let nodes: Option<Vec<CatalogNode>> = serde_json::from_slice(&body)?;
        let nodes = nodes.unwrap_or_default();

        info!(
            "Catalog returned {} nodes (index {:?})",
            nodes.len(),
            last_index
        );

        Ok(NodeList {
            nodes,
            last_index,
            known_leader,
        })
    }
}

fn header_str<'h>(headers: &'h HeaderMap, name: &str) -> Option<&'h str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}
