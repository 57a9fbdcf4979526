use nodeview_consul::{ConsulClient, ConsulConfig, ConsulError};
use nodeview_core::{
    InterfaceError, InterfaceInspector, NodeClassifier, PrefixClassifier, RenderError,
    SystemInterfaces, classify_nodes, render_page,
};
use reqwest::Client;
use std::convert::Infallible;
use std::net::Ipv4Addr;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};
use warp::Reply;
use warp::http::StatusCode;
use warp::reply::Response;

/// Settings the status page needs on every request. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageConfig {
    pub iface: String,
    pub datacenter: String,
    pub consul_port: u16,
    pub consul_scheme: String,
    pub consul_token: Option<String>,
    /// Use 500/502 for failures instead of 200
    pub error_status: bool,
}

#[derive(Error, Debug)]
pub enum PageError {
    #[error("Failed to get local IP: {0}")]
    LocalIp(#[from] InterfaceError),

    #[error("Failed to connect to Consul: {0}")]
    Connect(#[source] ConsulError),

    #[error("Failed to get Consul nodes: {0}")]
    Query(#[source] ConsulError),

    #[error("Failed to render template: {0}")]
    Render(#[from] RenderError),
}

impl PageError {
    /// Plain-text body sent to the client.
    pub fn body(&self) -> &'static str {
        match self {
            PageError::LocalIp(_) => "Failed to get local IP\n",
            PageError::Connect(_) => "Failed to connect to Consul\n",
            PageError::Query(_) => "Failed to get Consul nodes\n",
            PageError::Render(_) => "Failed to render template\n",
        }
    }

    /// Status used when distinct failure codes are enabled.
    pub fn status(&self) -> StatusCode {
        match self {
            PageError::LocalIp(_) | PageError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
            PageError::Connect(_) | PageError::Query(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

/// Everything a request to the status page needs. Cheap to clone; all
/// shared parts are read-only.
#[derive(Clone)]
pub struct StatusPage {
    config: Arc<PageConfig>,
    inspector: Arc<dyn InterfaceInspector>,
    classifier: Arc<dyn NodeClassifier>,
    http: Client,
}

impl StatusPage {
    pub fn new(config: PageConfig, http: Client) -> Self {
        Self {
            config: Arc::new(config),
            inspector: Arc::new(SystemInterfaces),
            classifier: Arc::new(PrefixClassifier::default()),
            http,
        }
    }

    pub fn with_inspector(mut self, inspector: impl InterfaceInspector + 'static) -> Self {
        self.inspector = Arc::new(inspector);
        self
    }

    pub fn with_classifier(mut self, classifier: impl NodeClassifier + 'static) -> Self {
        self.classifier = Arc::new(classifier);
        self
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    fn consul_config(&self, local_address: Ipv4Addr) -> ConsulConfig {
        let mut consul = ConsulConfig::new(format!("{}:{}", local_address, self.config.consul_port))
            .with_scheme(self.config.consul_scheme.as_str())
            .with_datacenter(self.config.datacenter.as_str());
        if let Some(ref token) = self.config.consul_token {
            consul = consul.with_token(token.as_str());
        }
        consul
    }

    /// Resolve the local address, list the catalog and render the page.
    pub async fn build(&self) -> Result<String, PageError> {
        let local_address = self.inspector.primary_ipv4(&self.config.iface)?;

        let client = ConsulClient::with_http_client(self.consul_config(local_address), self.http.clone())
            .map_err(PageError::Connect)?;

        let nodes = client.catalog().nodes().await.map_err(PageError::Query)?;

        let data = classify_nodes(nodes, local_address, self.classifier.as_ref());
        debug!(
            "Rendering {} nodes, current: {:?}",
            data.total(),
            data.current_node().map(|n| n.name.as_str())
        );

        Ok(render_page(&data)?)
    }

    fn failure(&self, error: &PageError) -> Response {
        let status = if self.config.error_status {
            error.status()
        } else {
            StatusCode::OK
        };
        warp::reply::with_status(error.body(), status).into_response()
    }
}

/// GET / - the node list
pub async fn status_page(page: StatusPage) -> Result<Response, Infallible> {
    match page.build().await {
        Ok(html) => Ok(warp::reply::html(html).into_response()),
        Err(e) => {
            warn!("{}", e);
            Ok(page.failure(&e))
        }
    }
}

/// GET /health - liveness, never touches Consul
pub async fn health() -> Result<impl Reply, Infallible> {
    Ok("OK\n")
}
