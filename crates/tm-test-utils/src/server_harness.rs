//! Test server harness for E2E testing
//!
//! Provides TestMintServer for spawning real Token Minter instances in
//! tests. The harness builds its `Config` directly (no environment), so
//! suites can spawn deliberately misconfigured servers too.

use common::secret::SecretString;
use std::net::SocketAddr;
use std::sync::Arc;
use tm_service::config::{Config, DEFAULT_BIND_ADDRESS};
use tm_service::handlers::token_handler::AppState;
use tm_service::routes;
use tokio::task::JoinHandle;

/// Test harness for spawning the Token Minter server in E2E tests
///
/// # Example
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_mint_flow_e2e() -> Result<(), anyhow::Error> {
///     let server = TestMintServer::spawn("test-secret").await?;
///
///     let response = server
///         .client()
///         .post(format!("{}/api/v1/token", server.url()))
///         .header("x-authenticated-principal", "uid-123")
///         .send()
///         .await?;
///
///     assert_eq!(response.status(), 200);
///     Ok(())
/// }
/// ```
pub struct TestMintServer {
    addr: SocketAddr,
    client: reqwest::Client,
    _handle: JoinHandle<()>,
}

impl TestMintServer {
    /// Spawn a new test server instance with the given signing secret
    ///
    /// The server binds to a random available port (127.0.0.1:0) and
    /// starts the HTTP server in the background. The secret may be empty
    /// to exercise the misconfigured-server paths.
    pub async fn spawn(signing_secret: &str) -> Result<Self, anyhow::Error> {
        let config = Config {
            // Placeholder only; the harness binds port 0 below
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            signing_secret: SecretString::from(signing_secret.to_string()),
        };

        Self::spawn_with_config(config).await
    }

    /// Spawn a new test server instance from a prebuilt configuration
    pub async fn spawn_with_config(config: Config) -> Result<Self, anyhow::Error> {
        // Create application state
        let state = Arc::new(AppState { config });

        // Initialize metrics recorder for the test server.
        // Note: This may fail if already installed in the test process.
        // In that case, we create a new recorder without installing it
        // globally, so each test still has a working handle.
        let metrics_handle = match routes::init_metrics_recorder() {
            Ok(handle) => handle,
            Err(_) => {
                use metrics_exporter_prometheus::PrometheusBuilder;
                let recorder = PrometheusBuilder::new().build_recorder();
                recorder.handle()
            }
        };

        // Build routes using tm-service's real route builder
        let app = routes::build_routes(state, metrics_handle);

        // Bind to random port
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .map_err(|e| anyhow::anyhow!("Failed to bind test server: {}", e))?;

        let addr = listener
            .local_addr()
            .map_err(|e| anyhow::anyhow!("Failed to get local address: {}", e))?;

        // Spawn server in background
        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                eprintln!("Test server error: {}", e);
            }
        });

        Ok(Self {
            addr,
            client: reqwest::Client::new(),
            _handle: handle,
        })
    }

    /// Get the base URL of the test server
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Get the socket address
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Get the shared HTTP client
    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }
}
