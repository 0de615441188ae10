//! Test context for unified test setup
//!
//! Wires an in-memory store and the mock AI provider into the application
//! filters, and optionally serves them on an ephemeral port.

use std::net::SocketAddr;
use std::sync::Arc;
use tempfile::TempDir;
use tokio::sync::oneshot;
use EduCenter::config::AiConfig;
use EduCenter::database::MemoryStore;
use EduCenter::{server, AiService, ApiClient, AppState};

use super::ai_mock::{AiMockServer, TEST_API_KEY, TEST_MODEL};

pub const INDEX_HTML: &str = "<!doctype html><title>EduCenter</title><div id=\"root\"></div>";

/// Unified test context that manages all test components
pub struct TestContext {
    pub state: AppState,
    pub ai_mock: AiMockServer,
    /// Static bundle with `index.html` and `assets/app.js`
    pub static_dir: TempDir,
}

impl TestContext {
    pub async fn new() -> Self {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();

        let ai_mock = AiMockServer::new().await;
        let ai = AiService::new(AiConfig {
            api_key: TEST_API_KEY.to_string(),
            api_url: ai_mock.uri(),
            model: TEST_MODEL.to_string(),
            timeout_seconds: 5,
        })
        .expect("Failed to create AI service");

        let static_dir = tempfile::tempdir().expect("Failed to create static dir");
        std::fs::write(static_dir.path().join("index.html"), INDEX_HTML).expect("Failed to write index");
        std::fs::create_dir(static_dir.path().join("assets")).expect("Failed to create assets dir");
        std::fs::write(static_dir.path().join("assets/app.js"), "console.log('app');").expect("Failed to write asset");

        let state = AppState::new(Arc::new(MemoryStore::new()), ai);

        Self { state, ai_mock, static_dir }
    }

    /// All application routes, as served in production
    pub fn routes(&self) -> impl warp::Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
        server::routes(self.state.clone(), self.static_dir.path().to_path_buf())
    }

    /// Serve on an ephemeral port until the returned handle is dropped
    pub async fn spawn(&self) -> RunningServer {
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let addr: SocketAddr = ([127, 0, 0, 1], 0).into();

        let (addr, server) = server::bind(addr, self.state.clone(), self.static_dir.path().to_path_buf(), async move {
            shutdown_rx.await.ok();
        })
        .expect("Failed to bind test server");
        tokio::spawn(server);

        RunningServer {
            addr,
            _shutdown: shutdown_tx,
        }
    }
}

/// A server running in the background
pub struct RunningServer {
    pub addr: SocketAddr,
    _shutdown: oneshot::Sender<()>,
}

impl RunningServer {
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn client(&self) -> ApiClient {
        ApiClient::new(&self.base_url()).expect("Failed to create API client")
    }
}
