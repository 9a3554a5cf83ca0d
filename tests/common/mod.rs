#![allow(dead_code)]

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::{Context, Result};
use serde_json::{json, Value};
use tempfile::TempDir;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, UnixListener, UnixStream};

use devil_api::app::{app, AppState};
use devil_api::auth::AuthGate;
use devil_api::backend::SocketClient;

pub const API_KEY: &str = "test-devil-key";

/// What the fake daemon does with one request
#[derive(Debug, Clone)]
pub enum Reply {
    Json(Value),
    Raw(Vec<u8>),
    /// Keep the connection open without answering
    Hang,
}

type Responder = Arc<dyn Fn(&[String]) -> Reply + Send + Sync>;

/// A stand-in for the devil daemon listening on a UNIX socket in a temp dir.
/// Every request it receives is recorded.
pub struct FakeDaemon {
    _dir: TempDir,
    pub socket_path: PathBuf,
    requests: Arc<Mutex<Vec<Vec<String>>>>,
}

impl FakeDaemon {
    pub fn start<F>(responder: F) -> Result<Self>
    where
        F: Fn(&[String]) -> Reply + Send + Sync + 'static,
    {
        let dir = tempfile::tempdir().context("failed to create socket dir")?;
        let socket_path = dir.path().join("devil.sock");
        let listener = UnixListener::bind(&socket_path).context("failed to bind fake daemon")?;

        let requests = Arc::new(Mutex::new(Vec::new()));
        let responder: Responder = Arc::new(responder);

        let recorded = Arc::clone(&requests);
        tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                let recorded = Arc::clone(&recorded);
                let responder = Arc::clone(&responder);
                tokio::spawn(async move {
                    let _ = serve_one(stream, recorded, responder).await;
                });
            }
        });

        Ok(Self {
            _dir: dir,
            socket_path,
            requests,
        })
    }

    /// Reply `{"code":"OK","args":[...]}` echoing the received arguments
    pub fn echo() -> Result<Self> {
        Self::start(|args| Reply::Json(json!({"code": "OK", "args": args})))
    }

    pub fn requests(&self) -> Vec<Vec<String>> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> Option<Vec<String>> {
        self.requests().last().cloned()
    }
}

async fn serve_one(
    stream: UnixStream,
    recorded: Arc<Mutex<Vec<Vec<String>>>>,
    responder: Responder,
) -> Result<()> {
    let mut reader = BufReader::new(stream);
    let mut line = String::new();
    reader.read_line(&mut line).await?;

    let args: Vec<String> = serde_json::from_str(line.trim_end())?;
    recorded.lock().unwrap().push(args.clone());

    let mut stream = reader.into_inner();
    match responder(&args) {
        Reply::Json(value) => stream.write_all(value.to_string().as_bytes()).await?,
        Reply::Raw(bytes) => stream.write_all(&bytes).await?,
        Reply::Hang => {
            tokio::time::sleep(Duration::from_secs(30)).await;
            return Ok(());
        }
    }
    stream.shutdown().await?;
    Ok(())
}

/// The full router served in-process on a free local port
pub struct TestServer {
    pub base_url: String,
    pub client: reqwest::Client,
}

pub struct ServerOptions {
    pub socket_path: PathBuf,
    pub fail_threshold: u32,
    pub block: Duration,
    pub socket_timeout: Duration,
}

impl ServerOptions {
    pub fn new(socket_path: impl Into<PathBuf>) -> Self {
        Self {
            socket_path: socket_path.into(),
            fail_threshold: 5,
            block: Duration::from_secs(300),
            socket_timeout: Duration::from_secs(5),
        }
    }
}

impl TestServer {
    pub async fn start(options: ServerOptions) -> Result<Self> {
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let listener = TcpListener::bind(("127.0.0.1", port))
            .await
            .context("failed to bind test server")?;

        let state = AppState::new(
            Arc::new(SocketClient::new(options.socket_path, options.socket_timeout)),
            Arc::new(AuthGate::new(API_KEY, options.fail_threshold, options.block)),
        );
        let service = app(state).into_make_service_with_connect_info::<SocketAddr>();
        tokio::spawn(async move {
            let _ = axum::serve(listener, service).await;
        });

        Ok(Self {
            base_url: format!("http://127.0.0.1:{}", port),
            client: reqwest::Client::new(),
        })
    }

    /// Server wired to `daemon` with default auth settings
    pub async fn with_daemon(daemon: &FakeDaemon) -> Result<Self> {
        Self::start(ServerOptions::new(&daemon.socket_path)).await
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Request builder that already carries the API key
    pub fn authed(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        self.client
            .request(method, self.url(path))
            .header("X-API-Key", API_KEY)
    }
}
