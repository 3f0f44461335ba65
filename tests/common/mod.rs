#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use recipe_search::{ApiConfig, RecipeSearchClient, SearchController};
use serde_json::{json, Value};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

pub const APP_ID: &str = "test-id";
pub const APP_KEY: &str = "test-key";

/// Canned HTTP response served for every request.
#[derive(Clone)]
pub struct StubResponse {
    pub status: u16,
    pub body: String,
    pub delay: Option<Duration>,
}

impl StubResponse {
    pub fn json(status: u16, body: Value) -> Self {
        Self {
            status,
            body: body.to_string(),
            delay: None,
        }
    }

    pub fn raw(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            delay: None,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

/// Minimal HTTP/1.1 server standing in for the recipe search API.
///
/// Records the request target of every request it receives.
pub struct StubServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl StubServer {
    pub async fn start(response: StubResponse) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind stub server");
        let addr = listener.local_addr().expect("Stub server has no address");
        let requests = Arc::new(Mutex::new(Vec::new()));

        let recorded = Arc::clone(&requests);
        tokio::spawn(async move {
            loop {
                let Ok((stream, _)) = listener.accept().await else {
                    break;
                };
                let recorded = Arc::clone(&recorded);
                let response = response.clone();
                tokio::spawn(async move {
                    let _ = serve(stream, response, recorded).await;
                });
            }
        });

        Self {
            base_url: format!("http://{}", addr),
            requests,
        }
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn controller(&self) -> SearchController<RecipeSearchClient> {
        SearchController::new(RecipeSearchClient::new(config_for(&self.base_url)))
    }
}

async fn serve(
    mut stream: TcpStream,
    response: StubResponse,
    recorded: Arc<Mutex<Vec<String>>>,
) -> std::io::Result<()> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = stream.read(&mut chunk).await?;
        if n == 0 {
            return Ok(());
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    let head = String::from_utf8_lossy(&buf);
    let target = head
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or_default()
        .to_string();
    recorded.lock().unwrap().push(target);

    if let Some(delay) = response.delay {
        tokio::time::sleep(delay).await;
    }

    let reply = format!(
        "HTTP/1.1 {} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        response.status,
        response.body.len(),
        response.body
    );
    stream.write_all(reply.as_bytes()).await?;
    stream.shutdown().await
}

pub fn config_for(base_url: &str) -> ApiConfig {
    ApiConfig::new(APP_ID, APP_KEY)
        .with_base_url(base_url)
        .with_timeout(Duration::from_secs(5))
}

/// Base URL of a port nobody listens on.
pub async fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind probe listener");
    let addr = listener.local_addr().expect("Probe listener has no address");
    drop(listener);
    format!("http://{}", addr)
}

pub fn hit(label: &str) -> Value {
    json!({
        "recipe": {
            "uri": format!("http://www.edamam.com/ontologies/edamam.owl#recipe_{}", label.replace(' ', "_")),
            "label": label,
            "image": format!("https://images.example.com/{}.jpg", label.replace(' ', "-")),
            "source": "Test Kitchen",
            "url": "https://example.com/recipe",
            "yield": 2.0,
            "healthLabels": ["Peanut-Free"],
            "ingredientLines": ["1 chicken"],
            "calories": 800.0,
            "totalTime": 30.0,
            "cuisineType": ["american"],
            "totalNutrients": {}
        },
        "_links": {}
    })
}

pub fn hits_body(labels: &[&str]) -> Value {
    json!({
        "from": 1,
        "to": labels.len(),
        "count": labels.len(),
        "hits": labels.iter().map(|label| hit(label)).collect::<Vec<_>>()
    })
}

pub fn init_test_logging() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}
