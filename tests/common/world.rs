use anyhow::{anyhow, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use cucumber::World;
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use postline::config::BlogProfile;
use postline::io::{MockEventStream, MockRenderStream};
use postline::AppController;

pub type TestController = AppController<MockEventStream, MockRenderStream>;

/// Terminal size used for every scenario
pub const SCREEN_SIZE: (u16, u16) = (100, 24);

/// Scenario state: a mock post store and the real controller running on
/// scripted I/O
#[derive(World)]
#[world(init = Self::new)]
pub struct PostlineWorld {
    /// Mock post store, started by the first Given step that needs it
    pub mock_server: Option<MockServer>,

    /// Base URL overriding the mock server, used for unreachable stores
    pub base_url_override: Option<String>,

    /// Posts the store holds at start-up
    pub posts: Vec<Value>,

    /// The application, once started
    pub app: Option<TestController>,
}

impl std::fmt::Debug for PostlineWorld {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostlineWorld")
            .field("mock_server", &self.mock_server.as_ref().map(MockServer::uri))
            .field("base_url_override", &self.base_url_override)
            .field("posts", &self.posts.len())
            .field("app_started", &self.app.is_some())
            .finish()
    }
}

impl PostlineWorld {
    pub fn new() -> Self {
        Self {
            mock_server: None,
            base_url_override: None,
            posts: Vec::new(),
            app: None,
        }
    }

    /// Start the mock post store if it is not running yet
    pub async fn server(&mut self) -> &MockServer {
        if self.mock_server.is_none() {
            self.mock_server = Some(MockServer::start().await);
        }
        self.mock_server
            .as_ref()
            .expect("mock server was just started")
    }

    /// Serve `posts` from `GET /posts` and each one from `GET /posts/{id}`
    pub async fn mount_posts(&mut self, posts: Vec<Value>) {
        let server = self.server().await;

        Mock::given(method("GET"))
            .and(path("/posts"))
            .respond_with(ResponseTemplate::new(200).set_body_json(Value::Array(posts.clone())))
            .mount(server)
            .await;

        for post in &posts {
            Mock::given(method("GET"))
                .and(path(format!("/posts/{}", post["id"])))
                .respond_with(ResponseTemplate::new(200).set_body_json(post.clone()))
                .mount(server)
                .await;
        }

        self.posts = posts;
    }

    /// Respond to `verb path` with `status` and a plain-text body.
    /// Mounted with priority so it wins over the default post mocks.
    pub async fn mount_failure(&mut self, verb: &str, url_path: &str, status: u16) {
        let server = self.server().await;
        Mock::given(method(verb))
            .and(path(url_path))
            .respond_with(ResponseTemplate::new(status).set_body_string("store failure"))
            .with_priority(1)
            .mount(server)
            .await;
    }

    /// Respond to `verb path` with `status` and `body`
    pub async fn mount_json(&mut self, verb: &str, url_path: &str, status: u16, body: Value) {
        let server = self.server().await;
        Mock::given(method(verb))
            .and(path(url_path))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(server)
            .await;
    }

    /// Stored post with `id`, as served at start-up
    pub fn post(&self, id: u64) -> Result<Value> {
        self.posts
            .iter()
            .find(|post| post["id"] == json!(id))
            .cloned()
            .ok_or_else(|| anyhow!("No post {id} in the store"))
    }

    /// Create the controller, run the start-up flows and wait for them
    pub async fn start_app(&mut self) -> Result<()> {
        let base_url = match &self.base_url_override {
            Some(url) => url.clone(),
            None => self.server().await.uri(),
        };
        let profile = BlogProfile::new("test", base_url);

        let mut app = AppController::with_io_streams(
            &profile,
            MockEventStream::empty(),
            MockRenderStream::with_size(SCREEN_SIZE),
        )?;
        app.start();
        app.settle().await?;
        self.app = Some(app);
        Ok(())
    }

    pub fn app(&self) -> &TestController {
        self.app.as_ref().expect("the app has not been started")
    }

    pub fn app_mut(&mut self) -> &mut TestController {
        self.app.as_mut().expect("the app has not been started")
    }

    pub fn screen(&self) -> &MockRenderStream {
        self.app().renderer().render_stream()
    }

    /// Press a named key and wait for any flow it started
    pub async fn press_key(&mut self, key: &str) -> Result<()> {
        let key_event = parse_key(key)?;
        let app = self.app_mut();
        app.process_key_event(key_event)?;
        app.settle().await
    }

    /// Type text one key at a time
    pub async fn type_text(&mut self, text: &str) -> Result<()> {
        for ch in text.chars() {
            self.app_mut()
                .process_key_event(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE))?;
        }
        self.app_mut().settle().await
    }

    /// Requests the store received with the given HTTP method
    pub async fn requests_with_method(&self, verb: &str) -> Vec<wiremock::Request> {
        let Some(server) = &self.mock_server else {
            return Vec::new();
        };
        server
            .received_requests()
            .await
            .unwrap_or_default()
            .into_iter()
            .filter(|request| request.method.as_str().eq_ignore_ascii_case(verb))
            .collect()
    }
}

impl Default for PostlineWorld {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_key(key: &str) -> Result<KeyEvent> {
    let key_event = match key {
        "Enter" => KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE),
        "Esc" | "Escape" => KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE),
        "Tab" => KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE),
        "Shift+Tab" => KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT),
        "Backspace" => KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE),
        "Up" => KeyEvent::new(KeyCode::Up, KeyModifiers::NONE),
        "Down" => KeyEvent::new(KeyCode::Down, KeyModifiers::NONE),
        "Ctrl+S" => KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL),
        "Ctrl+C" => KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        s if s.chars().count() == 1 => {
            let ch = s.chars().next().unwrap_or(' ');
            KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE)
        }
        _ => return Err(anyhow!("Unknown key: {key}")),
    };
    Ok(key_event)
}
