//! Minimal HTTP/1.1 server for integration tests.
//!
//! Serves fixed bodies per path, 404 for anything else. Routes can be delayed
//! or redirected, and every request's path and User-Agent are recorded.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
enum Route {
    Body {
        status: u16,
        body: Vec<u8>,
        delay: Option<Duration>,
    },
    Redirect(String),
}

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub user_agent: Option<String>,
}

#[derive(Debug, Default)]
pub struct ServerBuilder {
    routes: HashMap<String, Route>,
}

impl ServerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` with 200 at `path` (e.g. "/1.jpg").
    pub fn body(mut self, path: &str, body: impl Into<Vec<u8>>) -> Self {
        self.routes.insert(
            path.to_string(),
            Route::Body {
                status: 200,
                body: body.into(),
                delay: None,
            },
        );
        self
    }

    /// Like `body` but sleeps `delay` before answering.
    pub fn slow_body(mut self, path: &str, body: impl Into<Vec<u8>>, delay: Duration) -> Self {
        self.routes.insert(
            path.to_string(),
            Route::Body {
                status: 200,
                body: body.into(),
                delay: Some(delay),
            },
        );
        self
    }

    pub fn status(mut self, path: &str, status: u16) -> Self {
        self.routes.insert(
            path.to_string(),
            Route::Body {
                status,
                body: Vec::new(),
                delay: None,
            },
        );
        self
    }

    /// 302 from `path` to `location`.
    pub fn redirect(mut self, path: &str, location: &str) -> Self {
        self.routes
            .insert(path.to_string(), Route::Redirect(location.to_string()));
        self
    }

    /// Starts the server on a background thread. It runs until the process exits.
    pub fn start(self) -> ImageServer {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let port = listener.local_addr().unwrap().port();
        let routes = Arc::new(self.routes);
        let requests: Arc<Mutex<Vec<RecordedRequest>>> = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&requests);
        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                let routes = Arc::clone(&routes);
                let log = Arc::clone(&log);
                thread::spawn(move || handle(stream, &routes, &log));
            }
        });
        ImageServer {
            base: format!("http://127.0.0.1:{}", port),
            requests,
        }
    }
}

pub struct ImageServer {
    base: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl ImageServer {
    /// Absolute URL for `path` (which must start with '/').
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn requested_paths(&self) -> Vec<String> {
        self.requests().into_iter().map(|r| r.path).collect()
    }
}

fn handle(
    mut stream: std::net::TcpStream,
    routes: &HashMap<String, Route>,
    log: &Mutex<Vec<RecordedRequest>>,
) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(5)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let recorded = parse_request(request);
    let path = recorded.path.clone();
    log.lock().unwrap().push(recorded);

    match routes.get(&path) {
        Some(Route::Body {
            status,
            body,
            delay,
        }) => {
            if let Some(d) = delay {
                thread::sleep(*d);
            }
            let head = format!(
                "HTTP/1.1 {} {}\r\nContent-Length: {}\r\nContent-Type: image/jpeg\r\nConnection: close\r\n\r\n",
                status,
                reason(*status),
                body.len()
            );
            let _ = stream.write_all(head.as_bytes());
            let _ = stream.write_all(body);
        }
        Some(Route::Redirect(location)) => {
            let head = format!(
                "HTTP/1.1 302 Found\r\nLocation: {}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
                location
            );
            let _ = stream.write_all(head.as_bytes());
        }
        None => {
            let _ = stream.write_all(
                b"HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
            );
        }
    }
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        403 => "Forbidden",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Status",
    }
}

fn parse_request(request: &str) -> RecordedRequest {
    let mut path = String::new();
    let mut user_agent = None;
    for line in request.lines() {
        let line = line.trim();
        if line.is_empty() {
            break;
        }
        if path.is_empty() {
            path = line.split_whitespace().nth(1).unwrap_or("").to_string();
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name.trim().eq_ignore_ascii_case("user-agent") {
                user_agent = Some(value.trim().to_string());
            }
        }
    }
    RecordedRequest { path, user_agent }
}
