use assert_cmd::Command;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::Path;
use std::thread::{self, JoinHandle};

pub const PROUD: &str = r#"{"id":1691,"solution":"proud","print_date":"2024-06-15","days_since_launch":1092,"editor":"Tracy Bennett"}"#;

/// Environment that would leak the developer's setup into a test run
const SCRUBBED_VARS: &[&str] = &[
    "NTFY_URL",
    "WORDLE_API_BASE",
    "WORDLE_SOLUTIONS_DIR",
    "WORDLE_REQUIRE_NTFY",
    "WORDLE_STRICT_NTFY",
    "RUST_LOG",
    "HTTP_PROXY",
    "http_proxy",
    "HTTPS_PROXY",
    "https_proxy",
    "ALL_PROXY",
    "all_proxy",
];

/// The binary, run from `cwd` with a clean environment
pub fn cmd(cwd: &Path) -> Command {
    let mut cmd = Command::cargo_bin("wordle_daily").unwrap();
    cmd.current_dir(cwd);
    for var in SCRUBBED_VARS {
        cmd.env_remove(var);
    }
    cmd.env("NO_PROXY", "127.0.0.1,localhost");
    cmd
}

/// A request as the stub server saw it
#[derive(Debug)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn body_text(&self) -> String {
        String::from_utf8(self.body.clone()).expect("utf-8 request body")
    }
}

/// Minimal HTTP/1.1 server answering exactly one request with a canned response
pub struct StubServer {
    pub base_url: String,
    handle: JoinHandle<RecordedRequest>,
}

impl StubServer {
    pub fn start(status: u16, body: &str) -> Self {
        Self::start_with_length(status, body, body.len())
    }

    /// Like `start`, but advertises `content_length` bytes whatever `body` holds
    pub fn start_with_length(status: u16, body: &str, content_length: usize) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub server");
        let base_url = format!("http://{}/", listener.local_addr().unwrap());
        let body = body.to_string();

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().expect("accept connection");
            let request = read_request(&mut stream);

            let response = format!(
                "HTTP/1.1 {status} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                reason(status),
                content_length
            );
            stream.write_all(response.as_bytes()).expect("write response");
            stream.flush().expect("flush response");
            request
        });

        Self { base_url, handle }
    }

    /// Wait for the single request and return it
    pub fn request(self) -> RecordedRequest {
        self.handle.join().expect("stub server thread")
    }
}

fn read_request(stream: &mut impl Read) -> RecordedRequest {
    let mut buffer = Vec::new();
    let mut chunk = [0_u8; 1024];

    let header_end = loop {
        let read = stream.read(&mut chunk).expect("read request");
        assert!(read > 0, "connection closed before headers were complete");
        buffer.extend_from_slice(&chunk[..read]);
        if let Some(pos) = buffer.windows(4).position(|window| window == b"\r\n\r\n") {
            break pos;
        }
    };

    let head = String::from_utf8_lossy(&buffer[..header_end]).to_string();
    let mut lines = head.split("\r\n");
    let mut request_line = lines.next().unwrap_or_default().split_whitespace();
    let method = request_line.next().unwrap_or_default().to_string();
    let path = request_line.next().unwrap_or_default().to_string();

    let headers: Vec<(String, String)> = lines
        .filter_map(|line| line.split_once(':'))
        .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
        .collect();

    let content_length = headers
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.parse::<usize>().ok())
        .unwrap_or(0);

    let mut body = buffer[header_end + 4..].to_vec();
    while body.len() < content_length {
        let read = stream.read(&mut chunk).expect("read request body");
        assert!(read > 0, "connection closed before body was complete");
        body.extend_from_slice(&chunk[..read]);
    }

    RecordedRequest {
        method,
        path,
        headers,
        body,
    }
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Status",
    }
}
