//! One-shot loopback HTTP server standing in for the generation service.

use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

/// What the stub saw
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub request_line: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("request body is not JSON")
    }
}

/// Serves exactly one response, then stops
pub struct StubServer {
    pub endpoint: String,
    handle: JoinHandle<RecordedRequest>,
}

impl StubServer {
    pub fn start(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        let listener = TcpListener::bind("127.0.0.1:0").expect("failed to bind stub server");
        let port = listener.local_addr().expect("stub addr").port();

        let handle = thread::spawn(move || {
            let (stream, _) = listener.accept().expect("stub accept failed");
            let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));

            let mut request_line = String::new();
            reader
                .read_line(&mut request_line)
                .expect("read request line");

            let mut headers = Vec::new();
            loop {
                let mut line = String::new();
                reader.read_line(&mut line).expect("read header");
                let line = line.trim_end();
                if line.is_empty() {
                    break;
                }
                if let Some((key, value)) = line.split_once(':') {
                    headers.push((key.trim().to_string(), value.trim().to_string()));
                }
            }

            let length = headers
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case("content-length"))
                .and_then(|(_, value)| value.parse::<usize>().ok())
                .unwrap_or(0);
            let mut buf = vec![0u8; length];
            reader.read_exact(&mut buf).expect("read body");

            let mut stream = stream;
            let response = format!(
                "HTTP/1.1 {} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            stream
                .write_all(response.as_bytes())
                .expect("write response");
            stream.flush().expect("flush response");

            RecordedRequest {
                request_line: request_line.trim_end().to_string(),
                headers,
                body: String::from_utf8_lossy(&buf).to_string(),
            }
        });

        Self {
            endpoint: format!("http://127.0.0.1:{}/v1/chat/completions", port),
            handle,
        }
    }

    /// Wait for the single request and return it
    pub fn finish(self) -> RecordedRequest {
        self.handle.join().expect("stub server panicked")
    }
}
