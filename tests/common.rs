#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::path::PathBuf;
use std::thread::{self, JoinHandle};
use tempfile::TempDir;

/// Environment variables read by `Config::apply_env`.
pub const PLOG_ENV: &[&str] = &[
    "PLOG_BACKEND",
    "PLOG_STAGING",
    "PLOG_API_URL",
    "PLOG_API_TOKEN",
    "PLOG_TOKEN_FUNCTION_KEY",
    "PERSONIO_API_URL",
    "PERSONIO_API_KEY",
    "PERSONIO_API_SECRET",
];

/// 2024-01-01T09:00:00Z
pub const JAN1_0900: f64 = 1_704_099_600.0;
/// 2024-01-01T17:00:00Z
pub const JAN1_1700: f64 = 1_704_128_400.0;
/// 2024-01-01T23:00:00Z
pub const JAN1_2300: f64 = 1_704_150_000.0;
/// 2024-01-02T01:00:00Z
pub const JAN2_0100: f64 = 1_704_157_200.0;

/// A throwaway working directory that also acts as $HOME.
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    /// `plog` running inside the workspace with a scrubbed environment.
    pub fn plog(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("plog");
        cmd.current_dir(self.dir.path())
            .env("HOME", self.dir.path())
            .env("APPDATA", self.dir.path())
            .env("TZ", "UTC");
        for var in PLOG_ENV {
            cmd.env_remove(var);
        }
        cmd
    }

    pub fn staging(&self) -> PathBuf {
        self.dir.path().join("plog.staging")
    }

    pub fn read_staging(&self) -> Option<String> {
        fs::read_to_string(self.staging()).ok()
    }

    pub fn write_staging(&self, content: &str) {
        fs::write(self.staging(), content).expect("write staging file");
    }

    pub fn journal(&self) -> PathBuf {
        self.dir.path().join(".plog").join("plog.log")
    }
}

/// A request seen by [`serve`].
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl CapturedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

fn read_request(reader: &mut impl BufRead) -> CapturedRequest {
    let mut request_line = String::new();
    reader.read_line(&mut request_line).expect("request line");
    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or_default().to_string();
    let path = parts.next().unwrap_or_default().to_string();

    let mut headers = Vec::new();
    loop {
        let mut line = String::new();
        reader.read_line(&mut line).expect("header line");
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        if let Some((k, v)) = line.split_once(':') {
            headers.push((k.trim().to_string(), v.trim().to_string()));
        }
    }

    let len = headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, v)| v.parse::<usize>().ok())
        .unwrap_or(0);
    let mut body = vec![0u8; len];
    reader.read_exact(&mut body).expect("request body");

    CapturedRequest {
        method,
        path,
        headers,
        body: String::from_utf8_lossy(&body).to_string(),
    }
}

/// Minimal HTTP server answering exactly `responses.len()` requests, one per
/// connection. Returns the base URL and a handle yielding the requests.
pub fn serve(responses: Vec<(u16, &'static str)>) -> (String, JoinHandle<Vec<CapturedRequest>>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind test server");
    let base = format!("http://{}", listener.local_addr().expect("local addr"));

    let handle = thread::spawn(move || {
        let mut seen = Vec::new();
        for (status, body) in responses {
            let (stream, _) = listener.accept().expect("accept");
            let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));
            seen.push(read_request(&mut reader));

            let mut stream = stream;
            let reply = format!(
                "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                if status < 400 { "OK" } else { "Error" },
                body.len(),
                body
            );
            stream.write_all(reply.as_bytes()).expect("write reply");
            stream.flush().ok();
        }
        seen
    });

    (base, handle)
}
