//! Shared utilities for integration testing.

#![allow(dead_code)]

use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};

use keystore_migrator::Sources;

/// A request as seen by the mock keymanager.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).unwrap()
    }
}

/// Handle to a running mock keymanager.
pub struct MockKeymanager {
    pub addr: SocketAddr,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockKeymanager {
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

/// Start a programmable mock keymanager on an ephemeral port.
///
/// `respond` receives the zero-based request index and the parsed request.
pub async fn start_mock_keymanager<F>(respond: F) -> MockKeymanager
where
    F: Fn(usize, &RecordedRequest) -> (u16, String) + Send + Sync + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let requests = Arc::new(Mutex::new(Vec::new()));
    let respond = Arc::new(respond);

    let recorded = requests.clone();
    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((socket, _)) => {
                    let recorded = recorded.clone();
                    let respond = respond.clone();
                    tokio::spawn(async move {
                        handle_connection(socket, recorded, respond).await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    MockKeymanager { addr, requests }
}

async fn handle_connection<F>(
    socket: TcpStream,
    recorded: Arc<Mutex<Vec<RecordedRequest>>>,
    respond: Arc<F>,
) where
    F: Fn(usize, &RecordedRequest) -> (u16, String) + Send + Sync + 'static,
{
    let mut reader = BufReader::new(socket);

    let mut request_line = String::new();
    if reader.read_line(&mut request_line).await.unwrap_or(0) == 0 {
        return;
    }
    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or_default().to_string();
    let path = parts.next().unwrap_or_default().to_string();

    let mut headers = Vec::new();
    loop {
        let mut line = String::new();
        reader.read_line(&mut line).await.unwrap();
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        if let Some((k, v)) = line.split_once(':') {
            headers.push((k.trim().to_string(), v.trim().to_string()));
        }
    }

    let content_length = headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, v)| v.parse::<usize>().ok())
        .unwrap_or(0);
    let mut body = vec![0u8; content_length];
    reader.read_exact(&mut body).await.unwrap();

    let request = RecordedRequest {
        method,
        path,
        headers,
        body: String::from_utf8(body).unwrap(),
    };

    let (status, response_body) = {
        let mut recorded = recorded.lock().unwrap();
        let index = recorded.len();
        let response = respond(index, &request);
        recorded.push(request);
        response
    };

    let status_text = match status {
        200 => "200 OK",
        400 => "400 Bad Request",
        401 => "401 Unauthorized",
        500 => "500 Internal Server Error",
        _ => "200 OK",
    };
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status_text,
        response_body.len(),
        response_body
    );

    let mut socket = reader.into_inner();
    let _ = socket.write_all(response.as_bytes()).await;
    let _ = socket.shutdown().await;
}

/// An address nothing listens on.
pub async fn closed_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}

pub fn keystore_json(pubkey: &str) -> String {
    serde_json::json!({
        "crypto": {
            "kdf": {
                "function": "scrypt",
                "params": {"dklen": 32, "n": 262144, "r": 8, "p": 1, "salt": "d4e5"},
                "message": ""
            },
            "checksum": {"function": "sha256", "params": {}, "message": "c2b7"},
            "cipher": {"function": "aes-128-ctr", "params": {"iv": "264d"}, "message": "1f1c"}
        },
        "description": "",
        "pubkey": pubkey,
        "path": "m/12381/3600/0/0/0",
        "uuid": "64625def-3331-4eea-ab6f-782f3ed16a83",
        "version": 4
    })
    .to_string()
}

pub fn slashing_protection_json(pubkeys: &[&str]) -> String {
    let data: Vec<_> = pubkeys
        .iter()
        .map(|pubkey| {
            serde_json::json!({
                "pubkey": pubkey,
                "signed_blocks": [{"slot": "81952", "signing_root": "0x4ff6"}],
                "signed_attestations": [
                    {"source_epoch": "2290", "target_epoch": "3007", "signing_root": "0x5871"}
                ]
            })
        })
        .collect();

    serde_json::json!({
        "metadata": {
            "interchange_format_version": "5",
            "genesis_validators_root": "0x043db0d9a83813551ee2f33450d23797757d430911a9320530ad8a0eabc43efb"
        },
        "data": data
    })
    .to_string()
}

/// Lay out a keystores directory plus password and slashing protection files.
pub struct Fixture {
    pub dir: tempfile::TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        let dir = tempfile::TempDir::new().unwrap();
        fs::create_dir(dir.path().join("keystores")).unwrap();
        fs::write(dir.path().join("password.txt"), "s3cret\n").unwrap();
        Self { dir }
    }

    pub fn keystores_dir(&self) -> PathBuf {
        self.dir.path().join("keystores")
    }

    pub fn add_file(&self, name: &str, content: &str) -> &Self {
        fs::write(self.keystores_dir().join(name), content).unwrap();
        self
    }

    pub fn add_subdir(&self, name: &str) -> &Self {
        let path = self.keystores_dir().join(name);
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keystore-nested.json"), keystore_json("ff")).unwrap();
        self
    }

    pub fn write_slashing_protection(&self, content: &str) -> PathBuf {
        let path = self.dir.path().join("slashing_protection.json");
        fs::write(&path, content).unwrap();
        path
    }

    pub fn sources(&self, slashing_protection: Option<&Path>) -> Sources {
        Sources {
            keystores_path: self.keystores_dir(),
            slashing_protection_path: slashing_protection.map(Path::to_path_buf),
            wallet_password_path: self.dir.path().join("password.txt"),
        }
    }
}
