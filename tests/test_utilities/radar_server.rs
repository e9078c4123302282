use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;

/// Blocking stand-in for the radar server
///
/// `/search` answers with a fixed body, `/subscribe` with an empty stream
/// that ends immediately. Every request line is recorded. The accept loop
/// runs on a detached thread for the rest of the test process.
pub struct StubRadarServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl StubRadarServer {
    pub fn start(search_body: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let requests = Arc::new(Mutex::new(Vec::new()));

        let body = search_body.to_string();
        let log = Arc::clone(&requests);
        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                Self::answer(stream, &body, &log);
            }
        });

        Self { base_url, requests }
    }

    /// Base URL of a port nothing listens on
    pub fn unreachable_url() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        format!("http://{}", listener.local_addr().unwrap())
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    fn answer(mut stream: TcpStream, search_body: &str, log: &Mutex<Vec<String>>) {
        let Ok(clone) = stream.try_clone() else {
            return;
        };
        let mut reader = BufReader::new(clone);
        let mut request_line = String::new();
        if reader.read_line(&mut request_line).is_err() {
            return;
        }
        loop {
            let mut line = String::new();
            match reader.read_line(&mut line) {
                Ok(0) | Err(_) => break,
                Ok(_) if line == "\r\n" => break,
                Ok(_) => {}
            }
        }

        let request_line = request_line.trim().to_string();
        let response = if request_line.starts_with("GET /search") {
            format!(
                "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                search_body.len(),
                search_body
            )
        } else if request_line.starts_with("GET /subscribe") {
            "HTTP/1.1 200 OK\r\nContent-Type: application/x-ndjson\r\nContent-Length: 0\r\nConnection: close\r\n\r\n".to_string()
        } else {
            "HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n".to_string()
        };

        log.lock().unwrap().push(request_line);
        let _ = stream.write_all(response.as_bytes());
        let _ = stream.flush();
    }
}

/// A `/search` body with two developers around São Paulo
pub const TWO_DEVS: &str = r#"{"devs":[
{"_id":"1","name":"Ada Lovelace","github_username":"ada","bio":"Analytical engines","avatar_url":"https://example.com/ada.png","techs":["ReactJS","Node.js"],"location":{"type":"Point","coordinates":[-46.6333,-23.5505]}},
{"_id":"2","name":"Grace Hopper","github_username":"grace","biography":"Compilers","techs":["ReactJS"],"location":{"type":"Point","coordinates":[-46.6400,-23.5550]}}
]}"#;
