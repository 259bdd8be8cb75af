//! One-shot HTTP responder for exercising the real `reqwest` paths in tests.

use std::io::{BufRead, Read, Write};

pub(crate) struct StubServer {
    pub url: String,
    handle: std::thread::JoinHandle<String>,
}

impl StubServer {
    /// Accepts a single connection, answers it with `status_line` and `body`,
    /// and keeps the raw request body for inspection.
    pub(crate) fn respond_once(status_line: &'static str, body: &'static str) -> Self {
        let listener =
            std::net::TcpListener::bind("127.0.0.1:0").expect("stub server should bind");
        let url = format!(
            "http://{}/data/aircraft.json",
            listener.local_addr().expect("stub server has an address")
        );

        let handle = std::thread::spawn(move || {
            let (stream, _) = listener.accept().expect("stub server should accept");
            let mut reader = std::io::BufReader::new(stream);

            let mut content_length = 0;
            let mut line = String::new();
            loop {
                line.clear();
                reader.read_line(&mut line).expect("request header line");
                if line == "\r\n" || line.is_empty() {
                    break;
                }
                if let Some((name, value)) = line.split_once(':') {
                    if name.eq_ignore_ascii_case("content-length") {
                        content_length = value.trim().parse().unwrap_or(0);
                    }
                }
            }
            let mut request_body = vec![0; content_length];
            reader
                .read_exact(&mut request_body)
                .expect("request body should be readable");

            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let mut stream = reader.into_inner();
            stream
                .write_all(response.as_bytes())
                .expect("response should be writable");
            stream.flush().expect("response should flush");

            String::from_utf8(request_body).expect("request body is utf-8")
        });

        StubServer { url, handle }
    }

    /// Body of the request the server answered.
    pub(crate) fn request_body(self) -> String {
        self.handle.join().expect("stub server thread panicked")
    }
}

/// A local address nothing is listening on.
pub(crate) fn refused_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("should bind");
    let address = listener.local_addr().expect("has an address");
    drop(listener);
    format!("http://{address}/api/webhook/spotted")
}

pub(crate) fn test_client() -> reqwest::blocking::Client {
    reqwest::blocking::Client::builder()
        .timeout(std::time::Duration::from_secs(5))
        .build()
        .expect("client should build")
}
