// tests/common/mod.rs
//
// One-shot HTTP/1.0 server on 127.0.0.1 for pipeline tests.
//
#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

pub struct Served {
    pub url: String,
    handle: JoinHandle<()>,
}

impl Served {
    pub fn join(self) {
        let _ = self.handle.join();
    }
}

/// Answer exactly one request with the given status line, content type and body.
pub fn serve_once(status: &str, content_type: &str, body: Vec<u8>) -> Served {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let head = format!(
        "HTTP/1.1 {status}\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        body.len()
    );

    let handle = thread::spawn(move || {
        let Ok((mut stream, _)) = listener.accept() else { return };

        // Drain the request head
        let mut req = Vec::new();
        let mut buf = [0u8; 1024];
        while !req.windows(4).any(|w| w == b"\r\n\r\n") {
            match stream.read(&mut buf) {
                Ok(0) | Err(_) => break,
                Ok(n) => req.extend_from_slice(&buf[..n]),
            }
        }

        let _ = stream.write_all(head.as_bytes());
        let _ = stream.write_all(&body);
        let _ = stream.flush();
    });

    Served { url: format!("http://{addr}/public/FAQ-1"), handle }
}

pub const SAMPLE_PAGE: &str = include_str!("../fixtures/faq_sample.html");
