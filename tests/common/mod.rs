#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use gatehouse::site::catalog::STANDARD_PATHS;

pub const TEMPLATE: &str = "<html><body><p>Now: {time}</p><p>Again: {time}</p></body></html>\n";

static COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Fresh empty directory under the system temp dir.
pub fn fixture_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "gatehouse-{}-{}-{}",
        name,
        std::process::id(),
        COUNTER.fetch_add(1, Ordering::SeqCst)
    ));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

/// Content written for each standard path (the template for /classic.html).
pub fn file_content(path: &str) -> Vec<u8> {
    match path {
        "/classic.html" => TEMPLATE.as_bytes().to_vec(),
        "/spring.png" => {
            let mut png = b"\x89PNG\r\n\x1a\n".to_vec();
            png.extend((0..=255u8).cycle().take(3000));
            png
        }
        _ => format!("content of {}\n{}", path, "x".repeat(path.len() * 10)).into_bytes(),
    }
}

/// Public root holding every standard catalog file.
pub fn standard_site_dir(name: &str) -> PathBuf {
    let dir = fixture_dir(name);
    for path in STANDARD_PATHS {
        std::fs::write(dir.join(path.trim_start_matches('/')), file_content(path)).unwrap();
    }
    dir
}

/// Splits a raw response into its head (without the blank line) and body.
pub fn split_response(raw: &[u8]) -> (String, Vec<u8>) {
    let end = raw
        .windows(4)
        .position(|w| w == b"\r\n\r\n")
        .expect("response has no header terminator");
    let head = String::from_utf8(raw[..end].to_vec()).unwrap();
    (head, raw[end + 4..].to_vec())
}

pub fn header<'a>(head: &'a str, name: &str) -> Option<&'a str> {
    head.split("\r\n")
        .skip(1)
        .find_map(|line| line.strip_prefix(name)?.strip_prefix(": "))
}
