// src/core/net.rs

// HTTP/1.0 GET over TCP (std-only). The result host serves plain HTTP.

use std::{io::{Read, Write}, net::TcpStream, time::Duration};

pub fn http_get(host: &str, path: &str) -> Result<String, Box<dyn std::error::Error>> {
    let mut s = TcpStream::connect((host, 80))?;
    s.set_read_timeout(Some(Duration::from_secs(15)))?;
    s.set_write_timeout(Some(Duration::from_secs(15)))?;

    let req = format!(
        "GET {} HTTP/1.0\r\nHost: {}\r\nUser-Agent: meet_scrape/0.3\r\nConnection: close\r\n\r\n",
        path, host
    );
    s.write_all(req.as_bytes())?;
    s.flush()?;

    let mut buf = Vec::new();
    s.read_to_end(&mut buf)?;
    let resp = String::from_utf8_lossy(&buf);

    let status = resp.split("\r\n").next().unwrap_or("");
    if !status.contains("200") {
        return Err(format!("HTTP error: {} {}{}", status, host, path).into());
    }
    let body_idx = resp.find("\r\n\r\n").ok_or("Malformed HTTP response")? + 4;
    Ok(resp[body_idx..].to_string())
}

/// Split `http://host/some/meet/` into `(host, "/some/meet/")`.
/// A bare host maps to path "/".
pub fn split_url(url: &str) -> Result<(String, String), Box<dyn std::error::Error>> {
    let rest = url
        .strip_prefix("http://")
        .or_else(|| url.strip_prefix("https://"))
        .unwrap_or(url);
    let (host, path) = match rest.find('/') {
        Some(i) => (&rest[..i], &rest[i..]),
        None => (rest, "/"),
    };
    if host.is_empty() {
        return Err(format!("Bad URL: {}", url).into());
    }
    Ok((host.to_string(), path.to_string()))
}
