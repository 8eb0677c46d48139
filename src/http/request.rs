//! Fully-buffered requests and their parsing.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;

use crate::http::error::Error;
use crate::http::method::Method;
use crate::lang::Maybe;

const HEAD_TERMINATOR: &[u8] = b"\r\n\r\n";

/// Protocol versions accepted on the request line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpVersion {
    Http10,
    Http11,
}

impl FromStr for HttpVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HTTP/1.0" => Ok(HttpVersion::Http10),
            "HTTP/1.1" => Ok(HttpVersion::Http11),
            _ => Err(Error::InvalidVersion(s.to_string())),
        }
    }
}

impl fmt::Display for HttpVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpVersion::Http10 => f.write_str("HTTP/1.0"),
            HttpVersion::Http11 => f.write_str("HTTP/1.1"),
        }
    }
}

/// A fully-buffered inbound request.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    /// The request target as received, including any query string.
    pub target: String,
    pub version: HttpVersion,
    /// Header names keep their original case; lookups ignore it.
    pub headers: HashMap<String, String>,
    pub body: Vec<u8>,
    pub query_params: HashMap<String, String>,
}

impl HttpRequest {
    pub fn new(method: Method, target: impl Into<String>, version: HttpVersion) -> Self {
        let target = target.into();
        let query_params = target
            .split_once('?')
            .map(|(_, query)| parse_query(query))
            .unwrap_or_default();

        Self {
            method,
            target,
            version,
            headers: HashMap::new(),
            body: Vec::new(),
            query_params,
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Maybe<&str> {
        Maybe::option(
            self.headers
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(name))
                .map(|(_, v)| v.as_str()),
        )
    }

    pub fn query(&self, name: &str) -> Maybe<&str> {
        Maybe::option(self.query_params.get(name).map(String::as_str))
    }

    /// The declared body length. Absent if no `Content-Length` header was sent.
    pub fn content_length(&self) -> Result<Maybe<usize>, Error> {
        match self.header("Content-Length") {
            Maybe::Present(value) => value
                .parse::<usize>()
                .map(Maybe::present)
                .map_err(|_| Error::InvalidContentLength(value.to_string())),
            Maybe::Absent => Ok(Maybe::empty()),
        }
    }

    /// Whether the client waits for an interim `100 Continue` before sending the body.
    pub fn expects_continue(&self) -> bool {
        self.version == HttpVersion::Http11
            && self
                .header("Expect")
                .filter(|value| value.eq_ignore_ascii_case("100-continue"))
                .is_present()
    }

    pub fn is_json(&self) -> bool {
        self.header("Content-Type")
            .filter(|value| value.starts_with("application/json"))
            .is_present()
    }

    /// Deserialize the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, Error> {
        if !self.is_json() {
            return Err(Error::MissingHeader("Content-Type: application/json".to_string()));
        }
        Ok(serde_json::from_slice(&self.body)?)
    }
}

fn parse_query(query: &str) -> HashMap<String, String> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((k, v)) => (k.to_string(), v.to_string()),
            None => (pair.to_string(), String::new()),
        })
        .collect()
}

/// Position right after the blank line closing the header section, if the
/// input contains one.
pub fn head_end(input: &[u8]) -> Maybe<usize> {
    Maybe::option(
        input
            .windows(HEAD_TERMINATOR.len())
            .position(|window| window == HEAD_TERMINATOR),
    )
    .map(|index| index + HEAD_TERMINATOR.len())
}

/// Parse a request from a byte slice.
///
/// Everything after the header section becomes the body. Without a blank line
/// the whole input is taken as the head and the body stays empty.
pub fn parse_request(input: &[u8]) -> Result<HttpRequest, Error> {
    if input.is_empty() {
        return Err(Error::EmptyRequest);
    }

    let (head, body) = head_end(input)
        .map(|end| input.split_at(end))
        .or((input, &[][..]));

    let head = std::str::from_utf8(head)
        .map_err(|_| Error::MalformedRequestLine("Invalid UTF-8".to_string()))?;
    let mut lines = head.lines();

    let request_line = lines.next().ok_or(Error::EmptyRequest)?;
    let parts: Vec<&str> = request_line.split_whitespace().collect();
    let [method, target, version] = parts[..] else {
        return Err(Error::MalformedRequestLine(request_line.to_string()));
    };

    let method = Method::from_str(method)?;
    if !target.starts_with('/') {
        return Err(Error::InvalidPath(target.to_string()));
    }
    let version = HttpVersion::from_str(version)?;

    let mut request = HttpRequest::new(method, target, version);
    for line in lines.take_while(|line| !line.is_empty()) {
        let (name, value) = line
            .split_once(':')
            .ok_or_else(|| Error::InvalidHeaderFormat(line.to_string()))?;
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::InvalidHeaderFormat(line.to_string()));
        }
        request.headers.insert(name.to_string(), value.trim().to_string());
    }

    if version == HttpVersion::Http11 && request.header("Host").is_empty() {
        return Err(Error::MissingHeader("Host".to_string()));
    }

    request.body = body.to_vec();
    Ok(request)
}
