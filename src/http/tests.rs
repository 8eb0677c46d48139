//! Tests for the HTTP vocabulary.

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use crate::http::{
        head_end, normalize, parent, parse_request, ContentType, Error, HttpRequest, HttpVersion, Method,
    };
    use crate::lang::Maybe;

    #[test]
    fn test_parse_simple_get_request() {
        let request = b"GET /index.html HTTP/1.1\r\nHost: example.com\r\n\r\n";
        let result = parse_request(request).unwrap();
        assert_eq!(result.method, Method::GET);
        assert_eq!(result.target, "/index.html");
        assert_eq!(result.version, HttpVersion::Http11);
        assert_eq!(result.header("Host"), Maybe::present("example.com"));
        assert!(result.body.is_empty());
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let request = b"GET / HTTP/1.1\r\nHost: example.com\r\nX-Trace: abc\r\n\r\n";
        let result = parse_request(request).unwrap();
        assert_eq!(result.header("host"), Maybe::present("example.com"));
        assert_eq!(result.header("x-trace"), Maybe::present("abc"));
        assert!(result.header("Accept").is_empty());
    }

    #[test]
    fn test_body_follows_head() {
        let request = b"POST /users HTTP/1.1\r\nHost: a\r\nContent-Length: 11\r\n\r\n{\"id\": 42 }";
        let result = parse_request(request).unwrap();
        assert_eq!(result.body, b"{\"id\": 42 }");
        assert_eq!(result.content_length().unwrap(), Maybe::present(11));
    }

    #[test]
    fn test_invalid_content_length() {
        let request = b"POST /users HTTP/1.1\r\nHost: a\r\nContent-Length: lots\r\n\r\n";
        let result = parse_request(request).unwrap();
        assert!(matches!(result.content_length(), Err(Error::InvalidContentLength(ref v)) if v == "lots"));
    }

    #[test]
    fn test_missing_host_header() {
        let request = b"GET /index.html HTTP/1.1\r\n\r\n";
        let result = parse_request(request);
        assert!(matches!(result, Err(Error::MissingHeader(ref h)) if h == "Host"));
    }

    #[test]
    fn test_http10_without_host() {
        let request = b"GET /index.html HTTP/1.0\r\n\r\n";
        let result = parse_request(request).unwrap();
        assert_eq!(result.version, HttpVersion::Http10);
        assert!(result.headers.is_empty());
    }

    #[test]
    fn test_invalid_method() {
        let request = b"BREW /pot HTTP/1.1\r\nHost: example.com\r\n\r\n";
        let result = parse_request(request);
        assert!(matches!(result, Err(Error::InvalidMethod(ref m)) if m == "BREW"));
    }

    #[test]
    fn test_invalid_http_version() {
        let request = b"GET /index.html HTTP/9.9\r\nHost: example.com\r\n\r\n";
        let result = parse_request(request);
        assert!(matches!(result, Err(Error::InvalidVersion(ref v)) if v == "HTTP/9.9"));
    }

    #[test]
    fn test_absolute_target_is_rejected() {
        let request = b"GET http://example.com/ HTTP/1.1\r\nHost: example.com\r\n\r\n";
        let result = parse_request(request);
        assert!(matches!(result, Err(Error::InvalidPath(_))));
    }

    #[test]
    fn test_invalid_header_format() {
        let request = b"GET /index.html HTTP/1.1\r\nInvalidHeader\r\n\r\n";
        assert!(matches!(parse_request(request), Err(Error::InvalidHeaderFormat(_))));

        let request = b"GET /index.html HTTP/1.1\r\n: value\r\n\r\n";
        assert!(matches!(parse_request(request), Err(Error::InvalidHeaderFormat(_))));
    }

    #[test]
    fn test_empty_and_incomplete_request_lines() {
        assert!(matches!(parse_request(b""), Err(Error::EmptyRequest)));
        assert!(matches!(parse_request(b"GET\r\n"), Err(Error::MalformedRequestLine(_))));
        assert!(matches!(
            parse_request(b"GET  HTTP/1.1\r\nHost: example.com\r\n\r\n"),
            Err(Error::MalformedRequestLine(_))
        ));
    }

    #[test]
    fn test_all_methods() {
        for method in Method::ALL {
            let request = format!("{method} /x HTTP/1.1\r\nHost: example.com\r\n\r\n");
            let result = parse_request(request.as_bytes()).unwrap();
            assert_eq!(result.method, method);
            assert_eq!(method.to_string(), method.as_str());
        }
    }

    #[test]
    fn test_query_parameters() {
        let request = b"GET /search?q=test&page=1&flag HTTP/1.1\r\nHost: example.com\r\n\r\n";
        let result = parse_request(request).unwrap();
        assert_eq!(result.target, "/search?q=test&page=1&flag");
        assert_eq!(result.query("q"), Maybe::present("test"));
        assert_eq!(result.query("page"), Maybe::present("1"));
        assert_eq!(result.query("flag"), Maybe::present(""));
        assert!(result.query("missing").is_empty());
    }

    #[test]
    fn test_expects_continue() {
        let request = HttpRequest::new(Method::POST, "/upload", HttpVersion::Http11)
            .with_header("expect", "100-Continue");
        assert!(request.expects_continue());

        let request = HttpRequest::new(Method::POST, "/upload", HttpVersion::Http10)
            .with_header("Expect", "100-continue");
        assert!(!request.expects_continue());
    }

    #[test]
    fn test_json_body() {
        #[derive(Debug, Deserialize, PartialEq)]
        struct User {
            name: String,
        }

        let request = HttpRequest::new(Method::POST, "/users", HttpVersion::Http11)
            .with_header("Content-Type", "application/json; charset=UTF-8")
            .with_body(br#"{"name":"ada"}"#.to_vec());
        assert_eq!(request.json::<User>().unwrap(), User { name: "ada".to_string() });

        let plain = HttpRequest::new(Method::POST, "/users", HttpVersion::Http11)
            .with_body(br#"{"name":"ada"}"#.to_vec());
        assert!(matches!(plain.json::<User>(), Err(Error::MissingHeader(_))));

        let broken = request.with_body(b"{".to_vec());
        assert!(matches!(broken.json::<User>(), Err(Error::JsonError(_))));
    }

    #[test]
    fn test_head_end() {
        assert_eq!(head_end(b"GET / HTTP/1.0\r\n\r\nbody"), Maybe::present(18));
        assert!(head_end(b"GET / HTTP/1.0\r\n").is_empty());
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("/"), "/");
        assert_eq!(normalize(""), "/");
        assert_eq!(normalize("users"), "/users");
        assert_eq!(normalize("/users/"), "/users");
        assert_eq!(normalize("//users///42"), "/users/42");
        assert_eq!(normalize("/users/./42"), "/users/42");
        assert_eq!(normalize("/users?active=true"), "/users");
        assert_eq!(normalize("/docs#intro"), "/docs");
        assert_eq!(normalize("/?x=1"), "/");
    }

    #[test]
    fn test_parent() {
        assert_eq!(parent("/users/42/orders"), Some("/users/42"));
        assert_eq!(parent("/users"), Some("/"));
        assert_eq!(parent("/"), None);
    }

    #[test]
    fn test_content_type_text() {
        assert_eq!(ContentType::TextPlain.text(), "text/plain; charset=UTF-8");
        assert_eq!(ContentType::ApplicationJson.to_string(), "application/json; charset=UTF-8");
    }
}
