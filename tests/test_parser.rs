use gatehouse::http::parser::{ParseError, parse_query, parse_request_line};

#[test]
fn test_parse_simple_get_request() {
    let req = parse_request_line("GET /index.html HTTP/1.1").unwrap();

    assert_eq!(req.method, "GET");
    assert_eq!(req.path, "/index.html");
    assert_eq!(req.version, "HTTP/1.1");
    assert!(req.query.is_empty());
}

#[test]
fn test_parse_method_and_version_are_not_validated() {
    let req = parse_request_line("BREW /index.html HTCPCP/1.0").unwrap();

    assert_eq!(req.method, "BREW");
    assert_eq!(req.version, "HTCPCP/1.0");
}

#[test]
fn test_parse_empty_line() {
    assert_eq!(parse_request_line(""), Err(ParseError::Empty));
}

#[test]
fn test_parse_too_few_tokens() {
    assert_eq!(
        parse_request_line("GET /index.html"),
        Err(ParseError::InvalidTokenCount(2))
    );
    assert_eq!(parse_request_line("GET"), Err(ParseError::InvalidTokenCount(1)));
}

#[test]
fn test_parse_too_many_tokens() {
    assert_eq!(
        parse_request_line("GET /index.html HTTP/1.1 extra"),
        Err(ParseError::InvalidTokenCount(4))
    );
}

#[test]
fn test_parse_doubled_space_is_malformed() {
    assert_eq!(
        parse_request_line("GET  /index.html HTTP/1.1"),
        Err(ParseError::InvalidTokenCount(4))
    );
}

#[test]
fn test_parse_path_splits_on_first_question_mark() {
    let req = parse_request_line("GET /index.html?q=a?b HTTP/1.1").unwrap();

    assert_eq!(req.path, "/index.html");
    assert_eq!(req.query_param("q"), Some("a?b"));
}

#[test]
fn test_parse_trailing_question_mark_has_no_params() {
    let req = parse_request_line("GET /index.html? HTTP/1.1").unwrap();

    assert_eq!(req.path, "/index.html");
    assert!(req.query.is_empty());
}

#[test]
fn test_query_mixed_segments() {
    let params = parse_query("a=1&b=&c=1=2&a=3");

    assert_eq!(params.len(), 2);
    assert_eq!(params.get("a").map(String::as_str), Some("3"));
    assert_eq!(params.get("b").map(String::as_str), Some(""));
    assert!(!params.contains_key("c"));
}

#[test]
fn test_query_bare_key_maps_to_empty_value() {
    let params = parse_query("debug&lang=en");

    assert_eq!(params.get("debug").map(String::as_str), Some(""));
    assert_eq!(params.get("lang").map(String::as_str), Some("en"));
}

#[test]
fn test_query_is_not_percent_decoded() {
    let params = parse_query("name=John%20Doe&sym=%26");

    assert_eq!(params.get("name").map(String::as_str), Some("John%20Doe"));
    assert_eq!(params.get("sym").map(String::as_str), Some("%26"));
}

#[test]
fn test_query_empty_string() {
    assert!(parse_query("").is_empty());
}
