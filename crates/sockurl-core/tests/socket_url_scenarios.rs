//! End-to-end resolution scenarios over fake page capabilities.

mod common;

use common::FakePage;
use sockurl_core::{create_socket_url, resolve_source, ScriptTags, SocketUrlError};

#[test]
fn resource_query_with_any_address_on_https_page() {
    let page = FakePage::new("http://unused.test/", None);
    let url = create_socket_url(
        Some("?http://0.0.0.0:8096&sockPort=8097&sockHost=localhost"),
        Some("https://example.com:443/"),
        &page,
        &page,
    )
    .unwrap();
    assert_eq!(url, "https://localhost:8097/sockjs-node");
}

#[test]
fn script_source_on_same_origin() {
    let page = FakePage::new(
        "http://myhost.test:8080/",
        Some("http://myhost.test:8080/bundle.js"),
    );
    let url = create_socket_url(Some(""), None, &page, &page).unwrap();
    assert_eq!(url, "http://myhost.test:8080/sockjs-node");
}

#[test]
fn output_fed_back_as_location_is_stable() {
    let page = FakePage::new(
        "http://myhost.test:8080/",
        Some("http://myhost.test:8080/bundle.js"),
    );
    let first = create_socket_url(None, None, &page, &page).unwrap();
    let second = create_socket_url(None, Some(first.as_str()), &page, &page).unwrap();
    assert_eq!(first, second);
}

#[test]
fn sock_port_from_resource_query_always_wins() {
    let page = FakePage::new("https://example.com/", None);
    for port in ["1", "8097", "65535"] {
        let query = format!("?http://dev.test:8080&sockPort={port}");
        let (parts, _) = resolve_source(Some(query.as_str()), None, &page, &page).unwrap();
        assert_eq!(parts.sock_port(), Some(port));
        let url = create_socket_url(Some(query.as_str()), None, &page, &page).unwrap();
        assert_eq!(url, format!("https://dev.test:{port}/sockjs-node"));
    }
}

#[test]
fn missing_script_source_defaults_to_root() {
    let page = FakePage::new("http://localhost:3000/", None);
    let (parts, _) = resolve_source(None, None, &page, &page).unwrap();
    assert_eq!(parts.pathname.as_deref(), Some("/"));
    assert_eq!(parts.hostname, None);
    assert_eq!(
        create_socket_url(None, None, &page, &page).unwrap(),
        "/sockjs-node"
    );
}

#[test]
fn any_address_on_https_page_takes_page_host_and_protocol() {
    let page = FakePage::new("https://example.com/", Some("http://0.0.0.0:8080/main.js"));
    assert_eq!(
        create_socket_url(None, None, &page, &page).unwrap(),
        "https://example.com:8080/sockjs-node"
    );
}

#[test]
fn loopback_keeps_protocol_on_https_page() {
    let page = FakePage::new("https://example.com/", Some("http://127.0.0.1:8080/main.js"));
    assert_eq!(
        create_socket_url(None, None, &page, &page).unwrap(),
        "http://127.0.0.1:8080/sockjs-node"
    );
}

#[test]
fn zero_or_missing_port_uses_page_port() {
    for src in ["http://dev.test:0/main.js", "http://dev.test/main.js"] {
        let page = FakePage::new("http://dev.test:4000/", Some(src));
        assert_eq!(
            create_socket_url(None, None, &page, &page).unwrap(),
            "http://dev.test:4000/sockjs-node"
        );
    }
}

#[test]
fn sock_path_overrides_default_path() {
    let page = FakePage::new("http://dev.test:4000/", None);
    let url = create_socket_url(
        Some("?http://dev.test:4000&sockPath=/custom"),
        None,
        &page,
        &page,
    )
    .unwrap();
    assert_eq!(url, "http://dev.test:4000/custom");
}

#[test]
fn script_tags_capability_drives_resolution() {
    let page = FakePage::new("http://dev.test:4000/", None);
    let tags = ScriptTags::new(
        None,
        vec![
            "http://cdn.test/vendor.js".to_string(),
            "http://dev.test:5000/client.js".to_string(),
        ],
    );
    assert_eq!(
        create_socket_url(None, None, &tags, &page).unwrap(),
        "http://dev.test:5000/sockjs-node"
    );
}

#[test]
fn malformed_location_override_is_reported() {
    let page = FakePage::new("http://dev.test:4000/", Some("http://dev.test/main.js"));
    let err = create_socket_url(None, Some("http://[::1"), &page, &page).unwrap_err();
    match err {
        SocketUrlError::MalformedUrl { input, .. } => assert_eq!(input, "http://[::1"),
    }
}

#[test]
fn decoded_sock_path_never_adds_query_or_fragment() {
    let page = FakePage::new("http://dev.test:4000/", None);
    let url = create_socket_url(
        Some("?http://dev.test:4000&sockPath=/a%3Fb%23c"),
        None,
        &page,
        &page,
    )
    .unwrap();
    assert_eq!(url, "http://dev.test:4000/a%3Fb%23c");
}

#[test]
fn shorthand_ipv4_hosts_are_not_special_cased() {
    let page = FakePage::new("https://example.com/", Some("http://0:8080/main.js"));
    assert_eq!(
        create_socket_url(None, None, &page, &page).unwrap(),
        "https://0:8080/sockjs-node"
    );

    let page = FakePage::new("https://example.com/", Some("http://127.1:8080/main.js"));
    assert_eq!(
        create_socket_url(None, None, &page, &page).unwrap(),
        "https://127.1:8080/sockjs-node"
    );
}
