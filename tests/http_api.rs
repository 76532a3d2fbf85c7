use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use mailconf::error::Error;
use mailconf::{Config, DynSrvLookup, InMemorySrvLookup, SrvLookup};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;
use trust_dns_proto::rr::rdata::SRV;
use trust_dns_proto::rr::Name;
use trust_dns_resolver::error::ResolveError;

struct UnreachableLookup;

#[async_trait::async_trait]
impl SrvLookup for UnreachableLookup {
    async fn lookup_srv(&self, name: &Name) -> Result<Vec<SRV>, Error> {
        Err(Error::LookupFailed {
            name: name.to_string(),
            source: ResolveError::from("request timed out"),
        })
    }
}

fn name(s: &str) -> Name {
    Name::from_str(s).unwrap()
}

fn app(srv_lookup: DynSrvLookup) -> Router {
    let config = Config {
        domain: "marshland.ovh".to_string(),
        http_bind_addr: "127.0.0.1:9090".parse().unwrap(),
        http_timeout: Duration::from_secs(5),
        nameservers: vec![],
    };
    mailconf::api::router(Arc::new(config), srv_lookup)
}

fn marshland() -> DynSrvLookup {
    Arc::new(
        InMemorySrvLookup::default()
            .with_record(
                name("_imaps._tcp.marshland.ovh."),
                SRV::new(0, 1, 993, name("hermes.marshland.ovh.")),
            )
            .with_record(
                name("_submission._tcp.marshland.ovh."),
                SRV::new(0, 1, 465, name("hermes.marshland.ovh.")),
            ),
    )
}

async fn get(app: Router, uri: &str) -> (StatusCode, Option<String>, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let body = hyper::body::to_bytes(response.into_body()).await.unwrap();
    (status, content_type, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn serves_document_on_any_path() {
    for uri in ["/", "/mail/config-v1.1.xml", "/.well-known/autoconfig/mail/config-v1.1.xml"] {
        let (status, content_type, body) = get(app(marshland()), uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(content_type.as_deref(), Some("text/xml; charset=utf-8"));
        assert!(body.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<clientConfig version=\"1.1\">"));
        assert!(body.contains(
            "<incomingServer type=\"imap\"><hostname>hermes.marshland.ovh</hostname><port>993</port>"
        ));
        assert!(body.contains(
            "<outgoingServer type=\"smtp\"><hostname>hermes.marshland.ovh</hostname><port>465</port>"
        ));
    }
}

#[tokio::test]
async fn repeated_requests_are_identical() {
    let app = app(marshland());
    let (_, _, first) = get(app.clone(), "/").await;
    let (_, _, second) = get(app, "/").await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn missing_records_is_server_error() {
    let (status, _, body) = get(app(Arc::new(InMemorySrvLookup::default())), "/").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, "no SRV records found for \"_imaps._tcp.marshland.ovh.\"");
}

#[tokio::test]
async fn lookup_failure_is_server_error() {
    let app = app(Arc::new(UnreachableLookup));
    let (status, _, body) = get(app.clone(), "/").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.starts_with("SRV lookup for \"_imaps._tcp.marshland.ovh.\" failed"));
    assert!(body.contains("request timed out"));

    // A failed request doesn't affect the next one.
    let (status, _, _) = get(app, "/").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn only_get_is_allowed() {
    let response = app(marshland())
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/mail/config-v1.1.xml")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
