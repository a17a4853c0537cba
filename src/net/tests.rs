// verscan: game version scanner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::fetch_text;
use super::version::{VersionProbe, extract_rev, game_path, version_url};
use crate::config::types::Environment;
use crate::error::NetworkError;
use crate::report::{FailureKind, QueryExecutor, QueryResult, Target};

const URL: &str = "https://download-dev.5gg.win/S5G-H5-99963/version.json?t=1";

#[test]
fn test_game_path() {
    assert_eq!(game_path("Games-S5G-H5-99963", "Games-"), "S5G-H5-99963");
    assert_eq!(game_path("S5G-H5-99963", "Games-"), "S5G-H5-99963");
    assert_eq!(game_path("Games-Games-X", "Games-"), "Games-X");
    assert_eq!(game_path("Games-S5G-H5-99963", ""), "Games-S5G-H5-99963");
}

#[test]
fn test_version_url() {
    insta::assert_snapshot!(
        version_url("https://download-dev.5gg.win/", "S5G-H5-99963", 1_760_000_000),
        @"https://download-dev.5gg.win/S5G-H5-99963/version.json?t=1760000000"
    );
}

#[test]
fn test_extract_rev() {
    assert_eq!(extract_rev(r#"{"rev": 812}"#, URL).unwrap(), 812);
    assert_eq!(extract_rev(r#"{"rev": 0, "build": "x"}"#, URL).unwrap(), 0);

    for body in [
        r#"{}"#,
        r#"{"rev": null}"#,
        r#"{"rev": -1}"#,
        r#"{"rev": 1.5}"#,
        r#"{"rev": "812"}"#,
        r#"[812]"#,
    ] {
        assert!(
            matches!(extract_rev(body, URL), Err(NetworkError::MissingField { .. })),
            "{body}"
        );
    }

    assert!(matches!(
        extract_rev("<html>not found</html>", URL),
        Err(NetworkError::MalformedBody { .. })
    ));
}

#[tokio::test]
async fn test_fetch_text_checks_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ok"))
        .respond_with(ResponseTemplate::new(200).set_body_string("hello"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500).set_body_string("hello"))
        .mount(&server)
        .await;

    let timeout = Duration::from_secs(5);
    let body = fetch_text(&format!("{}/ok", server.uri()), timeout)
        .await
        .expect("200 should succeed");
    assert_eq!(body, "hello");

    let err = fetch_text(&format!("{}/broken", server.uri()), timeout)
        .await
        .expect_err("500 should fail");
    assert!(matches!(err, NetworkError::HttpError { status: 500, .. }));
}

#[tokio::test]
async fn test_fetch_text_deadline() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
        .mount(&server)
        .await;

    let err = fetch_text(&server.uri(), Duration::from_millis(200))
        .await
        .expect_err("slow response should time out");
    assert!(matches!(err, NetworkError::Timeout { .. }), "{err:?}");
    assert_eq!(FailureKind::from(&err), FailureKind::Timeout);
}

#[tokio::test]
async fn test_probe_query_strips_prefix() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/S5G-H5-99963/version.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"rev": 431}"#))
        .expect(1)
        .mount(&server)
        .await;

    let probe = VersionProbe::builder().build();
    let env = Environment::new("dev", format!("{}/", server.uri()));
    let result = probe
        .query(&Target::Game("Games-S5G-H5-99963".to_string()), &env)
        .await;
    assert_eq!(result, QueryResult::Value(431));
}

#[tokio::test]
async fn test_probe_query_classifies_failures() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/Bad-H5-00001/version.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/Gone-H5-00002/version.json"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let probe = VersionProbe::builder()
        .with_timeout(Duration::from_secs(5))
        .build();
    let env = Environment::new("dev", server.uri());

    let bad = probe
        .query(&Target::Game("Games-Bad-H5-00001".to_string()), &env)
        .await;
    assert_eq!(bad, QueryResult::Failed(FailureKind::Parse));

    let gone = probe
        .query(&Target::Game("Games-Gone-H5-00002".to_string()), &env)
        .await;
    assert_eq!(gone, QueryResult::Failed(FailureKind::Transport));
}
