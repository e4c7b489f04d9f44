//! Unit tests for the HTTP API client

use super::*;
use serde_json::json;
use wiremock::{
    matchers::{header, header_exists, method, path},
    Mock, MockServer, ResponseTemplate,
};

fn client_for(server: &MockServer, token: Option<&str>) -> HttpApiClient {
    HttpApiClient::new(
        &format!("{}/api", server.uri()),
        token,
        Duration::from_secs(DEFAULT_TIMEOUT_SECS),
    )
    .unwrap()
}

#[cfg(test)]
mod http_tests {
    use super::*;

    #[tokio::test]
    async fn test_get_current_week_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/current_week/"))
            .and(header("accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "week": 4,
                "start_day": "2015-10-01",
                "end_day": "2015-10-07"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server, None);
        let body = client.get(CURRENT_WEEK_PATH).await.unwrap();

        assert_eq!(body["week"], 4);
        assert_eq!(body["start_day"], "2015-10-01");
    }

    #[tokio::test]
    async fn test_token_sent_as_authorization_header() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/playergames/"))
            .and(header("authorization", "Token secret-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": [] })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server, Some("secret-token"));
        let body = client.get(PLAYER_GAMES_PATH).await.unwrap();

        assert_eq!(body["results"], json!([]));
    }

    #[tokio::test]
    async fn test_no_authorization_header_without_token() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(header_exists("authorization"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server, None);
        let body = client.get("anything/").await.unwrap();

        assert_eq!(body["ok"], true);
    }

    #[tokio::test]
    async fn test_http_error_status_is_propagated() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server, None);
        let result = client.get(CURRENT_WEEK_PATH).await;

        match result {
            Err(PakError::Http(e)) => {
                assert_eq!(e.status(), Some(reqwest::StatusCode::INTERNAL_SERVER_ERROR))
            }
            other => panic!("Expected Http error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_invalid_json_body_is_an_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server, None);
        assert!(client.get(CURRENT_WEEK_PATH).await.is_err());
    }
}

#[cfg(test)]
mod url_tests {
    use super::*;

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let client =
            HttpApiClient::new("https://example.com/api/v1", None, Duration::from_secs(5)).unwrap();

        assert_eq!(client.base_url().as_str(), "https://example.com/api/v1/");
        assert_eq!(
            client.url_for(CURRENT_WEEK_PATH).unwrap().as_str(),
            "https://example.com/api/v1/current_week/"
        );
    }

    #[test]
    fn test_leading_slash_stays_under_base() {
        let client =
            HttpApiClient::new("https://example.com/api/", None, Duration::from_secs(5)).unwrap();

        assert_eq!(
            client.url_for("/playergames/").unwrap().as_str(),
            "https://example.com/api/playergames/"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        match HttpApiClient::new("not a url", None, Duration::from_secs(5)) {
            Err(PakError::InvalidBaseUrl { url, .. }) => assert_eq!(url, "not a url"),
            other => panic!("Expected InvalidBaseUrl error, got {:?}", other),
        }
    }

    #[test]
    fn test_common_headers() {
        let headers = common_headers(None).unwrap();
        assert_eq!(headers.get("accept").unwrap(), "application/json");
        assert!(!headers.contains_key("authorization"));

        let headers = common_headers(Some("abc")).unwrap();
        assert_eq!(headers.get("authorization").unwrap(), "Token abc");
    }

    #[test]
    fn test_token_with_newline_is_rejected() {
        match common_headers(Some("bad\ntoken")) {
            Err(PakError::InvalidHeader(_)) => (),
            other => panic!("Expected InvalidHeader error, got {:?}", other),
        }
    }
}
