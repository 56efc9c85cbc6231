//! HTTP behaviour of the REST client against a mock WordPress site.

use serde_json::{json, Value};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};
use wordpress_mcp::config::SiteConfig;
use wordpress_mcp::wordpress::{Query, WpClient, WpError};

fn client_for(server: &MockServer) -> WpClient {
    WpClient::new(&SiteConfig::new(server.uri(), "admin", "secret")).unwrap()
}

#[tokio::test]
async fn get_sends_credentials_and_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wp-json/wp/v2/pages"))
        .and(header("authorization", "Basic YWRtaW46c2VjcmV0"))
        .and(header("content-type", "application/json"))
        .and(query_param("per_page", "20"))
        .and(query_param("page", "1"))
        .and(query_param("parent", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 1}])))
        .expect(1)
        .mount(&server)
        .await;

    let query = Query::new()
        .param("per_page", 20_u64)
        .param("page", 1_u64)
        .opt("status", None::<&str>)
        .param("parent", 0_u64);
    let pages: Vec<Value> = client_for(&server)
        .get("/wp/v2/pages", &query)
        .await
        .unwrap();

    assert_eq!(pages, vec![json!({"id": 1})]);
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), Some("per_page=20&page=1&parent=0"));
}

#[tokio::test]
async fn non_success_status_surfaces_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wp-json/wp/v2/posts/999"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .get::<Value>("/wp/v2/posts/999", &Query::new())
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(404));
    let message = err.to_string();
    assert!(message.contains("404"), "{message}");
    assert!(message.contains("not found"), "{message}");
}

#[tokio::test]
async fn put_sends_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/wp-json/wp/v2/comments/12"))
        .and(body_json(json!({"status": "spam"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 12, "status": "spam"})))
        .expect(1)
        .mount(&server)
        .await;

    let updated: Value = client_for(&server)
        .put("/wp/v2/comments/12", &json!({"status": "spam"}))
        .await
        .unwrap();
    assert_eq!(updated["status"], "spam");
}

#[tokio::test]
async fn delete_carries_force_flag() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/wp-json/wp/v2/tags/3"))
        .and(query_param("force", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"deleted": true})))
        .expect(1)
        .mount(&server)
        .await;

    let result: Value = client_for(&server)
        .delete("/wp/v2/tags/3", &Query::new().param("force", 1_u32))
        .await
        .unwrap();
    assert_eq!(result["deleted"], true);
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .get::<Value>("/", &Query::new())
        .await
        .unwrap_err();
    assert!(matches!(err, WpError::Decode { .. }));
    assert_eq!(err.status(), None);
}
