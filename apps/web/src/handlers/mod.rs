//! HTTP handlers and the router that mounts them.

pub mod health;
pub mod pages;
pub mod resistance;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use crate::AppState;

/// Builds the application router.
///
/// | Method | Path              | Handler                          |
/// |--------|-------------------|----------------------------------|
/// | GET    | `/`               | [`pages::index`]                 |
/// | POST   | `/resistance`     | [`resistance::resistance_form`]  |
/// | GET    | `/about`          | [`pages::about`]                 |
/// | GET    | `/contact`        | [`pages::contact`]               |
/// | GET    | `/api/resistance` | [`resistance::resistance_api`]   |
/// | GET    | `/health`         | [`health::health`]               |
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(pages::index))
        .route("/resistance", post(resistance::resistance_form))
        .route("/about", get(pages::about))
        .route("/contact", get(pages::contact))
        .route("/api/resistance", get(resistance::resistance_api))
        .route("/health", get(health::health))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WebConfig;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use axum::response::Response;
    use tower::ServiceExt;

    fn test_app() -> Router {
        let mut config = WebConfig::default();
        config.site.title = "Test Bench".to_string();
        router(Arc::new(AppState { config }))
    }

    async fn body_text(resp: Response) -> String {
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    async fn get_path(uri: &str) -> Response {
        let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
        test_app().oneshot(req).await.unwrap()
    }

    async fn post_form(body: &'static str) -> Response {
        let req = Request::builder()
            .method("POST")
            .uri("/resistance")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap();
        test_app().oneshot(req).await.unwrap()
    }

    #[tokio::test]
    async fn test_index_renders_form() {
        let resp = get_path("/").await;
        assert_eq!(resp.status(), StatusCode::OK);

        let html = body_text(resp).await;
        assert!(html.contains("Test Bench"));
        assert!(html.contains(r#"<form id="bands" method="post" action="/resistance">"#));
        assert!(html.contains(r#"name="band_d""#));
    }

    #[tokio::test]
    async fn test_form_value() {
        let resp = post_form("band_a=yellow&band_b=violet&band_c=red&band_d=gold").await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(body_text(resp).await.contains("Resistance: 4.7 kΩ"));
    }

    #[tokio::test]
    async fn test_form_zero_ohm() {
        let resp = post_form("band_a=black&band_b=none&band_c=none&band_d=none").await;
        assert!(body_text(resp).await.contains("Resistance: 0 Ω"));
    }

    #[tokio::test]
    async fn test_form_validation_message_is_shown() {
        let resp = post_form("band_a=gray&band_b=violet&band_c=gold").await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(body_text(resp)
            .await
            .contains("Unhandled gold multiplier band."));
    }

    #[tokio::test]
    async fn test_form_missing_fields_are_unselected() {
        let resp = post_form("").await;
        assert!(body_text(resp)
            .await
            .contains("Significant figure band A not present."));
    }

    #[tokio::test]
    async fn test_form_unknown_color() {
        let resp = post_form("band_a=teal&band_b=red&band_c=red").await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(body_text(resp).await.contains("Unknown band color: &#39;teal&#39;"));
    }

    #[tokio::test]
    async fn test_api_value_beyond_32_bits() {
        let resp = get_path("/api/resistance?a=red&b=white&c=white").await;
        assert_eq!(resp.status(), StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body_text(resp).await).unwrap();
        assert_eq!(json["ohms"], 29_000_000_000_i64);
        assert_eq!(json["display"], "29 GΩ");
        assert_eq!(json["bands"][3], "none");
    }

    #[tokio::test]
    async fn test_api_validation_error() {
        let resp = get_path("/api/resistance?a=brown&b=gold").await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let json: serde_json::Value = serde_json::from_str(&body_text(resp).await).unwrap();
        assert_eq!(json["code"], "UNTRANSLATABLE_SIGNIFICANT_FIGURE_BAND");
        assert_eq!(
            json["message"],
            "Cannot convert a gold B band to a significant figure."
        );
    }

    #[tokio::test]
    async fn test_api_unknown_color() {
        let resp = get_path("/api/resistance?a=brown&b=black&c=plaid").await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let json: serde_json::Value = serde_json::from_str(&body_text(resp).await).unwrap();
        assert_eq!(json["code"], "INVALID_BAND_COLOR");
    }

    #[tokio::test]
    async fn test_about_and_contact() {
        let about = body_text(get_path("/about").await).await;
        assert!(about.contains(pages::ABOUT_MESSAGE));

        let contact = body_text(get_path("/contact").await).await;
        assert!(contact.contains(pages::CONTACT_MESSAGE));
    }

    #[tokio::test]
    async fn test_health() {
        let resp = get_path("/health").await;
        assert_eq!(resp.status(), StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body_text(resp).await).unwrap();
        assert_eq!(json["status"], "ok");
        assert!(json["serverTime"].as_str().is_some());
    }

    #[tokio::test]
    async fn test_unknown_path_is_not_found() {
        let resp = get_path("/nowhere").await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
