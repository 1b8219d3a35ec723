//! HTTP surface: single-topic news analysis over JSON.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::exa::ExaClient;
use crate::llm::OpenAiClient;
use crate::news::{AnalysisResponse, EnrichedArticle, NewsAnalyzer, Status};

pub type Analyzer = NewsAnalyzer<ExaClient, OpenAiClient>;

#[derive(Debug, Deserialize)]
pub struct NewsQuery {
    pub topic: String,
    pub country: String,
}

pub fn router(analyzer: Arc<Analyzer>) -> Router {
    Router::new()
        .route("/api/analyze-news/", post(analyze_news))
        .route("/api/analyze-news", post(analyze_news))
        .route("/health", get(health))
        .layer(CorsLayer::permissive())
        .with_state(analyzer)
}

/// Binds `addr` and serves until Ctrl-C.
pub async fn serve(addr: SocketAddr, analyzer: Analyzer) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "HTTP server listening");

    axum::serve(listener, router(Arc::new(analyzer)))
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!("failed to listen for shutdown signal: {e}");
            }
        })
        .await
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn analyze_news(
    State(analyzer): State<Arc<Analyzer>>,
    Json(query): Json<NewsQuery>,
) -> Json<AnalysisResponse> {
    info!(topic = %query.topic, country = %query.country, "request:analyze-news");

    let response = analyzer.analyze_topic(&query.topic, &query.country).await;

    match (&response.status, &response.data) {
        (Status::Success, Some(articles)) => {
            for (i, article) in articles.iter().enumerate() {
                log_article(i + 1, article);
            }
        }
        _ => warn!(
            error = response.error_message.as_deref().unwrap_or(""),
            "analysis failed"
        ),
    }

    Json(response)
}

fn log_article(position: usize, article: &EnrichedArticle) {
    info!(
        position,
        headline = %article.headline,
        url = %article.url,
        source = %article.source_domain,
        summary = %article.summary,
        sentiment = article.sentiment.as_str(),
        background = %article.source_background,
        analysis_error = article.analysis_error.as_deref(),
        "article report"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use reqwest::Client;
    use tower::ServiceExt;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn app(exa: &MockServer, llm: &MockServer) -> Router {
        let http = Client::new();
        let analyzer = NewsAnalyzer::new(
            ExaClient::with_base_url(http.clone(), &exa.uri()),
            OpenAiClient::with_base_url(http, &llm.uri()),
        );
        router(Arc::new(analyzer))
    }

    fn post_query(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn completion(content: &str) -> Value {
        json!({
            "choices": [{
                "message": {"role": "assistant", "content": content},
                "finish_reason": "stop"
            }]
        })
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let exa = MockServer::start().await;
        let llm = MockServer::start().await;
        let response = app(&exa, &llm)
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, json!({"status": "ok"}));
    }

    #[tokio::test]
    async fn analyze_news_returns_enriched_articles() {
        let exa = MockServer::start().await;
        let llm = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/search"))
            .and(body_partial_json(json!({
                "query": "latest news wildfires Canada",
                "numResults": 3,
                "type": "neural"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [{
                    "id": "r1",
                    "url": "https://www.example.com/fires",
                    "title": "Fires spread",
                    "text": "Short snippet"
                }]
            })))
            .mount(&exa)
            .await;
        Mock::given(method("POST"))
            .and(path("/contents"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [{"id": "r1", "text": "Full article text"}]
            })))
            .mount(&exa)
            .await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion(
                r#"{"summary":"Fires spread fast.","sentiment":"negative","source_background":"A news site."}"#,
            )))
            .mount(&llm)
            .await;

        let response = app(&exa, &llm)
            .oneshot(post_query(
                "/api/analyze-news/",
                json!({"topic": "wildfires", "country": "Canada"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["status"], "success");
        assert!(body["error_message"].is_null());

        let article = &body["data"][0];
        assert_eq!(article["headline"], "Fires spread");
        assert_eq!(article["source_domain"], "example.com");
        assert_eq!(article["full_text"], "Full article text");
        assert_eq!(article["summary"], "Fires spread fast.");
        assert_eq!(article["sentiment"], "negative");
        assert!(article.get("analysis_error").is_none());
    }

    #[tokio::test]
    async fn no_results_is_an_error_payload_with_ok_status() {
        let exa = MockServer::start().await;
        let llm = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
            .mount(&exa)
            .await;

        let response = app(&exa, &llm)
            .oneshot(post_query(
                "/api/analyze-news",
                json!({"topic": "nothing", "country": "Nowhere"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["status"], "error");
        assert!(body["data"].is_null());
        assert!(
            body["error_message"]
                .as_str()
                .unwrap()
                .contains("latest news nothing Nowhere")
        );
    }

    #[tokio::test]
    async fn search_failure_is_reported() {
        let exa = MockServer::start().await;
        let llm = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({"error": "bad key"})))
            .mount(&exa)
            .await;

        let response = app(&exa, &llm)
            .oneshot(post_query(
                "/api/analyze-news/",
                json!({"topic": "floods", "country": "Spain"}),
            ))
            .await
            .unwrap();

        let body = json_body(response).await;
        assert_eq!(body["status"], "error");
        assert!(
            body["error_message"]
                .as_str()
                .unwrap()
                .starts_with("Request processing error:")
        );
    }

    #[tokio::test]
    async fn missing_field_is_rejected() {
        let exa = MockServer::start().await;
        let llm = MockServer::start().await;
        let response = app(&exa, &llm)
            .oneshot(post_query("/api/analyze-news/", json!({"topic": "floods"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn cors_allows_any_origin() {
        let exa = MockServer::start().await;
        let llm = MockServer::start().await;
        let request = Request::get("/health")
            .header(header::ORIGIN, "http://localhost:3000")
            .body(Body::empty())
            .unwrap();
        let response = app(&exa, &llm).oneshot(request).await.unwrap();

        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
    }
}
