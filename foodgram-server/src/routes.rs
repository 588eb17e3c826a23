use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use axum_extra::routing::TypedPath;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::handlers::{api, web};
use crate::middleware;
use crate::state::AppState;

// Route paths are declared once here; handlers, navigation links and the
// sitemap all reuse the same structs.
macro_rules! define_routes {
    ( $( $vis:vis $name:ident => $path:literal; )* ) => {
        $(
            #[derive(Debug, Clone, TypedPath)]
            #[typed_path($path)]
            $vis struct $name;
        )*
    };
}

define_routes! {
    // --- Web routes ---
    pub IndexRoot => "/";
    pub TechnologiesPath => "/technologies";
    pub GithubStarsPartial => "/partials/github/stars";

    // --- SEO ---
    pub RobotsTxt => "/robots.txt";
    pub SitemapXml => "/sitemap.xml";

    // --- API routes ---
    pub ApiVersion => "/api/version";
    pub ApiTechnologies => "/api/technologies";
}

/// Build the full Axum app (routes + middleware + static assets fallback).
///
/// Centralizes route registration to keep URL patterns and reverse routing consistent.
pub fn build_app(state: Arc<AppState>, assets_dir: PathBuf) -> Router {
    let cors_layer = cors_layer_from_env();
    let app = Router::new()
        // Web
        .route(IndexRoot::PATH, get(web::root_handler))
        .route(TechnologiesPath::PATH, get(web::technologies_handler))
        .route(
            GithubStarsPartial::PATH,
            get(web::github_stars_partial_handler),
        )
        // SEO
        .route(RobotsTxt::PATH, get(web::robots_txt_handler))
        .route(SitemapXml::PATH, get(web::sitemap_xml_handler))
        // API
        .route(ApiVersion::PATH, get(api::get_version))
        .route(ApiTechnologies::PATH, get(api::get_technologies))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::security_headers))
                .layer(CompressionLayer::new())
                .layer(cors_layer),
        );

    let static_service = ServiceBuilder::new()
        .layer(axum::middleware::from_fn(middleware::security_headers))
        .layer(CompressionLayer::new())
        .layer(axum::middleware::from_fn(middleware::static_cache_control))
        .service(ServeDir::new(assets_dir).append_index_html_on_directories(false));

    app.fallback_service(static_service)
}

fn cors_layer_from_env() -> CorsLayer {
    // For a public site, permissive CORS is typically not desired.
    //
    // Configure explicitly via:
    // - FOODGRAM_CORS_ALLOW_ORIGINS="https://example.com,https://other.com"
    // - FOODGRAM_CORS_ALLOW_ORIGINS="*" (not recommended for public prod)
    let raw = std::env::var("FOODGRAM_CORS_ALLOW_ORIGINS").unwrap_or_default();
    let raw = raw.trim();
    if raw.is_empty() {
        // Default: do not emit CORS headers.
        return CorsLayer::new();
    }

    if raw == "*" {
        return CorsLayer::new().allow_origin(Any);
    }

    let mut origins: Vec<axum::http::HeaderValue> = Vec::new();
    for part in raw.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        if let Ok(hv) = axum::http::HeaderValue::from_str(part) {
            origins.push(hv);
        }
    }

    if origins.is_empty() {
        return CorsLayer::new();
    }

    CorsLayer::new().allow_origin(AllowOrigin::list(origins))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn test_app() -> Router {
        let assets_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets");
        build_app(Arc::new(AppState::new()), assets_dir)
    }

    async fn fetch(app: Router, uri: &str) -> (StatusCode, axum::http::HeaderMap, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, headers, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn technologies_page_renders() {
        let (status, headers, body) = fetch(test_app(), "/technologies").await;

        assert_eq!(status, StatusCode::OK);
        let content_type = headers.get("content-type").unwrap().to_str().unwrap();
        assert!(content_type.starts_with("text/html"));

        assert!(body.contains("<h1 class=\"title\">Технологии</h1>"));
        assert!(body.contains("Backend разработка"));
        assert!(body.contains("class=\"tech-card\""));
        assert!(body.contains(">v3.9+<"));
    }

    #[tokio::test]
    async fn root_redirects_to_technologies() {
        let (status, headers, _) = fetch(test_app(), "/").await;

        assert_eq!(status, StatusCode::PERMANENT_REDIRECT);
        assert_eq!(headers.get("location").unwrap(), "/technologies");
    }

    #[tokio::test]
    async fn responses_carry_security_headers() {
        let (_, headers, _) = fetch(test_app(), "/technologies").await;
        assert_eq!(headers.get("x-content-type-options").unwrap(), "nosniff");
        assert_eq!(headers.get("x-frame-options").unwrap(), "DENY");

        let (_, headers, _) = fetch(test_app(), "/css/app.css").await;
        assert_eq!(headers.get("x-content-type-options").unwrap(), "nosniff");
    }

    #[tokio::test]
    async fn robots_txt_points_to_sitemap() {
        let (status, _, body) = fetch(test_app(), "/robots.txt").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.starts_with("User-agent: *"));
        assert!(body.contains("Sitemap:"));
        assert!(body.contains("/sitemap.xml"));
    }

    #[tokio::test]
    async fn sitemap_lists_page_urls() {
        let (status, headers, body) = fetch(test_app(), "/sitemap.xml").await;

        assert_eq!(status, StatusCode::OK);
        let content_type = headers.get("content-type").unwrap().to_str().unwrap();
        assert!(content_type.starts_with("application/xml"));
        assert!(body.contains("<urlset"));
        assert!(body.contains("/technologies</loc>"));
    }

    #[tokio::test]
    async fn api_version_reports_crate_version() {
        let (status, _, body) = fetch(test_app(), "/api/version").await;

        assert_eq!(status, StatusCode::OK);
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn api_technologies_returns_grouped_catalog() {
        let (status, _, body) = fetch(test_app(), "/api/technologies").await;

        assert_eq!(status, StatusCode::OK);
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["backend"].as_array().unwrap().len(), 4);
        assert_eq!(value["frontend"].as_array().unwrap().len(), 4);
        assert_eq!(value["devops"].as_array().unwrap().len(), 3);
        assert_eq!(value["backend"][0]["name"], "Python");
        assert_eq!(value["backend"][0]["version"], "3.9+");
    }

    #[tokio::test]
    async fn stylesheet_is_served_with_cache_header() {
        let (status, headers, body) = fetch(test_app(), "/css/app.css").await;

        assert_eq!(status, StatusCode::OK);
        let content_type = headers.get("content-type").unwrap().to_str().unwrap();
        assert!(content_type.starts_with("text/css"));
        assert_eq!(
            headers.get("cache-control").unwrap(),
            "public, max-age=86400"
        );
        assert!(body.contains(".tech-card"));
    }

    #[tokio::test]
    async fn unknown_path_is_not_found() {
        let (status, _, _) = fetch(test_app(), "/recipes").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn github_stars_partial_degrades_gracefully() {
        let (status, headers, body) = fetch(test_app(), "/partials/github/stars").await;

        assert_eq!(status, StatusCode::OK);
        let content_type = headers.get("content-type").unwrap().to_str().unwrap();
        assert!(content_type.starts_with("text/plain"));
        // Either a cached star count or an empty body when GitHub is unreachable.
        assert!(body.is_empty() || body.chars().all(|c| c.is_ascii_digit()));
    }
}
