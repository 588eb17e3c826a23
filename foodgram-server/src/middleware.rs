use axum::http::header::HeaderName;
use axum::http::{HeaderValue, Request, Uri, header};
use axum::middleware::Next;

pub async fn security_headers(
    req: Request<axum::body::Body>,
    next: Next,
) -> axum::response::Response {
    let mut resp = next.run(req).await;

    // Set a baseline of safe headers. (Avoid CSP/HSTS here; those need deployment-specific tuning.)
    let headers = resp.headers_mut();

    headers.insert(
        HeaderName::from_static("x-content-type-options"),
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(
        HeaderName::from_static("x-frame-options"),
        HeaderValue::from_static("DENY"),
    );
    headers.insert(
        HeaderName::from_static("referrer-policy"),
        HeaderValue::from_static("strict-origin-when-cross-origin"),
    );
    headers.insert(
        HeaderName::from_static("cross-origin-opener-policy"),
        HeaderValue::from_static("same-origin"),
    );

    resp
}

pub async fn static_cache_control(
    req: Request<axum::body::Body>,
    next: Next,
) -> axum::response::Response {
    let uri: Uri = req.uri().clone();
    let mut resp = next.run(req).await;

    // Assets are committed files without fingerprinting; cache for a day.
    if resp.status().is_success() && is_cacheable_asset(&uri) {
        resp.headers_mut().insert(
            header::CACHE_CONTROL,
            HeaderValue::from_static("public, max-age=86400"),
        );
    }

    resp
}

fn is_cacheable_asset(uri: &Uri) -> bool {
    matches!(
        uri.path().rsplit('.').next(),
        Some("css" | "js" | "svg" | "png" | "ico" | "webp")
    )
}
