use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "frontend/"]
struct DashboardAssets;

/// Serves the embedded dashboard page, falling back to index.html for any
/// path that is not a bundled asset.
pub async fn serve_static(req: Request<Body>) -> impl IntoResponse {
    let path = req.uri().path().trim_start_matches('/');

    if let Some(content) = DashboardAssets::get(path) {
        return response_from_asset(path, &content.data);
    }

    if let Some(content) = DashboardAssets::get("index.html") {
        return response_from_asset("index.html", &content.data);
    }

    Response::builder()
        .status(StatusCode::NOT_FOUND)
        .body(Body::from("Not Found"))
        .unwrap()
}

fn response_from_asset(path: &str, data: &[u8]) -> Response<Body> {
    let mime = mime_guess::from_path(path)
        .first_or_octet_stream()
        .to_string();

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, mime)
        .body(Body::from(data.to_vec()))
        .unwrap()
}
