//! Embedded Leptos UI.
//!
//! `ui/dist` (the trunk build output) is compiled into the binary and served
//! for any path no API route claims. Paths without a matching asset get
//! `index.html` so the client-side shell can take over.

use axum::{
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "ui/dist"]
#[allow_missing = true]
struct UiAssets;

const INDEX: &str = "index.html";

pub async fn static_handler(uri: Uri) -> Response {
    let path = uri.path().trim_start_matches('/');
    let path = if path.is_empty() { INDEX } else { path };

    match UiAssets::get(path) {
        Some(file) => asset_response(path, file.data.into_owned()),
        None => match UiAssets::get(INDEX) {
            Some(index) => asset_response(INDEX, index.data.into_owned()),
            None => (
                StatusCode::NOT_FOUND,
                "UI assets not found. Build the UI with `trunk build --release` in ui/.",
            )
                .into_response(),
        },
    }
}

fn asset_response(path: &str, body: Vec<u8>) -> Response {
    let mime = mime_guess::from_path(path).first_or_octet_stream();
    ([(header::CONTENT_TYPE, mime.as_ref().to_string())], body).into_response()
}
