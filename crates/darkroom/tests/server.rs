//! End-to-end tests over the HTTP surface.

use std::io::Cursor;
use std::sync::Arc;

use axum_test::multipart::{MultipartForm, Part};
use axum_test::TestServer;
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use serde::Serialize;

use darkroom::server::{router, AppState};
use darkroom_core::{Config, MemoryStore};

fn test_server() -> TestServer {
    let config = Config::default();
    let state = AppState::new(&config, Arc::new(MemoryStore::new())).unwrap();
    TestServer::new(router(state, config.limits.max_upload_mb)).unwrap()
}

fn png_upload(width: u32, height: u32) -> Vec<u8> {
    let img = DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
    }));
    let mut buffer = Cursor::new(Vec::new());
    img.write_to(&mut buffer, ImageFormat::Png).unwrap();
    buffer.into_inner()
}

fn image_form(bytes: Vec<u8>) -> MultipartForm {
    MultipartForm::new().add_part(
        "image",
        Part::bytes(bytes).file_name("upload.png").mime_type("image/png"),
    )
}

/// Pull the `image_id` hidden-input value out of the filter page.
fn extract_image_id(html: &str) -> String {
    let marker = "name=\"image_id\" value=\"";
    let start = html.find(marker).expect("image_id input present") + marker.len();
    let end = html[start..].find('"').unwrap() + start;
    html[start..end].to_string()
}

/// Pull the first JPEG data URI out of a page.
fn extract_data_uri(html: &str) -> String {
    let start = html.find("data:image/jpeg;base64,").expect("data URI present");
    let end = html[start..].find('"').unwrap() + start;
    html[start..end].to_string()
}

fn decode_data_uri(uri: &str) -> DynamicImage {
    let bytes = darkroom_core::payload::from_data_uri(uri).unwrap();
    image::load_from_memory(&bytes).unwrap()
}

#[derive(Serialize)]
struct ApplyForm<'a> {
    image_id: &'a str,
    selected_filter: &'a str,
}

#[derive(Serialize)]
struct DownloadForm<'a> {
    image_data: &'a str,
    filter_name: &'a str,
}

#[tokio::test]
async fn home_lists_the_filter_catalog() {
    let server = test_server();
    let response = server.get("/").await;

    response.assert_status_ok();
    let html = response.text();
    for name in ["grayscale", "sepia", "vintage", "glitch", "edge_enhance"] {
        assert!(html.contains(name), "menu should list {name}");
    }
}

#[tokio::test]
async fn upload_then_preview_roundtrips_the_stored_payload() {
    let server = test_server();

    let response = server.post("/upload").multipart(image_form(png_upload(64, 48))).await;
    response.assert_status_ok();
    let html = response.text();
    let image_id = extract_image_id(&html);
    let uploaded_uri = extract_data_uri(&html);

    // The preview page for the same id serves the identical payload
    let page = server
        .get("/apply-filter")
        .add_query_param("image_id", &image_id)
        .await;
    page.assert_status_ok();
    assert_eq!(extract_data_uri(&page.text()), uploaded_uri);
}

#[tokio::test]
async fn unknown_filter_is_the_identity_transform() {
    let server = test_server();

    let html = server
        .post("/upload")
        .multipart(image_form(png_upload(32, 32)))
        .await
        .text();
    let image_id = extract_image_id(&html);
    let uploaded_uri = extract_data_uri(&html);

    let response = server
        .post("/api/apply-filter")
        .form(&ApplyForm {
            image_id: &image_id,
            selected_filter: "does_not_exist",
        })
        .await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["image_data"], uploaded_uri);
    assert_eq!(body["filter_name"], "Unknown");
}

#[tokio::test]
async fn known_filter_returns_a_filtered_jpeg() {
    let server = test_server();

    let html = server
        .post("/upload")
        .multipart(image_form(png_upload(40, 20)))
        .await
        .text();
    let image_id = extract_image_id(&html);
    let uploaded_uri = extract_data_uri(&html);

    let response = server
        .post("/api/apply-filter")
        .form(&ApplyForm {
            image_id: &image_id,
            selected_filter: "invert",
        })
        .await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["filter_name"], "Invert colors");

    let uri = body["image_data"].as_str().unwrap();
    assert_ne!(uri, uploaded_uri);
    let filtered = decode_data_uri(uri);
    assert_eq!((filtered.width(), filtered.height()), (40, 20));
}

#[tokio::test]
async fn unknown_identifier_is_not_found() {
    let server = test_server();

    let page = server
        .get("/apply-filter")
        .add_query_param("image_id", "no-such-image")
        .await;
    page.assert_status_not_found();
    let body: serde_json::Value = page.json();
    assert_eq!(body["error"], "Image not found");

    let api = server
        .post("/api/apply-filter")
        .form(&ApplyForm {
            image_id: "no-such-image",
            selected_filter: "sepia",
        })
        .await;
    api.assert_status_not_found();
}

#[tokio::test]
async fn oversized_upload_is_downscaled_to_the_max_dimension() {
    let server = test_server();

    let html = server
        .post("/upload")
        .multipart(image_form(png_upload(2400, 1200)))
        .await
        .text();
    let preview = decode_data_uri(&extract_data_uri(&html));
    assert_eq!((preview.width(), preview.height()), (1200, 600));
}

#[tokio::test]
async fn corrupt_upload_is_a_bad_request() {
    let server = test_server();

    let form = MultipartForm::new().add_part(
        "image",
        Part::bytes(b"not an image".to_vec())
            .file_name("fake.png")
            .mime_type("image/png"),
    );
    let response = server.post("/upload").multipart(form).await;
    response.assert_status_bad_request();
    let body: serde_json::Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("Decode"));
}

#[tokio::test]
async fn missing_image_field_is_a_bad_request() {
    let server = test_server();

    let form = MultipartForm::new().add_part(
        "wrong_field",
        Part::bytes(png_upload(8, 8)).file_name("a.png").mime_type("image/png"),
    );
    let response = server.post("/upload").multipart(form).await;
    response.assert_status_bad_request();
}

#[tokio::test]
async fn download_returns_a_jpeg_attachment() {
    let server = test_server();

    let html = server
        .post("/upload")
        .multipart(image_form(png_upload(16, 16)))
        .await
        .text();
    let uri = extract_data_uri(&html);
    let expected = darkroom_core::payload::from_data_uri(&uri).unwrap();

    let response = server
        .post("/download")
        .form(&DownloadForm {
            image_data: &uri,
            filter_name: "Sepia tone effect",
        })
        .await;
    response.assert_status_ok();
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "image/jpeg"
    );
    let disposition = response
        .headers()
        .get("content-disposition")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.contains("attachment"));
    assert!(disposition.contains("filtered_image_Sepia tone effect.jpg"));
    assert_eq!(response.as_bytes().to_vec(), expected);
}

#[tokio::test]
async fn malformed_base64_download_is_a_bad_request() {
    let server = test_server();

    let response = server
        .post("/download")
        .form(&DownloadForm {
            image_data: "data:image/jpeg;base64,@@not-base64@@",
            filter_name: "whatever",
        })
        .await;
    response.assert_status_bad_request();
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Invalid image data");
}

#[tokio::test]
async fn glitch_is_reproducible_with_a_pinned_seed() {
    let mut config = Config::default();
    config.filters.glitch_seed = Some(99);
    let state = AppState::new(&config, Arc::new(MemoryStore::new())).unwrap();
    let server = TestServer::new(router(state, config.limits.max_upload_mb)).unwrap();

    let html = server
        .post("/upload")
        .multipart(image_form(png_upload(30, 30)))
        .await
        .text();
    let image_id = extract_image_id(&html);

    let first: serde_json::Value = server
        .post("/api/apply-filter")
        .form(&ApplyForm {
            image_id: &image_id,
            selected_filter: "glitch",
        })
        .await
        .json();
    let second: serde_json::Value = server
        .post("/api/apply-filter")
        .form(&ApplyForm {
            image_id: &image_id,
            selected_filter: "glitch",
        })
        .await
        .json();

    assert_eq!(first["image_data"], second["image_data"]);
}
