//! Image upload/delete integration tests.
//!
//! Run with: `cargo test -p picto-api --test images_test`

mod helpers;

use axum_test::multipart::{MultipartForm, Part};
use helpers::{setup_test_app, setup_test_app_with, RecordingTranslator};
use serde_json::{json, Value};

fn image_form(filename: &str, data: &[u8]) -> MultipartForm {
    MultipartForm::new().add_part(
        "file",
        Part::bytes(data.to_vec())
            .file_name(filename)
            .mime_type("image/png"),
    )
}

#[tokio::test]
async fn test_upload_image_stores_file_with_extension() {
    let app = setup_test_app().await;
    let data = b"\x89PNG\r\n\x1a\n not really a png";

    let response = app
        .client()
        .post("/upload-image/")
        .multipart(image_form("cat.png", data))
        .await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    let file_id = body["file_id"].as_str().expect("file_id is a string");
    assert_eq!(body.as_object().unwrap().len(), 1);

    let expected_name = format!("{}.png", file_id);
    assert_eq!(app.stored_files(), vec![expected_name.clone()]);
    let written = std::fs::read(app.storage_dir().join(expected_name)).unwrap();
    assert_eq!(written, data.to_vec());
}

#[tokio::test]
async fn test_upload_without_extension_and_empty_content() {
    let app = setup_test_app().await;

    let response = app
        .client()
        .post("/upload-image/")
        .multipart(image_form("snapshot", b""))
        .await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    let file_id = body["file_id"].as_str().unwrap().to_string();
    assert_eq!(app.stored_files(), vec![file_id.clone()]);
    assert!(std::fs::read(app.storage_dir().join(file_id)).unwrap().is_empty());
}

#[tokio::test]
async fn test_uploads_get_distinct_ids() {
    let app = setup_test_app().await;

    let first: Value = app
        .client()
        .post("/upload-image/")
        .multipart(image_form("a.jpg", b"a"))
        .await
        .json();
    let second: Value = app
        .client()
        .post("/upload-image/")
        .multipart(image_form("a.jpg", b"b"))
        .await
        .json();

    assert_ne!(first["file_id"], second["file_id"]);
    assert_eq!(app.stored_files().len(), 2);
}

#[tokio::test]
async fn test_upload_larger_than_axum_default_limit() {
    let app = setup_test_app().await;
    let data = vec![7u8; 3 * 1024 * 1024];

    let response = app
        .client()
        .post("/upload-image/")
        .multipart(image_form("big.png", &data))
        .await;

    assert_eq!(response.status_code(), 200);
    assert_eq!(app.stored_files().len(), 1);
}

#[tokio::test]
async fn test_upload_over_configured_limit_is_rejected() {
    let app = setup_test_app_with(RecordingTranslator::succeeding(), Some(1024)).await;
    let data = vec![0u8; 4096];

    let response = app
        .client()
        .post("/upload-image/")
        .multipart(image_form("big.png", &data))
        .await;

    assert_eq!(response.status_code(), 413);
    assert!(app.stored_files().is_empty());
}

#[tokio::test]
async fn test_upload_without_file_field() {
    let app = setup_test_app().await;

    let form = MultipartForm::new().add_text("note", "no file here");
    let response = app.client().post("/upload-image/").multipart(form).await;

    assert_eq!(response.status_code(), 422);
    let body: Value = response.json();
    assert_eq!(body, json!({ "detail": "No file provided" }));
    assert!(app.stored_files().is_empty());
}

#[tokio::test]
async fn test_upload_requires_multipart_body() {
    let app = setup_test_app().await;

    let response = app
        .client()
        .post("/upload-image/")
        .json(&json!({ "file": "cat.png" }))
        .await;

    assert_eq!(response.status_code(), 422);
    let body: Value = response.json();
    assert!(body["detail"].as_str().is_some());
}

#[tokio::test]
async fn test_delete_image_workflow() {
    let app = setup_test_app().await;

    let uploaded: Value = app
        .client()
        .post("/upload-image/")
        .multipart(image_form("cat.png", b"meow"))
        .await
        .json();
    let file_id = uploaded["file_id"].as_str().unwrap();

    let response = app
        .client()
        .delete(&format!("/delete-image/{}", file_id))
        .await;
    assert_eq!(response.status_code(), 200);
    assert_eq!(
        response.json::<Value>(),
        json!({ "message": "File deleted successfully" })
    );
    assert!(app.stored_files().is_empty());

    let again = app
        .client()
        .delete(&format!("/delete-image/{}", file_id))
        .await;
    assert_eq!(again.status_code(), 404);
    assert_eq!(again.json::<Value>(), json!({ "detail": "File not found" }));
}

#[tokio::test]
async fn test_delete_unknown_id_leaves_other_files() {
    let app = setup_test_app().await;

    app.client()
        .post("/upload-image/")
        .multipart(image_form("keep.png", b"keep"))
        .await
        .assert_status_ok();
    let before = app.stored_files();

    let response = app.client().delete("/delete-image/nonexistent-token").await;

    assert_eq!(response.status_code(), 404);
    assert_eq!(response.json::<Value>(), json!({ "detail": "File not found" }));
    assert_eq!(app.stored_files(), before);
}

#[tokio::test]
async fn test_delete_removes_only_the_requested_image() {
    let app = setup_test_app().await;

    let keep: Value = app
        .client()
        .post("/upload-image/")
        .multipart(image_form("keep.png", b"keep"))
        .await
        .json();
    let remove: Value = app
        .client()
        .post("/upload-image/")
        .multipart(image_form("remove.jpg", b"remove"))
        .await
        .json();

    let response = app
        .client()
        .delete(&format!("/delete-image/{}", remove["file_id"].as_str().unwrap()))
        .await;
    assert_eq!(response.status_code(), 200);

    assert_eq!(
        app.stored_files(),
        vec![format!("{}.png", keep["file_id"].as_str().unwrap())]
    );
}

#[tokio::test]
async fn test_storage_failure_returns_generic_error() {
    let app = setup_test_app().await;

    let uploaded: Value = app
        .client()
        .post("/upload-image/")
        .multipart(image_form("cat.png", b"meow"))
        .await
        .json();
    let file_id = uploaded["file_id"].as_str().unwrap().to_string();

    std::fs::remove_dir_all(app.storage_dir()).unwrap();

    let upload = app
        .client()
        .post("/upload-image/")
        .multipart(image_form("dog.png", b"woof"))
        .await;
    assert_eq!(upload.status_code(), 500);
    assert_eq!(
        upload.json::<Value>(),
        json!({ "detail": "Internal server error" })
    );

    let delete = app
        .client()
        .delete(&format!("/delete-image/{}", file_id))
        .await;
    assert_eq!(delete.status_code(), 500);
    assert_eq!(
        delete.json::<Value>(),
        json!({ "detail": "Internal server error" })
    );
}

#[tokio::test]
async fn test_unmatched_routes_use_error_body() {
    let app = setup_test_app().await;

    let missing_id = app.client().delete("/delete-image/").await;
    assert_eq!(missing_id.status_code(), 404);
    assert_eq!(missing_id.json::<Value>(), json!({ "detail": "Not Found" }));

    let wrong_method = app.client().get("/translate/").await;
    assert_eq!(wrong_method.status_code(), 405);
    assert_eq!(
        wrong_method.json::<Value>(),
        json!({ "detail": "Method Not Allowed" })
    );

    let get_upload = app.client().get("/upload-image/").await;
    assert_eq!(get_upload.status_code(), 405);

    assert!(app.translator.calls().is_empty());
}
