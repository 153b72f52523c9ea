// Tests for the multipart upload and sample download endpoints

use std::sync::Arc;

use actix_web::{App, test, web};

use sampler_server::api;
use sampler_server::middleware::RequestTiming;
use sampler_server::model::{AppState, Configuration};
use sampler_server::startup::ShutdownSignal;

/// Create a test app with the default configuration
async fn create_test_app() -> impl actix_web::dev::Service<
    actix_http::Request,
    Response = actix_web::dev::ServiceResponse,
    Error = actix_web::Error,
> {
    create_test_app_with(Configuration::from_env()).await
}

/// Create a test app with a custom configuration
async fn create_test_app_with(
    configuration: Configuration,
) -> impl actix_web::dev::Service<
    actix_http::Request,
    Response = actix_web::dev::ServiceResponse,
    Error = actix_web::Error,
> {
    let app_state = Arc::new(AppState::new(configuration, ShutdownSignal::new()));

    test::init_service(
        App::new()
            .wrap(RequestTiming)
            .app_data(web::Data::from(app_state))
            .service(api::routes()),
    )
    .await
}

/// Build a single-field multipart/form-data request body
fn multipart_body(boundary: &str, field_name: &str, filename: &str, content: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{}\r\n", boundary).as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
            field_name, filename
        )
        .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: text/plain\r\n\r\n");
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{}--\r\n", boundary).as_bytes());

    body
}

#[actix_web::test]
async fn test_download_sample_document() {
    let app = create_test_app().await;

    let req = test::TestRequest::get().uri("/files/sample.txt").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let disposition = resp
        .headers()
        .get("content-disposition")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.contains("attachment"));
    assert!(disposition.contains("sample.txt"));

    let body = test::read_body(resp).await;
    let text = String::from_utf8(body.to_vec()).unwrap();
    assert_eq!(text, "Sample text from server\n".repeat(10));
}

#[actix_web::test]
async fn test_upload_roundtrip() {
    let app = create_test_app().await;

    let boundary = "test-boundary";
    let body = multipart_body(boundary, "file", "notes.txt", b"hello world");

    let req = test::TestRequest::post()
        .uri("/files/upload")
        .insert_header((
            "content-type",
            format!("multipart/form-data; boundary={}", boundary),
        ))
        .set_payload(body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 0);
    assert_eq!(body["data"]["filename"], "notes.txt");
    assert_eq!(body["data"]["size"], 11);
}

#[actix_web::test]
async fn test_upload_requires_file_field() {
    let app = create_test_app().await;

    let boundary = "test-boundary";
    let body = multipart_body(boundary, "other", "notes.txt", b"hello world");

    let req = test::TestRequest::post()
        .uri("/files/upload")
        .insert_header((
            "content-type",
            format!("multipart/form-data; boundary={}", boundary),
        ))
        .set_payload(body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 10000);
    assert!(body["data"].as_str().unwrap().contains("file"));
}

#[actix_web::test]
async fn test_upload_over_limit() {
    // Lower the size limit so a small payload trips it
    let config = config::Config::builder()
        .set_override("upload.limit", 16)
        .expect("override")
        .build()
        .expect("config");
    let app = create_test_app_with(Configuration { config }).await;

    let boundary = "test-boundary";
    let body = multipart_body(boundary, "file", "big.bin", &[b'x'; 64]);

    let req = test::TestRequest::post()
        .uri("/files/upload")
        .insert_header((
            "content-type",
            format!("multipart/form-data; boundary={}", boundary),
        ))
        .set_payload(body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 5034);
    assert!(body["data"].as_str().unwrap().contains("over limit"));
}

#[actix_web::test]
async fn test_upload_rejects_non_multipart() {
    let app = create_test_app().await;

    let req = test::TestRequest::post()
        .uri("/files/upload")
        .set_payload("plain text")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 500);
}
