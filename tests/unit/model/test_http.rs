use bookstack_client::error::AppError;
use bookstack_client::model::form::{Form, FormBody, MultipartForm};
use bookstack_client::model::http::Bookstack;
use bookstack_client::model::responses::parse_single;
use bookstack_client::presentation::book::Book;
use mockito::{Matcher, Server};
use reqwest::Method;
use std::io::Write;
use std::sync::{Arc, Mutex};

fn client(url: &str) -> Bookstack {
    Bookstack::builder()
        .url(url)
        .token("token-id", "token-secret")
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_request_returns_raw_body() {
    let mut server = Server::new_async().await;
    let body = r#"{"id":1,"name":"Shelf"}"#;
    let mock = server
        .mock("GET", "/api/books/1")
        .match_header("authorization", "Token token-id:token-secret")
        .match_header("content-type", Matcher::Missing)
        .with_status(200)
        .with_body(body)
        .create_async()
        .await;

    let raw = client(&server.url())
        .request(Method::GET, "books/1", None)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(raw, body.as_bytes());
    let book: Book = parse_single(&raw).unwrap();
    assert_eq!(book.id, 1);
    assert_eq!(book.name, "Shelf");
}

#[tokio::test]
async fn test_slashes_are_normalized() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/users")
        .with_status(200)
        .with_body(r#"{"data":[]}"#)
        .expect(2)
        .create_async()
        .await;

    let bookstack = client(&format!("{}//", server.url()));
    bookstack.request(Method::GET, "//users", None).await.unwrap();
    bookstack.request(Method::GET, "users", None).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_json_body_sets_content_type() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/users")
        .match_header("content-type", "application/json")
        .match_body(Matcher::JsonString(r#"{"name":"Dan"}"#.to_string()))
        .with_status(200)
        .with_body(r#"{"id":7,"name":"Dan"}"#)
        .create_async()
        .await;

    client(&server.url())
        .request(Method::POST, "/users", Some(br#"{"name":"Dan"}"#.as_slice()))
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_empty_body_sends_no_content_type() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("DELETE", "/api/books/3")
        .match_header("content-type", Matcher::Missing)
        .with_status(204)
        .create_async()
        .await;

    let raw = client(&server.url())
        .request(Method::DELETE, "books/3", Some(b"".as_slice()))
        .await
        .unwrap();

    mock.assert_async().await;
    assert!(raw.is_empty());
}

#[tokio::test]
async fn test_not_found_surfaces_api_message() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/books/99")
        .with_status(404)
        .with_body(r#"{"error":{"code":404,"message":"not found"}}"#)
        .create_async()
        .await;

    let err = client(&server.url())
        .request(Method::GET, "books/99", None)
        .await
        .unwrap_err();

    assert!(err.to_string().contains("not found"));
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_malformed_error_envelope_is_json_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/books")
        .with_status(500)
        .with_body("<html>Server Error</html>")
        .create_async()
        .await;

    let err = client(&server.url())
        .request(Method::GET, "books", None)
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Json(_)));
}

#[tokio::test]
async fn test_json_path_rejects_201() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/api/books")
        .with_status(201)
        .with_body(r#"{"id":1}"#)
        .create_async()
        .await;

    let err = client(&server.url())
        .request(Method::POST, "books", Some(b"{}".as_slice()))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Unexpected(status) if status.as_u16() == 201));
}

#[tokio::test]
async fn test_form_accepts_226() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/books")
        .match_header("authorization", "Token token-id:token-secret")
        .match_header("content-type", "multipart/form-data; boundary=XYZ")
        .match_body(Matcher::Regex("name=\"name\"\r\n\r\nHandbook\r\n".to_string()))
        .with_status(226)
        .with_body(r#"{"id":5,"name":"Handbook"}"#)
        .create_async()
        .await;

    let form = MultipartForm::with_boundary("XYZ").text("name", "Handbook");
    let raw = client(&server.url())
        .form(Method::POST, "books", &form)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(raw, br#"{"id":5,"name":"Handbook"}"#);
}

#[tokio::test]
async fn test_json_path_rejects_226() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/books")
        .with_status(226)
        .with_body("{}")
        .create_async()
        .await;

    let err = client(&server.url())
        .request(Method::GET, "books", None)
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Unexpected(_)));
}

#[tokio::test]
async fn test_form_uses_encoder_content_type() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PUT", "/api/attachments/1")
        .match_header("content-type", "application/x-www-form-urlencoded")
        .match_body("name=report")
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let form = FormBody {
        content_type: "application/x-www-form-urlencoded".to_string(),
        body: b"name=report".to_vec(),
    };
    client(&server.url())
        .form(Method::PUT, "attachments/1", &form)
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_form_error_status() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/api/books")
        .with_status(422)
        .with_body(
            r#"{"error":{"code":422,"message":"The given data was invalid.","validation":{"name":["The name field is required."]}}}"#,
        )
        .create_async()
        .await;

    let form = MultipartForm::new().text("description", "no name");
    let err = client(&server.url())
        .form(Method::POST, "books", &form)
        .await
        .unwrap_err();

    match err {
        AppError::Api { code, message } => {
            assert_eq!(code, 422);
            assert!(message.contains("The name field is required."));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

struct FailingForm;

impl Form for FailingForm {
    fn form(&self) -> Result<FormBody, AppError> {
        Err(AppError::Form("cannot encode".to_string()))
    }
}

#[tokio::test]
async fn test_encoder_failure_is_returned() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/books")
        .expect(0)
        .create_async()
        .await;

    let err = client(&server.url())
        .form(Method::POST, "books", &FailingForm)
        .await
        .unwrap_err();

    mock.assert_async().await;
    assert!(matches!(err, AppError::Form(_)));
}

#[tokio::test]
async fn test_connection_failure_is_http_error() {
    let err = client("http://127.0.0.1:1")
        .request(Method::GET, "books", None)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Http(_)));
}

#[tokio::test]
async fn test_client_usable_after_failure() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/books/1")
        .with_status(403)
        .with_body(r#"{"error":{"code":403,"message":"forbidden"}}"#)
        .create_async()
        .await;
    server
        .mock("GET", "/api/books/2")
        .with_status(200)
        .with_body(r#"{"id":2}"#)
        .create_async()
        .await;

    let bookstack = client(&server.url());
    assert!(bookstack.request(Method::GET, "books/1", None).await.is_err());
    let book: Book = bookstack.get_single("books/2").await.unwrap();
    assert_eq!(book.id, 2);
}

#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[tokio::test]
async fn test_logger_receives_request_events() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/books")
        .with_status(200)
        .with_body(r#"{"data":[]}"#)
        .create_async()
        .await;

    let buffer = SharedBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    let bookstack = Bookstack::builder()
        .url(server.url())
        .token("token-id", "token-secret")
        .logger(subscriber)
        .build()
        .unwrap();
    bookstack.request(Method::GET, "books", None).await.unwrap();

    let output = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
    assert!(output.contains("GET"));
    assert!(output.contains("/api/books"));
}
