use bookstack_client::presentation::book::{BookDetailed, BookRequest, ContentKind};
use bookstack_client::model::form::Form;

const READ_BOOK: &str = r#"{
    "id": 16,
    "name": "My own book",
    "slug": "my-own-book",
    "description": "This is my own little book",
    "description_html": "<p>This is my own little book</p>",
    "created_at": "2020-01-12T14:09:59.000000Z",
    "updated_at": "2020-01-12T14:11:51.000000Z",
    "created_by": {"id": 1, "name": "Admin", "slug": "admin"},
    "updated_by": {"id": 1, "name": "Admin", "slug": "admin"},
    "owned_by": {"id": 1, "name": "Admin", "slug": "admin"},
    "default_template_id": null,
    "contents": [
        {
            "id": 50,
            "name": "Bridge Structures",
            "slug": "bridge-structures",
            "book_id": 16,
            "created_at": "2021-12-19T15:22:11.000000Z",
            "updated_at": "2021-12-21T19:42:29.000000Z",
            "url": "https://example.com/books/my-own-book/chapter/bridge-structures",
            "type": "chapter",
            "pages": [
                {
                    "id": 42,
                    "name": "Building Bridges",
                    "slug": "building-bridges",
                    "book_id": 16,
                    "chapter_id": 50,
                    "priority": 0,
                    "draft": false,
                    "template": false,
                    "created_at": "2021-12-19T15:22:11.000000Z",
                    "updated_at": "2022-09-29T13:44:15.000000Z",
                    "url": "https://example.com/books/my-own-book/page/building-bridges",
                    "type": "page"
                }
            ]
        },
        {
            "id": 43,
            "name": "Cool Animals",
            "slug": "cool-animals",
            "book_id": 16,
            "chapter_id": 0,
            "draft": false,
            "template": false,
            "created_at": "2021-12-19T18:22:11.000000Z",
            "updated_at": "2022-07-29T13:44:15.000000Z",
            "url": "https://example.com/books/my-own-book/page/cool-animals",
            "type": "page"
        }
    ],
    "tags": [
        {"name": "Category", "value": "Guide", "order": 0}
    ],
    "cover": {
        "id": 452,
        "name": "sjovall_m117hUWMu40.jpg",
        "url": "https://example.com/uploads/images/cover_book/2020-01/sjovall_m117hUWMu40.jpg",
        "created_at": "2020-01-12T14:11:51.000000Z",
        "updated_at": "2020-01-12T14:11:51.000000Z",
        "created_by": 1,
        "updated_by": 1,
        "path": "/uploads/images/cover_book/2020-01/sjovall_m117hUWMu40.jpg",
        "type": "cover_book",
        "uploaded_to": 16
    }
}"#;

#[test]
fn test_read_book_response() {
    let book: BookDetailed = serde_json::from_str(READ_BOOK).unwrap();

    assert_eq!(book.id, 16);
    assert_eq!(book.created_by.as_ref().unwrap().slug, "admin");
    assert_eq!(book.contents.len(), 2);
    assert_eq!(book.contents[0].kind, ContentKind::Chapter);
    assert_eq!(book.contents[0].pages[0].chapter_id, Some(50));
    assert_eq!(book.tags[0].value, "Guide");
    assert_eq!(book.cover.as_ref().unwrap().image_type, "cover_book");
    assert_eq!(book.default_template_id, None);

    let page_names: Vec<&str> = book.pages().map(|p| p.name.as_str()).collect();
    assert_eq!(page_names, vec!["Building Bridges", "Cool Animals"]);
}

#[test]
fn test_book_request_with_image() {
    let body = BookRequest::new("Handbook")
        .description("Ops handbook")
        .image("cover.png", "image/png", b"PNG".to_vec())
        .default_template(12)
        .form()
        .unwrap();
    let text = String::from_utf8(body.body).unwrap();

    assert!(text.contains("name=\"description\"\r\n\r\nOps handbook\r\n"));
    assert!(text.contains("name=\"default_template_id\"\r\n\r\n12\r\n"));
    assert!(text.contains("name=\"image\"; filename=\"cover.png\"\r\nContent-Type: image/png\r\n\r\nPNG\r\n"));
    assert!(!text.contains("_method"));
}

#[test]
fn test_book_request_long_name_rejected() {
    assert!(BookRequest::new("x".repeat(256)).validate().is_err());
    assert!(BookRequest::new("x".repeat(255)).validate().is_ok());
}
