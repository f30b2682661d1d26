/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::application::config::Config;
use crate::application::interfaces::book::BookService;
use crate::application::interfaces::user::UserService;
use crate::error::AppError;
use crate::model::http::Bookstack;
use crate::model::responses::parse_single;
use crate::presentation::book::{Book, BookDetailed, BookRequest};
use crate::presentation::user::{User, UserDeleteRequest, UserRequest};
use async_trait::async_trait;
use reqwest::Method;
use std::future::Future;
use std::sync::Arc;
use tracing::instrument::WithSubscriber;
use tracing::{debug, info};

/// Typed client for the book and user endpoints
///
/// Every operation logs through the logger of the underlying [`Bookstack`].
#[derive(Debug, Clone)]
pub struct Client {
    bookstack: Arc<Bookstack>,
}

impl Client {
    /// Creates a client from a configuration
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Http`] when the HTTP transport cannot be initialised.
    pub fn new(config: &Config) -> Result<Self, AppError> {
        Ok(Self::from_bookstack(Bookstack::with_config(config)?))
    }

    /// Wraps an already configured connection
    pub fn from_bookstack(bookstack: Bookstack) -> Self {
        Self {
            bookstack: Arc::new(bookstack),
        }
    }

    /// Underlying connection, for endpoints without a typed operation
    pub fn bookstack(&self) -> &Bookstack {
        &self.bookstack
    }

    async fn logged<T, F>(&self, operation: F) -> Result<T, AppError>
    where
        F: Future<Output = Result<T, AppError>>,
    {
        operation
            .with_subscriber(self.bookstack.logger().clone())
            .await
    }
}

#[async_trait]
impl BookService for Client {
    async fn list_books(&self) -> Result<Vec<Book>, AppError> {
        self.logged(async {
            info!("Listing books");
            let books: Vec<Book> = self.bookstack.get_multiple("books").await?;
            debug!("Books obtained: {}", books.len());
            Ok(books)
        })
        .await
    }

    async fn get_book(&self, id: u64) -> Result<BookDetailed, AppError> {
        self.logged(async {
            info!("Getting book: {}", id);
            self.bookstack.get_single(&format!("books/{id}")).await
        })
        .await
    }

    async fn create_book(&self, request: &BookRequest) -> Result<Book, AppError> {
        self.logged(async {
            request.validate()?;
            info!("Creating book: {}", request.name);
            let raw = self.bookstack.form(Method::POST, "books", request).await?;
            let book: Book = parse_single(&raw)?;
            debug!("Book created with id {}", book.id);
            Ok(book)
        })
        .await
    }

    async fn update_book(&self, id: u64, request: &BookRequest) -> Result<Book, AppError> {
        self.logged(async {
            request.validate()?;
            info!("Updating book: {}", id);
            let request = request.with_method_override("PUT");
            let raw = self
                .bookstack
                .form(Method::POST, &format!("books/{id}"), &request)
                .await?;
            parse_single(&raw)
        })
        .await
    }

    async fn delete_book(&self, id: u64) -> Result<(), AppError> {
        self.logged(async {
            info!("Deleting book: {}", id);
            self.bookstack
                .request(Method::DELETE, &format!("books/{id}"), None)
                .await?;
            Ok(())
        })
        .await
    }
}

#[async_trait]
impl UserService for Client {
    async fn list_users(&self) -> Result<Vec<User>, AppError> {
        self.logged(async {
            info!("Listing users");
            let users: Vec<User> = self.bookstack.get_multiple("users").await?;
            debug!("Users obtained: {}", users.len());
            Ok(users)
        })
        .await
    }

    async fn get_user(&self, id: u64) -> Result<User, AppError> {
        self.logged(async {
            info!("Getting user: {}", id);
            self.bookstack.get_single(&format!("users/{id}")).await
        })
        .await
    }

    async fn create_user(&self, request: &UserRequest) -> Result<User, AppError> {
        self.logged(async {
            request.validate_create()?;
            info!("Creating user");
            let raw = self
                .bookstack
                .request_json(Method::POST, "users", request)
                .await?;
            parse_single(&raw)
        })
        .await
    }

    async fn update_user(&self, id: u64, request: &UserRequest) -> Result<User, AppError> {
        self.logged(async {
            request.validate_update()?;
            info!("Updating user: {}", id);
            let raw = self
                .bookstack
                .request_json(Method::PUT, &format!("users/{id}"), request)
                .await?;
            parse_single(&raw)
        })
        .await
    }

    async fn delete_user(&self, id: u64, migrate_ownership_id: Option<u64>) -> Result<(), AppError> {
        self.logged(async {
            info!("Deleting user: {}", id);
            let path = format!("users/{id}");
            match migrate_ownership_id {
                Some(target) => {
                    self.bookstack
                        .request_json(
                            Method::DELETE,
                            &path,
                            &UserDeleteRequest {
                                migrate_ownership_id: target,
                            },
                        )
                        .await?;
                }
                None => {
                    self.bookstack.request(Method::DELETE, &path, None).await?;
                }
            }
            Ok(())
        })
        .await
    }
}
