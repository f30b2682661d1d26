use crate::error::AppError;
use crate::presentation::book::{Book, BookDetailed, BookRequest};
use async_trait::async_trait;

/// Interface for the book endpoints
#[async_trait]
pub trait BookService: Send + Sync {
    /// Lists the books visible to the token's user
    async fn list_books(&self) -> Result<Vec<Book>, AppError>;

    /// Reads a book with its chapters and pages
    async fn get_book(&self, id: u64) -> Result<BookDetailed, AppError>;

    /// Creates a book, uploading the cover image when one is set
    async fn create_book(&self, request: &BookRequest) -> Result<Book, AppError>;

    /// Updates a book
    ///
    /// Tags in the request replace the current ones.
    async fn update_book(&self, id: u64, request: &BookRequest) -> Result<Book, AppError>;

    /// Moves a book to the recycle bin
    async fn delete_book(&self, id: u64) -> Result<(), AppError>;
}
