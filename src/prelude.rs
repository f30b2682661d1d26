//! # BookStack Client Prelude
//!
//! Imports the types needed for most interactions with the API in one line.
//!
//! ```rust
//! use bookstack_client::prelude::*;
//!
//! let bookstack = Bookstack::builder()
//!     .url("https://wiki.example.com")
//!     .token("id", "secret")
//!     .build()
//!     .unwrap();
//! let client = Client::from_bookstack(bookstack);
//! ```

// ============================================================================
// CONFIGURATION
// ============================================================================

pub use crate::application::config::{Config, Credentials, RateLimiterConfig, RestApiConfig};
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

pub use crate::error::AppError;

// ============================================================================
// CLIENT AND REQUEST PRIMITIVES
// ============================================================================

pub use crate::application::client::Client;
pub use crate::application::rate_limiter::RateLimiter;
pub use crate::model::form::{Form, FormBody, MultipartForm};
pub use crate::model::http::{Bookstack, BookstackBuilder};
pub use crate::model::responses::{ApiError, Group, Response, Single, parse_multiple, parse_single};

/// HTTP method used by the request primitives
pub use reqwest::Method;

// ============================================================================
// SERVICES
// ============================================================================

pub use crate::application::interfaces::book::BookService;
pub use crate::application::interfaces::user::UserService;

// ============================================================================
// ENTITIES
// ============================================================================

pub use crate::presentation::book::{
    Book, BookContent, BookDetailed, BookRequest, ContentKind, Cover, ImageUpload, Tag,
};
pub use crate::presentation::user::{EntityUser, Role, User, UserRequest};

// ============================================================================
// UTILITIES
// ============================================================================

pub use crate::utils::config::{get_env_flag, get_env_or_default, get_env_or_none};
pub use crate::utils::logger::{current_dispatch, setup_logger};
