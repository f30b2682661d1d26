/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Response envelopes and the parse helpers
//!
//! The API wraps list payloads in `{"data": [...], "total": n}` and failures in
//! `{"error": {"code": n, "message": "..."}}`. Single entities come back bare.

use crate::error::AppError;
use crate::presentation::book::{Book, BookDetailed};
use crate::presentation::user::User;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Error object carried by the envelope
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct ApiError {
    /// Error code, usually the HTTP status
    pub code: i64,
    /// Human readable message
    pub message: String,
    /// Per-field messages sent with validation failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation: Option<BTreeMap<String, Vec<String>>>,
}

impl ApiError {
    /// Message including the per-field validation messages, if any
    #[must_use]
    pub fn full_message(&self) -> String {
        match &self.validation {
            Some(fields) if !fields.is_empty() => {
                let details = fields
                    .iter()
                    .map(|(field, messages)| format!("{field}: {}", messages.join(" ")))
                    .collect::<Vec<_>>()
                    .join("; ");
                format!("{} ({details})", self.message)
            }
            _ => self.message.clone(),
        }
    }
}

impl From<&ApiError> for AppError {
    fn from(err: &ApiError) -> Self {
        AppError::api(err.code, err.full_message())
    }
}

/// Envelope wrapping either an error or a data payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Response {
    /// Error reported by the API
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
    /// Raw payload, decoded later into the caller's shape
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    /// Total number of records on list endpoints
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
}

impl Response {
    /// Returns the API error as an [`AppError`], if the envelope carries one
    #[must_use]
    pub fn error(&self) -> Option<AppError> {
        self.error.as_ref().map(AppError::from)
    }

    /// Decodes the envelope from raw bytes
    pub fn from_slice(raw: &[u8]) -> Result<Self, AppError> {
        Ok(serde_json::from_slice(raw)?)
    }
}

mod sealed {
    pub trait Sealed {}
}

/// Shapes [`parse_single`] can produce
pub trait Single: DeserializeOwned + sealed::Sealed {}

/// Shapes [`parse_multiple`] can produce
pub trait Group: DeserializeOwned + Default + sealed::Sealed {}

impl sealed::Sealed for User {}
impl sealed::Sealed for Book {}
impl sealed::Sealed for BookDetailed {}
impl sealed::Sealed for Vec<User> {}
impl sealed::Sealed for Vec<Book> {}

impl Single for User {}
impl Single for Book {}
impl Single for BookDetailed {}
impl Group for Vec<User> {}
impl Group for Vec<Book> {}

/// Decodes a bare entity
///
/// # Example
///
/// ```
/// use bookstack_client::model::responses::parse_single;
/// use bookstack_client::presentation::book::Book;
///
/// let book: Book = parse_single(br#"{"id":1,"name":"Shelf"}"#).unwrap();
/// assert_eq!(book.name, "Shelf");
/// ```
pub fn parse_single<S: Single>(data: &[u8]) -> Result<S, AppError> {
    Ok(serde_json::from_slice(data)?)
}

/// Decodes a list wrapped in the `data` field of the envelope
///
/// An envelope carrying an error yields that error. A missing `data` field
/// yields an empty list.
pub fn parse_multiple<G: Group>(data: &[u8]) -> Result<G, AppError> {
    let response = Response::from_slice(data)?;

    if let Some(err) = response.error() {
        return Err(err);
    }

    match response.data {
        Some(payload) => Ok(serde_json::from_value(payload)?),
        None => Ok(G::default()),
    }
}
