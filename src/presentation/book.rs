use crate::error::AppError;
use crate::model::form::{Form, FormBody, MultipartForm};
use crate::presentation::user::EntityUser;
use chrono::{DateTime, Utc};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Book as returned by list, create and update endpoints
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Book {
    /// Unique identifier of the book
    pub id: u64,
    /// Display name
    pub name: String,
    /// URL slug derived from the name
    pub slug: String,
    /// Plain text description
    pub description: String,
    /// Creation timestamp
    pub created_at: Option<DateTime<Utc>>,
    /// Last update timestamp
    pub updated_at: Option<DateTime<Utc>>,
    /// ID of the user who created the book
    pub created_by: Option<u64>,
    /// ID of the user who last updated the book
    pub updated_by: Option<u64>,
    /// ID of the owning user
    pub owned_by: Option<u64>,
    /// ID of the cover image, if any
    pub image_id: Option<u64>,
    /// ID of the page used as template for new pages
    pub default_template_id: Option<u64>,
}

/// Book as returned by the read endpoint, including its content tree
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct BookDetailed {
    /// Unique identifier of the book
    pub id: u64,
    /// Display name
    pub name: String,
    /// URL slug derived from the name
    pub slug: String,
    /// Plain text description
    pub description: String,
    /// HTML description
    pub description_html: String,
    /// Creation timestamp
    pub created_at: Option<DateTime<Utc>>,
    /// Last update timestamp
    pub updated_at: Option<DateTime<Utc>>,
    /// User who created the book
    pub created_by: Option<EntityUser>,
    /// User who last updated the book
    pub updated_by: Option<EntityUser>,
    /// Owning user
    pub owned_by: Option<EntityUser>,
    /// ID of the page used as template for new pages
    pub default_template_id: Option<u64>,
    /// Tags attached to the book
    pub tags: Vec<Tag>,
    /// Cover image
    pub cover: Option<Cover>,
    /// Chapters and loose pages, in book order
    pub contents: Vec<BookContent>,
}

impl BookDetailed {
    /// Iterates over every page in the book, including pages inside chapters
    pub fn pages(&self) -> impl Iterator<Item = &BookContent> {
        self.contents.iter().flat_map(|item| {
            let own = (item.kind == ContentKind::Page).then_some(item);
            own.into_iter().chain(item.pages.iter())
        })
    }

    /// Iterates over the chapters of the book
    pub fn chapters(&self) -> impl Iterator<Item = &BookContent> {
        self.contents
            .iter()
            .filter(|item| item.kind == ContentKind::Chapter)
    }
}

/// Name/value tag attached to an entity
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Tag {
    /// Tag name
    pub name: String,
    /// Tag value, may be empty
    pub value: String,
    /// Position among the entity's tags
    pub order: u32,
}

impl Tag {
    /// Creates a tag with a name and value
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            order: 0,
        }
    }
}

/// Cover image of a book
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Cover {
    /// Image ID
    pub id: u64,
    /// Original file name
    pub name: String,
    /// Public URL of the image
    pub url: String,
    /// Storage path on the server
    pub path: String,
    /// Image type, `cover_book` for book covers
    #[serde(rename = "type")]
    pub image_type: String,
    /// ID of the entity the image belongs to
    pub uploaded_to: Option<u64>,
    /// Creation timestamp
    pub created_at: Option<DateTime<Utc>>,
    /// Last update timestamp
    pub updated_at: Option<DateTime<Utc>>,
    /// ID of the uploader
    pub created_by: Option<u64>,
    /// ID of the last user to change the image
    pub updated_by: Option<u64>,
}

/// Kind of item found in a book's content tree
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    /// A chapter grouping pages
    Chapter,
    /// A page
    #[default]
    Page,
}

/// Entry of a book's content tree
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct BookContent {
    /// ID of the chapter or page
    pub id: u64,
    /// Display name
    pub name: String,
    /// URL slug
    pub slug: String,
    /// ID of the parent book
    pub book_id: u64,
    /// ID of the parent chapter for pages inside a chapter
    pub chapter_id: Option<u64>,
    /// Whether the page is an unpublished draft
    pub draft: bool,
    /// Whether the page is a template
    pub template: bool,
    /// Sort position
    pub priority: i64,
    /// Creation timestamp
    pub created_at: Option<DateTime<Utc>>,
    /// Last update timestamp
    pub updated_at: Option<DateTime<Utc>>,
    /// Browser URL of the item
    pub url: String,
    /// Chapter or page
    #[serde(rename = "type")]
    pub kind: ContentKind,
    /// Pages of a chapter; empty for pages
    pub pages: Vec<BookContent>,
}

/// Image uploaded with a book create or update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    /// File name reported to the server
    pub filename: String,
    /// MIME type of the image
    pub content_type: String,
    /// Image bytes
    pub data: Vec<u8>,
}

/// Body of a book create or update
///
/// Sent as `multipart/form-data` so a cover image can travel with it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BookRequest {
    /// Display name, required
    pub name: String,
    /// Plain text description
    pub description: Option<String>,
    /// HTML description, takes precedence over `description` on the server
    pub description_html: Option<String>,
    /// Tags replacing the current ones
    pub tags: Vec<Tag>,
    /// Cover image
    pub image: Option<ImageUpload>,
    /// ID of the page to use as template for new pages
    pub default_template_id: Option<u64>,
    method_override: Option<&'static str>,
}

impl BookRequest {
    /// Creates a request with just a name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the description
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the HTML description
    #[must_use]
    pub fn description_html(mut self, html: impl Into<String>) -> Self {
        self.description_html = Some(html.into());
        self
    }

    /// Adds a tag
    #[must_use]
    pub fn tag(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.push(Tag::new(name, value));
        self
    }

    /// Sets the cover image
    #[must_use]
    pub fn image(
        mut self,
        filename: impl Into<String>,
        content_type: impl Into<String>,
        data: Vec<u8>,
    ) -> Self {
        self.image = Some(ImageUpload {
            filename: filename.into(),
            content_type: content_type.into(),
            data,
        });
        self
    }

    /// Sets the default page template
    #[must_use]
    pub fn default_template(mut self, page_id: u64) -> Self {
        self.default_template_id = Some(page_id);
        self
    }

    /// Returns a copy that asks the server to treat a POST as `method`
    ///
    /// PHP only parses multipart bodies on POST, so updates are sent as POST
    /// carrying a `_method` field.
    pub(crate) fn with_method_override(&self, method: &'static str) -> Self {
        let mut request = self.clone();
        request.method_override = Some(method);
        request
    }

    /// Rejects requests the API would refuse
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::InvalidInput("book name must not be empty".to_string()));
        }
        if self.name.chars().count() > 255 {
            return Err(AppError::InvalidInput(
                "book name must be at most 255 characters".to_string(),
            ));
        }
        Ok(())
    }

    /// Builds the multipart form for this request
    pub fn to_multipart(&self) -> MultipartForm {
        let mut form = MultipartForm::new();
        if let Some(method) = self.method_override {
            form = form.text("_method", method);
        }
        form = form.text("name", self.name.as_str());
        if let Some(description) = &self.description {
            form = form.text("description", description.as_str());
        }
        if let Some(html) = &self.description_html {
            form = form.text("description_html", html.as_str());
        }
        for (i, tag) in self.tags.iter().enumerate() {
            form = form
                .text(format!("tags[{i}][name]"), tag.name.as_str())
                .text(format!("tags[{i}][value]"), tag.value.as_str());
        }
        if let Some(id) = self.default_template_id {
            form = form.text("default_template_id", id.to_string());
        }
        if let Some(image) = &self.image {
            form = form.file(
                "image",
                image.filename.as_str(),
                image.content_type.as_str(),
                image.data.clone(),
            );
        }
        form
    }
}

impl Form for BookRequest {
    fn form(&self) -> Result<FormBody, AppError> {
        self.validate()?;
        self.to_multipart().form()
    }
}
