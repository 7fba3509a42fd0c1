//! Product data model.
//!
//! A [`Product`] is the stored entity; a [`ProductDraft`] carries the mutable
//! fields before the store assigns an identity, and doubles as the incoming
//! side of an update.

use std::fmt;

/// Store-assigned product identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProductId(i64);

impl ProductId {
    /// Wrap a raw identity.
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Raw integer value, as used in paths and storage.
    #[must_use]
    pub const fn as_i64(self) -> i64 {
        self.0
    }
}

impl From<i64> for ProductId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Mutable product fields without an identity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductDraft {
    /// Display name; may be empty.
    pub name: String,
    /// Free-text description; may be empty.
    pub description: String,
}

impl ProductDraft {
    /// Build a draft from its two fields.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Stored product entity.
///
/// # Examples
/// ```
/// use product_service::domain::{Product, ProductDraft, ProductId};
///
/// let stored = Product::new(ProductId::new(5), ProductDraft::new("Widget", "A widget"));
/// let merged = stored.merge_update(ProductDraft::new("", "Blue widget"));
/// assert_eq!(merged.name(), "Widget");
/// assert_eq!(merged.description(), "Blue widget");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    id: ProductId,
    name: String,
    description: String,
}

impl Product {
    /// Attach an identity to a draft.
    pub fn new(id: ProductId, draft: ProductDraft) -> Self {
        let ProductDraft { name, description } = draft;
        Self {
            id,
            name,
            description,
        }
    }

    /// Store-assigned identity.
    pub fn id(&self) -> ProductId {
        self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Free-text description.
    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    /// Build the replacement entity for an update.
    ///
    /// The result keeps this product's identity and takes its fields from
    /// `incoming`, except that an empty incoming field keeps the stored
    /// value.
    #[must_use]
    pub fn merge_update(&self, incoming: ProductDraft) -> Self {
        let ProductDraft { name, description } = incoming;
        Self {
            id: self.id,
            name: if name.is_empty() {
                self.name.clone()
            } else {
                name
            },
            description: if description.is_empty() {
                self.description.clone()
            } else {
                description
            },
        }
    }

    /// Split the entity back into its identity and draft fields.
    pub fn into_parts(self) -> (ProductId, ProductDraft) {
        (
            self.id,
            ProductDraft {
                name: self.name,
                description: self.description,
            },
        )
    }
}
