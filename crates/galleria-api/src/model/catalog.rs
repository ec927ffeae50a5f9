// Catalog records: categories, authors, products

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A product category.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub product_count: u64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Category create/update body.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPayload {
    pub name: String,
    pub description: String,
}

impl From<&Category> for CategoryPayload {
    fn from(category: &Category) -> Self {
        Self {
            name: category.name.clone(),
            description: category.description.clone(),
        }
    }
}

/// An artist whose works are sold on the marketplace.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Author create/update body.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorPayload {
    pub name: String,
    pub bio: String,
    #[serde(default)]
    pub featured: bool,
}

impl From<&Author> for AuthorPayload {
    fn from(author: &Author) -> Self {
        Self {
            name: author.name.clone(),
            bio: author.bio.clone(),
            featured: author.featured,
        }
    }
}

/// Publication state of a product.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    #[default]
    Active,
    Draft,
    Archived,
}

impl std::fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Draft => write!(f, "draft"),
            Self::Archived => write!(f, "archived"),
        }
    }
}

/// An artwork listing.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub discount_price: Option<f64>,
    #[serde(default)]
    pub category_id: String,
    #[serde(default)]
    pub author_id: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub stock: u64,
    #[serde(default)]
    pub status: ProductStatus,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Product create/update body. Image uploads travel separately as
/// multipart parts; this struct carries the scalar fields only.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    pub title: String,
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub discount_price: Option<f64>,
    pub category_id: String,
    pub author_id: String,
    #[serde(default)]
    pub stock: u64,
    #[serde(default)]
    pub status: ProductStatus,
}

impl From<&Product> for ProductPayload {
    fn from(product: &Product) -> Self {
        Self {
            title: product.title.clone(),
            description: product.description.clone(),
            price: product.price,
            discount_price: product.discount_price,
            category_id: product.category_id.clone(),
            author_id: product.author_id.clone(),
            stock: product.stock,
            status: product.status,
        }
    }
}
