//! Typed facade over the admin collection endpoints
//!
//! Every entity is exposed as a [`Collection`] handle with the same
//! list/get/create/update/remove surface; the backend wraps all payloads in
//! the `{ success, data, message? }` envelope family.

use std::marker::PhantomData;
use std::sync::Arc;

use galleria_api::{
    AckEnvelope, Author, Category, Coupon, Credentials, DashboardMetrics, FilterState,
    ItemEnvelope, ListEnvelope, LoginEnvelope, Order, PageResult, PriceInquiry, Product,
    ProductPayload, Subscriber, User,
};
use reqwest::multipart;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::AdminConfig;
use crate::constants::api_path;
use crate::error::{ClientError, Result};
use crate::http::HttpTransport;
use crate::session::AuthSession;

/// One image attached to a multipart product upload.
#[derive(Clone, Debug)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Handle for one collection endpoint.
///
/// Cheap to create and to clone; all handles share the transport.
pub struct Collection<T> {
    transport: Arc<HttpTransport>,
    path: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for Collection<T> {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
            path: self.path,
            _marker: PhantomData,
        }
    }
}

impl<T: DeserializeOwned> Collection<T> {
    fn new(transport: Arc<HttpTransport>, path: &'static str) -> Self {
        Self {
            transport,
            path,
            _marker: PhantomData,
        }
    }

    pub fn path(&self) -> &'static str {
        self.path
    }

    /// Fetch one page, serializing the non-empty filter entries.
    pub async fn list(&self, filters: &FilterState) -> Result<PageResult<T>> {
        let envelope: ListEnvelope<T> =
            self.transport.get(self.path, &filters.query_pairs()).await?;
        if !envelope.success {
            return Err(ClientError::Api {
                message: envelope
                    .message
                    .unwrap_or_else(|| "request failed".to_string()),
            });
        }
        Ok(PageResult::from_envelope(envelope, filters.limit()))
    }

    /// Fetch a single record by id.
    pub async fn get(&self, id: &str) -> Result<T> {
        let envelope: ItemEnvelope<T> = self
            .transport
            .get(&format!("{}/{}", self.path, id), &[])
            .await?;
        unwrap_item(envelope)
    }

    /// Create a record.
    pub async fn create<P: Serialize + Sync + ?Sized>(&self, payload: &P) -> Result<T> {
        let envelope: ItemEnvelope<T> = self.transport.post_json(self.path, payload).await?;
        unwrap_item(envelope)
    }

    /// Update a record.
    pub async fn update<P: Serialize + Sync + ?Sized>(&self, id: &str, payload: &P) -> Result<T> {
        let envelope: ItemEnvelope<T> = self
            .transport
            .put_json(&format!("{}/{}", self.path, id), payload)
            .await?;
        unwrap_item(envelope)
    }

    /// Delete a record.
    pub async fn remove(&self, id: &str) -> Result<()> {
        let envelope: AckEnvelope = self
            .transport
            .delete(&format!("{}/{}", self.path, id))
            .await?;
        if !envelope.success {
            return Err(ClientError::Api {
                message: envelope
                    .message
                    .unwrap_or_else(|| "delete failed".to_string()),
            });
        }
        Ok(())
    }
}

fn unwrap_item<T>(envelope: ItemEnvelope<T>) -> Result<T> {
    if !envelope.success {
        return Err(ClientError::Api {
            message: envelope
                .message
                .unwrap_or_else(|| "request failed".to_string()),
        });
    }
    envelope.data.ok_or_else(|| ClientError::Api {
        message: "response carried no record".to_string(),
    })
}

/// Facade over the whole admin API.
pub struct AdminApi {
    transport: Arc<HttpTransport>,
}

impl AdminApi {
    /// Create a new API facade from the given configuration
    pub fn new(config: &AdminConfig) -> Result<Self> {
        Ok(Self {
            transport: Arc::new(HttpTransport::new(config)?),
        })
    }

    /// Create a facade over an existing transport
    pub fn with_transport(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// Attach a bearer token to subsequent requests
    pub fn set_token(&self, token: &str) {
        self.transport.set_token(token);
    }

    /// Drop the bearer token
    pub fn clear_token(&self) {
        self.transport.clear_token();
    }

    // ============== Collections ==============

    pub fn categories(&self) -> Collection<Category> {
        Collection::new(self.transport.clone(), api_path::CATEGORIES)
    }

    pub fn authors(&self) -> Collection<Author> {
        Collection::new(self.transport.clone(), api_path::AUTHORS)
    }

    pub fn products(&self) -> Collection<Product> {
        Collection::new(self.transport.clone(), api_path::PRODUCTS)
    }

    pub fn orders(&self) -> Collection<Order> {
        Collection::new(self.transport.clone(), api_path::ORDERS)
    }

    pub fn coupons(&self) -> Collection<Coupon> {
        Collection::new(self.transport.clone(), api_path::COUPONS)
    }

    pub fn users(&self) -> Collection<User> {
        Collection::new(self.transport.clone(), api_path::USERS)
    }

    pub fn subscribers(&self) -> Collection<Subscriber> {
        Collection::new(self.transport.clone(), api_path::SUBSCRIBERS)
    }

    pub fn inquiries(&self) -> Collection<PriceInquiry> {
        Collection::new(self.transport.clone(), api_path::INQUIRIES)
    }

    // ============== Auth ==============

    /// Exchange credentials for a bearer token. On success the token is
    /// attached to the transport for subsequent requests.
    pub async fn login(&self, credentials: &Credentials) -> Result<AuthSession> {
        let envelope: LoginEnvelope = self
            .transport
            .post_json(api_path::AUTH_LOGIN, credentials)
            .await?;
        if !envelope.success {
            return Err(ClientError::Api {
                message: envelope
                    .message
                    .unwrap_or_else(|| "login failed".to_string()),
            });
        }
        let token = envelope.token.ok_or_else(|| ClientError::Api {
            message: "login response carried no token".to_string(),
        })?;
        self.transport.set_token(&token);
        Ok(AuthSession {
            token,
            user: envelope.user,
        })
    }

    // ============== Products (multipart) ==============

    /// Create a product whose images travel as multipart parts alongside the
    /// scalar fields.
    pub async fn create_product_with_images(
        &self,
        payload: &ProductPayload,
        images: Vec<ImageUpload>,
    ) -> Result<Product> {
        let mut form = multipart::Form::new()
            .text("title", payload.title.clone())
            .text("description", payload.description.clone())
            .text("price", payload.price.to_string())
            .text("categoryId", payload.category_id.clone())
            .text("authorId", payload.author_id.clone())
            .text("stock", payload.stock.to_string())
            .text("status", payload.status.to_string());
        if let Some(discount) = payload.discount_price {
            form = form.text("discountPrice", discount.to_string());
        }
        for image in images {
            let part = multipart::Part::bytes(image.bytes)
                .file_name(image.file_name)
                .mime_str(&image.content_type)?;
            form = form.part("images", part);
        }

        let envelope: ItemEnvelope<Product> = self
            .transport
            .post_multipart(api_path::PRODUCTS, form)
            .await?;
        unwrap_item(envelope)
    }

    // ============== Dashboard ==============

    pub async fn dashboard_metrics(&self) -> Result<DashboardMetrics> {
        let envelope: ItemEnvelope<DashboardMetrics> = self
            .transport
            .get(api_path::DASHBOARD_METRICS, &[])
            .await?;
        unwrap_item(envelope)
    }
}
