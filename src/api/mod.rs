//! Backend REST contract.
//!
//! The insurance backend exposes, for each entity kind `k`:
//! - `GET {base}/{k}` returning the full collection as a JSON array
//! - `POST {base}/{k}` taking the form buffer as JSON, returning plain text
//! - `DELETE {base}/{k}/{id}` (customer and policy only), returning plain text
//!
//! Mutation responses are opaque display strings; nothing is parsed from them.

pub mod http;

use crate::error::Result;
use crate::form::FormBuffer;
use crate::types::{Collection, EntityKind};

pub use http::HttpApi;

/// Common interface for the insurance backend
pub trait InsuranceApi: Send + Sync {
    /// Fetch the full collection for an entity kind
    fn list(&self, kind: EntityKind) -> impl std::future::Future<Output = Result<Collection>> + Send;

    /// Create a record from a form buffer, returning the server's response text
    fn create(&self, form: &FormBuffer) -> impl std::future::Future<Output = Result<String>> + Send;

    /// Delete a record by id, returning the server's response text
    fn delete(
        &self,
        kind: EntityKind,
        id: i64,
    ) -> impl std::future::Future<Output = Result<String>> + Send;
}
