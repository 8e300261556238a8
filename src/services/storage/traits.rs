//! Storage gateway traits.
//!
//! `ObjectStore` is the seam between the session controller and the
//! storage backend: four real operations plus folder-marker creation,
//! each stateless and independent. The S3 implementation lives in
//! [`super::s3`]; tests substitute an in-memory fake.

use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use url::Url;

use crate::error::ExplorerError;
use crate::services::credentials::Credentials;

use super::types::ObjectEntry;

/// Progress callback invoked during uploads with `(written_bytes, total_bytes)`.
pub type ProgressFn = Arc<dyn Fn(u64, u64) + Send + Sync>;

/// Gateway to a single object-storage bucket.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// List entries one directory level below `prefix`.
    ///
    /// Files are direct objects under the prefix; folders are synthesized
    /// from common prefixes. The two sets are disjoint. Use an empty
    /// string to list the bucket root.
    async fn list(&self, prefix: &str) -> Result<Vec<ObjectEntry>, ExplorerError>;

    /// Get a time-limited signed URL granting read access to `key`.
    async fn download_url(&self, key: &str) -> Result<Url, ExplorerError>;

    /// Write `data` to `key`, overwriting any existing object.
    ///
    /// The progress callback, when given, is invoked after each written
    /// chunk. There is no partial-write recovery.
    async fn upload(
        &self,
        key: &str,
        data: Bytes,
        progress: Option<ProgressFn>,
    ) -> Result<(), ExplorerError>;

    /// Remove the object at `key`. Deleting a missing key is backend-defined
    /// (a no-op success on S3).
    async fn delete(&self, key: &str) -> Result<(), ExplorerError>;

    /// Create a zero-byte folder marker at `key` (trailing slash enforced
    /// by the implementation) so the empty folder shows up in listings.
    async fn create_folder(&self, key: &str) -> Result<(), ExplorerError>;
}

/// A boxed object store for dynamic dispatch.
pub type BoxedObjectStore = Box<dyn ObjectStore>;

/// Factory producing a store from credentials.
///
/// Validates completeness before handing out a store, so a store in hand
/// always carries usable credentials.
pub trait StoreFactory: Send + Sync {
    fn open(&self, credentials: &Credentials) -> Result<BoxedObjectStore, ExplorerError>;
}
