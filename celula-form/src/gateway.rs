//! Submission gateway seam
//!
//! The controller talks to the remote persistence service and object store
//! only through this trait; the concrete HTTP implementation lives in the
//! client crate, and tests drive the controller with an in-process mock.

use async_trait::async_trait;
use shared::{AppResult, CelulaRecord};

/// Remote persistence and object-storage collaborator
#[async_trait]
pub trait SubmissionGateway: Send + Sync {
    /// Insert a validated record into the célula collection.
    ///
    /// Fire-and-forget from the form's perspective: success returns no
    /// identifier, failure carries the backend's message verbatim.
    async fn insert_celula(&self, record: &CelulaRecord) -> AppResult<()>;

    /// Upload a photo and return its publicly resolvable URL.
    ///
    /// The object name is generated by the implementation from the current
    /// time and the original extension.
    async fn upload_photo(&self, data: Vec<u8>, extension: &str) -> AppResult<String>;
}
