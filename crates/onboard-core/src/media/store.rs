//! Media store collaborator trait.

use async_trait::async_trait;

use super::model::{LocalMedia, MediaObject, UploadedMedia};
use crate::error::Result;

/// Remote media storage as consumed by the coordination layer.
#[async_trait]
pub trait MediaStore: Send + Sync {
    /// Looks up media metadata by id.
    ///
    /// May fail (not found, timeout) or return an object without a path.
    async fn get_by_id(&self, id: &str) -> Result<MediaObject>;

    /// Uploads a batch of local items.
    ///
    /// Returns one result per input item in response order. The whole batch
    /// fails together.
    async fn bulk_upload(&self, items: Vec<LocalMedia>) -> Result<Vec<UploadedMedia>>;
}
