//! Bulk media upload coordination.

use onboard_core::error::{OnboardError, Result};
use onboard_core::media::{LocalMedia, MediaReference, MediaStore};
use std::sync::Arc;

/// Turns a mix of stored and pending media references into stored ids.
///
/// Pending references go to the store in a single bulk call. The batch is
/// atomic from this layer's point of view: if it fails, the whole call fails.
/// Identical pending items are uploaded once each; there is no content-based
/// deduplication.
#[derive(Clone)]
pub struct UploadCoordinator {
    media_store: Arc<dyn MediaStore>,
}

impl UploadCoordinator {
    pub fn new(media_store: Arc<dyn MediaStore>) -> Self {
        Self { media_store }
    }

    /// Uploads pending references and returns one id per input reference,
    /// in input order.
    ///
    /// # Errors
    ///
    /// Propagates the bulk upload failure, and returns a transport error if
    /// the store answers with a different number of results than submitted.
    pub async fn upload(&self, references: &[MediaReference]) -> Result<Vec<String>> {
        let stored = self.complete(references.to_vec()).await?;
        Ok(stored
            .into_iter()
            .filter_map(|reference| reference.id().map(str::to_string))
            .collect())
    }

    /// Like [`upload`](Self::upload), but returns the references themselves
    /// with every pending one transitioned to stored.
    pub async fn complete(&self, references: Vec<MediaReference>) -> Result<Vec<MediaReference>> {
        if references.is_empty() {
            return Ok(Vec::new());
        }

        let pending: Vec<LocalMedia> = references
            .iter()
            .filter_map(|reference| {
                reference.local_source().map(|source| LocalMedia {
                    local_source: source.to_string(),
                })
            })
            .collect();

        if pending.is_empty() {
            return Ok(references);
        }

        let expected = pending.len();
        tracing::debug!(
            "[UploadCoordinator] Uploading {} of {} media references",
            expected,
            references.len()
        );

        let uploaded = self.media_store.bulk_upload(pending).await?;
        if uploaded.len() != expected {
            return Err(OnboardError::transport(format!(
                "bulk upload returned {} results for {} items",
                uploaded.len(),
                expected
            )));
        }

        // Response order matches the order pending items were submitted in.
        let mut uploaded = uploaded.into_iter();
        references
            .into_iter()
            .map(|reference| {
                if reference.is_stored() {
                    return Ok(reference);
                }
                let result = uploaded
                    .next()
                    .ok_or_else(|| OnboardError::internal("bulk upload results exhausted"))?;
                reference.into_stored(result.id)
            })
            .collect()
    }

    /// Picks the stored references whose id appears in `ids`, keeping the
    /// order of `references`. A reference matching several ids is returned
    /// once per match.
    pub fn find_by_ids(references: &[MediaReference], ids: &[String]) -> Vec<MediaReference> {
        if ids.is_empty() {
            return Vec::new();
        }

        references
            .iter()
            .flat_map(|reference| {
                ids.iter()
                    .filter(move |id| reference.id() == Some(id.as_str()))
                    .map(move |_| reference.clone())
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MockMediaStore;
    use onboard_core::media::UploadedMedia;

    fn uploaded(ids: &[&str]) -> Vec<UploadedMedia> {
        ids.iter()
            .map(|id| UploadedMedia { id: id.to_string() })
            .collect()
    }

    #[tokio::test]
    async fn test_empty_input_makes_no_calls() {
        let store = Arc::new(MockMediaStore::new());
        let ids = UploadCoordinator::new(store.clone()).upload(&[]).await.unwrap();

        assert!(ids.is_empty());
        assert_eq!(store.bulk_call_count(), 0);
    }

    #[tokio::test]
    async fn test_only_stored_references_skip_upload() {
        let store = Arc::new(MockMediaStore::new());
        let refs = vec![MediaReference::stored("1"), MediaReference::stored("9")];

        let ids = UploadCoordinator::new(store.clone()).upload(&refs).await.unwrap();

        assert_eq!(ids, vec!["1", "9"]);
        assert_eq!(store.bulk_call_count(), 0);
    }

    #[tokio::test]
    async fn test_mixed_references() {
        let store =
            Arc::new(MockMediaStore::new().with_bulk_response(Ok(uploaded(&["2", "3"]))));
        let refs = vec![
            MediaReference::stored("1"),
            MediaReference::pending("a.jpg"),
            MediaReference::pending("b.jpg"),
        ];

        let ids = UploadCoordinator::new(store.clone()).upload(&refs).await.unwrap();

        assert_eq!(ids, vec!["1", "2", "3"]);
        let calls = store.bulk_calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(
            calls[0],
            vec![
                LocalMedia {
                    local_source: "a.jpg".to_string()
                },
                LocalMedia {
                    local_source: "b.jpg".to_string()
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_interleaved_references_keep_input_order() {
        let store =
            Arc::new(MockMediaStore::new().with_bulk_response(Ok(uploaded(&["10", "11"]))));
        let refs = vec![
            MediaReference::pending("a.jpg"),
            MediaReference::stored("1"),
            MediaReference::pending("b.jpg"),
            MediaReference::stored("2"),
        ];

        let ids = UploadCoordinator::new(store).upload(&refs).await.unwrap();

        assert_eq!(ids, vec!["10", "1", "11", "2"]);
    }

    #[tokio::test]
    async fn test_duplicate_pending_items_upload_twice() {
        let store = Arc::new(MockMediaStore::new());
        let refs = vec![
            MediaReference::pending("same.jpg"),
            MediaReference::pending("same.jpg"),
        ];

        let ids = UploadCoordinator::new(store.clone()).upload(&refs).await.unwrap();

        assert_eq!(ids.len(), 2);
        assert_eq!(store.bulk_calls.lock().unwrap()[0].len(), 2);
    }

    #[tokio::test]
    async fn test_batch_failure_propagates() {
        let store = Arc::new(
            MockMediaStore::new().with_bulk_response(Err(OnboardError::transport("503"))),
        );
        let refs = vec![MediaReference::stored("1"), MediaReference::pending("a.jpg")];

        let err = UploadCoordinator::new(store).upload(&refs).await.unwrap_err();

        assert_eq!(err, OnboardError::transport("503"));
    }

    #[tokio::test]
    async fn test_short_response_is_batch_error() {
        let store = Arc::new(MockMediaStore::new().with_bulk_response(Ok(uploaded(&["2"]))));
        let refs = vec![MediaReference::pending("a.jpg"), MediaReference::pending("b.jpg")];

        let err = UploadCoordinator::new(store).upload(&refs).await.unwrap_err();

        assert!(err.is_transport());
    }

    #[tokio::test]
    async fn test_complete_transitions_pending_references() {
        let store = Arc::new(MockMediaStore::new().with_bulk_response(Ok(uploaded(&["5"]))));
        let refs = vec![MediaReference::pending("a.jpg")];

        let completed = UploadCoordinator::new(store).complete(refs).await.unwrap();

        assert_eq!(completed, vec![MediaReference::stored("5")]);
    }

    #[test]
    fn test_find_by_ids() {
        let refs = vec![
            MediaReference::stored("1"),
            MediaReference::pending("x.jpg"),
            MediaReference::stored("2"),
            MediaReference::stored("3"),
        ];

        let found = UploadCoordinator::find_by_ids(&refs, &["3".to_string(), "1".to_string()]);
        assert_eq!(found, vec![MediaReference::stored("1"), MediaReference::stored("3")]);

        assert!(UploadCoordinator::find_by_ids(&refs, &[]).is_empty());
    }
}
