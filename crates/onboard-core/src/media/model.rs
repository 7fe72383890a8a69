//! Media reference domain models.

use serde::{Deserialize, Serialize};

use crate::error::{OnboardError, Result};

/// A unit of media that is either already persisted or only known locally.
///
/// A reference moves from `Pending` to `Stored` exactly once (see
/// [`MediaReference::into_stored`]) and never back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MediaReference {
    /// Already persisted in the media store.
    Stored { id: String },
    /// Only present on the device; needs uploading.
    Pending { local_source: String },
}

impl MediaReference {
    pub fn stored(id: impl Into<String>) -> Self {
        Self::Stored { id: id.into() }
    }

    pub fn pending(local_source: impl Into<String>) -> Self {
        Self::Pending {
            local_source: local_source.into(),
        }
    }

    /// Returns the stored identifier, if any.
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Stored { id } => Some(id),
            Self::Pending { .. } => None,
        }
    }

    /// Returns the local source locator of a pending reference.
    pub fn local_source(&self) -> Option<&str> {
        match self {
            Self::Stored { .. } => None,
            Self::Pending { local_source } => Some(local_source),
        }
    }

    pub fn is_stored(&self) -> bool {
        matches!(self, Self::Stored { .. })
    }

    /// Completes a pending reference with the identifier assigned by the store.
    ///
    /// # Errors
    ///
    /// Returns `OnboardError::Internal` if the reference is already stored.
    pub fn into_stored(self, id: impl Into<String>) -> Result<Self> {
        match self {
            Self::Pending { .. } => Ok(Self::stored(id)),
            Self::Stored { id: existing } => Err(OnboardError::internal(format!(
                "media reference '{}' is already stored",
                existing
            ))),
        }
    }
}

/// Metadata returned by a media lookup. `path` may be missing for objects
/// whose original file was never materialised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaObject {
    pub id: String,
    #[serde(default)]
    pub path: Option<String>,
}

/// An item submitted to a bulk upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalMedia {
    pub local_source: String,
}

/// One result of a bulk upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedMedia {
    pub id: String,
}
