//! Media domain module.
//!
//! # Module Structure
//!
//! - `model`: media references and the objects exchanged with the store
//! - `store`: the `MediaStore` collaborator trait

mod model;
mod store;

pub use model::{LocalMedia, MediaObject, MediaReference, UploadedMedia};
pub use store::MediaStore;
