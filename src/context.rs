use std::sync::Arc;

use crate::service;

/// Shared collaborators and resolved configuration handed to every
/// invocation.
#[derive(Clone)]
pub struct Context {
    pub s3_client: Arc<service::s3::S3>,

    /// Destination bucket for originals and thumbnails, resolved once at
    /// startup and never re-fetched.
    pub target_bucket: String,

    /// Edge length of generated thumbnails.
    pub thumbnail_size: u32,
}
