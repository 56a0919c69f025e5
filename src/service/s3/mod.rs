#[cfg(test)]
pub use MockS3Client as S3;
#[cfg(not(test))]
pub use S3Client as S3;
use aws_sdk_s3 as s3;
#[allow(unused_imports)]
use mockall::automock;
use thiserror::Error;

mod copy;
mod get;
mod head;
mod put;

/// Errors surfaced by the object store.
#[derive(Debug, Error)]
pub enum StoreErr {
    /// S3 answered with an error response.
    #[error("{0:?}")]
    AwsErr(#[from] aws_sdk_s3::Error),
    /// The object body could not be read to completion.
    #[error("could not read object body: {0}")]
    Body(String),
}

#[derive(Clone, Debug)]
pub struct S3Client {
    /// Inner S3 client
    inner: s3::Client,
}

#[cfg_attr(test, automock)]
impl S3Client {
    pub fn new(inner: s3::Client) -> Self {
        Self { inner }
    }

    /// Reads the content type recorded on an object without fetching its
    /// body.
    #[tracing::instrument(skip(self))]
    pub async fn content_type(&self, bucket: &str, key: &str) -> Result<Option<String>, StoreErr> {
        head::content_type(&self.inner, bucket, key).await
    }

    /// Retrieves the full object body. `None` means the object is gone.
    #[tracing::instrument(skip(self))]
    pub async fn get(&self, bucket: &str, key: &str) -> Result<Option<Vec<u8>>, StoreErr> {
        get::get(&self.inner, bucket, key).await
    }

    /// Puts the provided content into the bucket at the provided key,
    /// tagged with the provided content type.
    #[tracing::instrument(skip(self, content))]
    pub async fn put(
        &self,
        bucket: &str,
        key: &str,
        content: &[u8],
        content_type: &str,
    ) -> Result<(), StoreErr> {
        put::put(&self.inner, bucket, key, content, content_type).await
    }

    /// Copies an object between buckets without reading it into memory.
    #[tracing::instrument(skip(self))]
    pub async fn copy(
        &self,
        source_bucket: &str,
        source_key: &str,
        bucket: &str,
        key: &str,
    ) -> Result<(), StoreErr> {
        copy::copy(&self.inner, source_bucket, source_key, bucket, key).await
    }
}
