use aws_sdk_s3 as s3;

use super::StoreErr;

/// Issues a server-side copy; the object bytes never enter this process.
#[tracing::instrument(skip(client))]
pub async fn copy(
    client: &s3::Client,
    source_bucket: &str,
    source_key: &str,
    bucket: &str,
    key: &str,
) -> Result<(), StoreErr> {
    client
        .copy_object()
        .copy_source(format!("{}/{}", source_bucket, source_key))
        .bucket(bucket)
        .key(key)
        .send()
        .await
        .map_err(s3::Error::from)?;

    Ok(())
}
