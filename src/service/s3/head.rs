use aws_sdk_s3 as s3;

use super::StoreErr;

/// Reads the object's metadata and returns its content type, if one was
/// recorded at upload time.
#[tracing::instrument(skip(client))]
pub async fn content_type(
    client: &s3::Client,
    bucket: &str,
    key: &str,
) -> Result<Option<String>, StoreErr> {
    let resp = client
        .head_object()
        .bucket(bucket)
        .key(key)
        .send()
        .await
        .map_err(s3::Error::from)?;

    Ok(resp.content_type().map(str::to_string))
}
