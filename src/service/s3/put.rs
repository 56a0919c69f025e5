use aws_sdk_s3 as s3;

use super::StoreErr;

#[tracing::instrument(skip(client, content))]
pub async fn put(
    client: &s3::Client,
    bucket: &str,
    key: &str,
    content: &[u8],
    content_type: &str,
) -> Result<(), StoreErr> {
    let body = s3::primitives::ByteStream::from(content.to_vec());
    client
        .put_object()
        .bucket(bucket)
        .key(key)
        .body(body)
        .content_type(content_type)
        .send()
        .await
        .map_err(s3::Error::from)?;

    Ok(())
}
