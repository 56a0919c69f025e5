use aws_sdk_s3 as s3;
use aws_sdk_s3::operation::get_object::GetObjectError;

use super::StoreErr;

/// Gets a given item from the bucket, collecting the body into memory.
///
/// A missing object is not an error here; it is reported as `None` so the
/// caller can decide whether that is fatal. The response stream is fully
/// consumed before returning, on every path.
#[tracing::instrument(skip(client))]
pub async fn get(client: &s3::Client, bucket: &str, key: &str) -> Result<Option<Vec<u8>>, StoreErr> {
    let resp = match client.get_object().bucket(bucket).key(key).send().await {
        Ok(resp) => resp,
        Err(err) if err.as_service_error().is_some_and(GetObjectError::is_no_such_key) => {
            tracing::warn!(bucket, key, "object does not exist");
            return Ok(None);
        }
        Err(err) => return Err(s3::Error::from(err).into()),
    };

    let body = resp
        .body
        .collect()
        .await
        .map_err(|e| StoreErr::Body(e.to_string()))?;

    Ok(Some(body.into_bytes().to_vec()))
}
