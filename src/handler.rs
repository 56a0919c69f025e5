use aws_lambda_events::event::s3::S3Event;
use lambda_runtime::{Error, LambdaEvent, tracing};

use crate::{context::Context, model, service};

/// Processes one s3 "object created" notification.
///
/// Images are re-encoded and written to the target bucket together with a
/// thumbnail; everything else is copied through server-side. Returns the
/// content type of the source object, or `None` when the notification
/// carries nothing actionable.
#[tracing::instrument(skip(ctx, event))]
pub async fn handler(ctx: Context, event: LambdaEvent<S3Event>) -> Result<Option<String>, Error> {
    let Some(record) = event.payload.records.first() else {
        tracing::info!("notification batch is empty, nothing to do");
        return Ok(None);
    };

    let (Some(bucket), Some(key)) = (
        record.s3.bucket.name.as_deref(),
        record.s3.object.key.as_deref(),
    ) else {
        tracing::warn!("record is missing bucket name or object key");
        return Ok(None);
    };

    // Keys arrive url-encoded in s3 events
    let key = match urlencoding::decode(key) {
        Ok(decoded) => decoded.to_string(),
        Err(e) => {
            tracing::warn!(error=?e, key, "unable to decode object key");
            return Ok(None);
        }
    };

    let content_type = ctx
        .s3_client
        .content_type(bucket, &key)
        .await
        .map_err(|e| {
            tracing::error!(error=?e, bucket, key, "could not read object metadata");
            e
        })?
        .unwrap_or_default();

    tracing::info!(content_type, "object content type");

    if model::is_image(&content_type) {
        let body = ctx.s3_client.get(bucket, &key).await.map_err(|e| {
            tracing::error!(error=?e, bucket, key, "could not retrieve object body");
            e
        })?;
        let Some(body) = body else {
            tracing::error!(bucket, key, "object body was not available, skipping");
            return Ok(None);
        };
        tracing::trace!(bucket, key, "retrieved object body");

        let image = service::image::decode(&body).map_err(|e| {
            tracing::error!(error=?e, key, "could not decode uploaded image");
            e
        })?;
        let thumbnail = service::image::resize(&image, ctx.thumbnail_size);

        // Both writes carry the source content type even though the
        // payload is re-encoded to jpeg; downstream consumers key off the
        // original type.
        let original = service::image::encode_jpeg(&image)?;
        ctx.s3_client
            .put(&ctx.target_bucket, &key, &original, &content_type)
            .await
            .map_err(|e| {
                tracing::error!(error=?e, key, "could not store re-encoded original");
                e
            })?;
        tracing::trace!(key, "stored re-encoded original");

        let thumbnail_key = model::thumbnail_key(&key);
        let thumbnail_bytes = service::image::encode_jpeg(&thumbnail)?;
        ctx.s3_client
            .put(
                &ctx.target_bucket,
                &thumbnail_key,
                &thumbnail_bytes,
                &content_type,
            )
            .await
            .map_err(|e| {
                tracing::error!(error=?e, thumbnail_key, "could not store thumbnail");
                e
            })?;
        tracing::info!(key, thumbnail_key, "stored original and thumbnail");
    } else {
        ctx.s3_client
            .copy(bucket, &key, &ctx.target_bucket, &key)
            .await
            .map_err(|e| {
                tracing::error!(error=?e, bucket, key, "could not copy non-image object");
                e
            })?;
        tracing::info!(key, "copied non-image object");
    }

    Ok(Some(content_type))
}
