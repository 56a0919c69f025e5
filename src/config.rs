use anyhow::Context;

const DEFAULT_TARGET_BUCKET_PARAMETER: &str = "/thumbnail-handler/target-bucket";
const DEFAULT_THUMBNAIL_SIZE: u32 = 128;

/// The configuration parameters for the application.
///
/// These are pulled from environment variables, falling back to the
/// defaults above where a variable is not set.
///
/// See `.env.sample` in the repository root for details.
#[derive(Debug, Clone)]
pub struct Config {
    /// Name of the parameter holding the destination bucket name.
    pub target_bucket_parameter: String,

    /// Edge length, in pixels, of generated thumbnails.
    pub thumbnail_size: u32,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let target_bucket_parameter = std::env::var("TARGET_BUCKET_PARAMETER")
            .unwrap_or_else(|_| DEFAULT_TARGET_BUCKET_PARAMETER.to_string());

        let thumbnail_size = match std::env::var("THUMBNAIL_SIZE") {
            Ok(raw) => raw
                .parse()
                .context("THUMBNAIL_SIZE must be a positive integer")?,
            Err(_) => DEFAULT_THUMBNAIL_SIZE,
        };

        Ok(Config {
            target_bucket_parameter,
            thumbnail_size,
        })
    }
}
