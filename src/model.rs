/// Prefix attached to the source key to derive the thumbnail key.
const THUMBNAIL_KEY_PREFIX: &str = "thumb.";

/// Content types beginning with this literal are handled as images.
const IMAGE_CONTENT_TYPE_PREFIX: &str = "image";

/// Builds the destination key for an object's thumbnail.
pub fn thumbnail_key(key: &str) -> String {
    format!("{}{}", THUMBNAIL_KEY_PREFIX, key)
}

/// Whether a content type describes an image.
pub fn is_image(content_type: &str) -> bool {
    content_type.starts_with(IMAGE_CONTENT_TYPE_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thumbnail_key() {
        assert_eq!(thumbnail_key("cat.png"), "thumb.cat.png");

        // Keys with path separators keep the prefix at the front
        assert_eq!(
            thumbnail_key("albums/2024/cat.png"),
            "thumb.albums/2024/cat.png"
        );
    }

    #[test]
    fn test_is_image() {
        assert!(is_image("image/png"));
        assert!(is_image("image/jpeg"));
        assert!(!is_image("application/pdf"));
        assert!(!is_image("text/plain"));
        assert!(!is_image(""));
    }
}
