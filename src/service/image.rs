use std::io::Cursor;

use image::{DynamicImage, ImageFormat, imageops::FilterType};
use thiserror::Error;

/// Errors from decoding or encoding image payloads.
#[derive(Debug, Error)]
pub enum ImageError {
    #[error("could not decode image: {0}")]
    Decode(#[source] image::ImageError),
    #[error("could not encode image: {0}")]
    Encode(#[source] image::ImageError),
}

/// Decodes an object body into an image, sniffing the format from the
/// bytes rather than trusting the recorded content type.
pub fn decode(bytes: &[u8]) -> Result<DynamicImage, ImageError> {
    image::load_from_memory(bytes).map_err(ImageError::Decode)
}

/// Produces a `size`x`size` variant of the image. The aspect ratio is not
/// preserved; the output is always exactly the target dimension.
pub fn resize(image: &DynamicImage, size: u32) -> DynamicImage {
    image.resize_exact(size, size, FilterType::Lanczos3)
}

/// Encodes the image as jpeg. Jpeg carries no alpha channel, so pixels
/// are flattened to rgb first.
pub fn encode_jpeg(image: &DynamicImage) -> Result<Vec<u8>, ImageError> {
    let mut buf = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(image.to_rgb8())
        .write_to(&mut buf, ImageFormat::Jpeg)
        .map_err(ImageError::Encode)?;

    Ok(buf.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::GenericImageView;

    fn sample_png(width: u32, height: u32) -> Vec<u8> {
        let img = DynamicImage::ImageRgb8(image::RgbImage::from_pixel(
            width,
            height,
            image::Rgb([120, 30, 200]),
        ));
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, ImageFormat::Png).unwrap();
        buf.into_inner()
    }

    #[test]
    fn test_decode_resize_encode() {
        let img = decode(&sample_png(10, 6)).unwrap();
        assert_eq!(img.dimensions(), (10, 6));

        let thumb = resize(&img, 4);
        assert_eq!(thumb.dimensions(), (4, 4));

        let jpeg = encode_jpeg(&thumb).unwrap();
        let reloaded = image::load_from_memory_with_format(&jpeg, ImageFormat::Jpeg).unwrap();
        assert_eq!(reloaded.dimensions(), (4, 4));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let err = decode(b"definitely not an image").unwrap_err();
        assert!(matches!(err, ImageError::Decode(_)));
    }

    #[test]
    fn test_encode_flattens_alpha() {
        let rgba = DynamicImage::ImageRgba8(image::RgbaImage::from_pixel(
            3,
            3,
            image::Rgba([10, 20, 30, 128]),
        ));
        encode_jpeg(&rgba).unwrap();
    }
}
