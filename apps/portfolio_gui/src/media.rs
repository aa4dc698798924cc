//! Image loading and decoding for the profile and project preview assets.

use anyhow::Context;

/// RGBA pixels ready for upload as an egui texture.
#[derive(Clone, Debug)]
pub struct DecodedImage {
    pub width: usize,
    pub height: usize,
    pub rgba: Vec<u8>,
}

pub async fn load_rgba_image(path: &str) -> anyhow::Result<DecodedImage> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("failed to read image file '{path}'"))?;
    decode_rgba(&bytes)
}

pub fn decode_rgba(bytes: &[u8]) -> anyhow::Result<DecodedImage> {
    let decoded = image::load_from_memory(bytes).context("failed to decode image")?;
    let rgba = decoded.to_rgba8();
    Ok(DecodedImage {
        width: rgba.width() as usize,
        height: rgba.height() as usize,
        rgba: rgba.into_raw(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::codecs::png::PngEncoder;
    use image::{ExtendedColorType, ImageEncoder};

    #[test]
    fn decodes_png_bytes_to_rgba_pixels() {
        let pixels: Vec<u8> = vec![255, 0, 0, 255, 0, 255, 0, 255, 0, 0, 255, 255, 0, 0, 0, 255];
        let mut encoded = Vec::new();
        PngEncoder::new(&mut encoded)
            .write_image(&pixels, 2, 2, ExtendedColorType::Rgba8)
            .expect("encode test png");

        let decoded = decode_rgba(&encoded).expect("decode");
        assert_eq!(decoded.width, 2);
        assert_eq!(decoded.height, 2);
        assert_eq!(decoded.rgba, pixels);
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        assert!(decode_rgba(b"definitely not an image").is_err());
    }

    #[tokio::test]
    async fn missing_file_reports_the_path() {
        let err = load_rgba_image("assets/does-not-exist.jpg")
            .await
            .expect_err("missing file");
        assert!(err.to_string().contains("does-not-exist"));
    }
}
