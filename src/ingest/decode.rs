use std::sync::Arc;

use anyhow::Context;

use crate::foundation::{
    error::{CarouselError, CarouselResult},
    payload::ImagePayload,
};

#[derive(Clone, Debug)]
/// Decoded raster image in premultiplied RGBA8 form, ready for compositing.
pub struct PreparedImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel bytes in row-major premultiplied RGBA8.
    pub rgba8_premul: Arc<Vec<u8>>,
}

/// Sniff the mime type of encoded image bytes.
pub fn sniff_mime(bytes: &[u8]) -> CarouselResult<&'static str> {
    let format = image::guess_format(bytes)
        .map_err(|e| CarouselError::decode(format!("unrecognized image format: {e}")))?;
    Ok(format.to_mime_type())
}

/// Decode one accepted input file into a self-describing image payload.
///
/// The bytes are fully decoded once here so that every payload entering the
/// store is known-decodable; the compositor can then treat decode failures
/// during export as exceptional.
pub fn ingest_file(name: &str, bytes: Vec<u8>) -> CarouselResult<ImagePayload> {
    let mime = sniff_mime(&bytes)?;
    image::load_from_memory(&bytes)
        .map_err(|e| CarouselError::decode(format!("'{name}' failed to decode: {e}")))?;
    Ok(ImagePayload::new(mime, bytes))
}

/// Decode encoded image bytes and convert to premultiplied RGBA8.
pub fn decode_image(bytes: &[u8]) -> CarouselResult<PreparedImage> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut rgba8_premul = rgba.into_raw();
    premultiply_rgba8_in_place(&mut rgba8_premul);

    Ok(PreparedImage {
        width,
        height,
        rgba8_premul: Arc::new(rgba8_premul),
    })
}

fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * a + 127) / 255) as u8;
        px[1] = ((px[1] as u16 * a + 127) / 255) as u8;
        px[2] = ((px[2] as u16 * a + 127) / 255) as u8;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/ingest/decode.rs"]
mod tests;
