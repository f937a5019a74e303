use crate::foundation::error::{InkscribeError, InkscribeResult};
use crate::foundation::math::mul_div255_u8;
use anyhow::Context as _;

/// Decode an image and resize it to `width x height`, returning premultiplied
/// RGBA8 bytes. Used for the pen tip sprite.
pub(crate) fn decode_rgba8_premul_resized(
    bytes: &[u8],
    width: u32,
    height: u32,
) -> InkscribeResult<Vec<u8>> {
    if width == 0 || height == 0 {
        return Err(InkscribeError::asset("resize target must be non-zero"));
    }
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    let resized = dyn_img.resize_exact(width, height, image::imageops::FilterType::Triangle);
    let mut rgba8 = resized.to_rgba8().into_raw();
    premultiply_rgba8_in_place(&mut rgba8);
    Ok(rgba8)
}

/// Decode an image to single-channel grayscale and resize it to
/// `width x height`. Used for the silhouette mask.
pub(crate) fn decode_luma8_resized(
    bytes: &[u8],
    width: u32,
    height: u32,
) -> InkscribeResult<Vec<u8>> {
    if width == 0 || height == 0 {
        return Err(InkscribeError::asset("resize target must be non-zero"));
    }
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    let resized = dyn_img.resize_exact(width, height, image::imageops::FilterType::Triangle);
    Ok(resized.to_luma8().into_raw())
}

pub(crate) fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = mul_div255_u8(px[0] as u16, a);
        px[1] = mul_div255_u8(px[1] as u16, a);
        px[2] = mul_div255_u8(px[2] as u16, a);
    }
}
