use crate::foundation::error::{InkscribeError, InkscribeResult};
use crate::foundation::math::{blend_ink_silhouette, luma_rec601};

/// Flatten a premultiplied RGBA8 canvas onto white, collapse it to grayscale,
/// blend it with the silhouette mask (`0.7 * canvas + 0.3 * silhouette`), and
/// expand the result into an opaque RGBA8 frame.
///
/// Ink and particles are drawn in black over transparency; flattening onto
/// white makes untouched pixels read as a light paper background with the
/// silhouette showing through as darker regions. For premultiplied bytes the
/// flatten is `c + (255 - a)` per channel.
pub(crate) fn grayscale_blend_silhouette(
    canvas_premul: &[u8],
    silhouette_luma: &[u8],
    out_rgba: &mut [u8],
) -> InkscribeResult<()> {
    if canvas_premul.len() != silhouette_luma.len() * 4 || out_rgba.len() != canvas_premul.len() {
        return Err(InkscribeError::render(
            "grayscale blend expects canvas/out of w*h*4 bytes and a w*h mask",
        ));
    }

    for ((src, &sil), dst) in canvas_premul
        .chunks_exact(4)
        .zip(silhouette_luma.iter())
        .zip(out_rgba.chunks_exact_mut(4))
    {
        let paper = 255 - src[3];
        let gray = luma_rec601(
            src[0].saturating_add(paper),
            src[1].saturating_add(paper),
            src[2].saturating_add(paper),
        );
        let blended = blend_ink_silhouette(gray, sil);
        dst[0] = blended;
        dst[1] = blended;
        dst[2] = blended;
        dst[3] = 255;
    }

    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
