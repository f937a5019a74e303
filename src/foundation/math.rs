pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

pub(crate) fn mul_div255_u8(x: u16, y: u16) -> u8 {
    mul_div255_u16(x, y) as u8
}

// Rec.601 luma weights in Q8 fixed point (77 + 150 + 29 = 256).
const LUMA_R_Q8: u32 = 77;
const LUMA_G_Q8: u32 = 150;
const LUMA_B_Q8: u32 = 29;

/// Grayscale conversion of one RGB pixel (Rec.601, Q8 fixed point).
pub(crate) fn luma_rec601(r: u8, g: u8, b: u8) -> u8 {
    ((LUMA_R_Q8 * u32::from(r) + LUMA_G_Q8 * u32::from(g) + LUMA_B_Q8 * u32::from(b)) >> 8) as u8
}

// Ink/silhouette blend weights 0.7/0.3 in Q8 fixed point (179 + 77 = 256, so
// the blend of two `u8` values stays in `u8` without clamping).
const BLEND_CANVAS_Q8: u32 = 179;
const BLEND_SILHOUETTE_Q8: u32 = 77;

/// Weighted blend `0.7 * canvas + 0.3 * silhouette` of two gray values.
pub(crate) fn blend_ink_silhouette(canvas: u8, silhouette: u8) -> u8 {
    ((BLEND_CANVAS_Q8 * u32::from(canvas) + BLEND_SILHOUETTE_Q8 * u32::from(silhouette)) >> 8) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
