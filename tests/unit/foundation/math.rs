use super::*;

#[test]
fn mul_div255_endpoints() {
    assert_eq!(mul_div255_u16(0, 255), 0);
    assert_eq!(mul_div255_u16(255, 255), 255);
    assert_eq!(mul_div255_u16(255, 0), 0);
    assert_eq!(mul_div255_u8(128, 255), 128);
}

#[test]
fn luma_grayscale_is_identity_on_gray() {
    for v in [0u8, 1, 77, 128, 254, 255] {
        // Q8 weights sum to 256, so pure gray passes through unchanged.
        assert_eq!(luma_rec601(v, v, v), v);
    }
}

#[test]
fn luma_weights_order_channels() {
    let g = luma_rec601(0, 255, 0);
    let r = luma_rec601(255, 0, 0);
    let b = luma_rec601(0, 0, 255);
    assert!(g > r && r > b);
    assert_eq!(r, 76); // 77 * 255 >> 8
    assert_eq!(g, 149);
    assert_eq!(b, 28);
}

#[test]
fn blend_is_identity_on_equal_inputs() {
    for v in [0u8, 100, 255] {
        assert_eq!(blend_ink_silhouette(v, v), v);
    }
}

#[test]
fn blend_favors_canvas() {
    // 0.7 * 255 + 0.3 * 0, Q8 truncated.
    assert_eq!(blend_ink_silhouette(255, 0), 178);
    // 0.3 * 255.
    assert_eq!(blend_ink_silhouette(0, 255), 76);
}
