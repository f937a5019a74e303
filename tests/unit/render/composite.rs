use super::*;

#[test]
fn length_mismatches_are_rejected() {
    let mut out = vec![0u8; 16];
    assert!(grayscale_blend_silhouette(&[0u8; 16], &[0u8; 3], &mut out).is_err());
    assert!(grayscale_blend_silhouette(&[0u8; 12], &[0u8; 4], &mut out).is_err());
    let mut short = vec![0u8; 12];
    assert!(grayscale_blend_silhouette(&[0u8; 16], &[0u8; 4], &mut short).is_err());
}

#[test]
fn untouched_canvas_reads_as_light_paper_over_silhouette() {
    // Transparent canvas flattens onto white; output is 0.7 * 255 + 0.3 * sil.
    let canvas = vec![0u8; 8];
    let sil = vec![200u8, 0];
    let mut out = vec![0u8; 8];
    grayscale_blend_silhouette(&canvas, &sil, &mut out).unwrap();
    let expected = ((179u32 * 255 + 77 * 200) >> 8) as u8;
    assert_eq!(expected, 238);
    assert_eq!(&out[0..4], &[expected, expected, expected, 255]);
    assert_eq!(&out[4..8], &[178, 178, 178, 255]);
}

#[test]
fn black_ink_darkens_the_blend() {
    // Opaque black ink: luma 0, so only the 0.3 silhouette term remains.
    let canvas = vec![0u8, 0, 0, 255];
    let sil = vec![255u8];
    let mut out = vec![0u8; 4];
    grayscale_blend_silhouette(&canvas, &sil, &mut out).unwrap();
    assert_eq!(out, vec![76, 76, 76, 255]);
}

#[test]
fn antialiased_ink_edges_blend_toward_paper() {
    // Half-covered black ink over white silhouette: gray 127 at 0.7 weight
    // plus white silhouette at 0.3.
    let canvas = vec![0u8, 0, 0, 128];
    let sil = vec![255u8];
    let mut out = vec![0u8; 4];
    grayscale_blend_silhouette(&canvas, &sil, &mut out).unwrap();
    let expected = ((179u32 * 127 + 77 * 255) >> 8) as u8;
    assert_eq!(out, vec![expected, expected, expected, 255]);
}

#[test]
fn output_is_always_opaque_gray() {
    let canvas: Vec<u8> = (0..64u8).collect();
    let sil: Vec<u8> = (0..16u8).map(|v| v * 16).collect();
    let mut out = vec![0u8; 64];
    grayscale_blend_silhouette(&canvas, &sil, &mut out).unwrap();
    for px in out.chunks_exact(4) {
        assert_eq!(px[0], px[1]);
        assert_eq!(px[1], px[2]);
        assert_eq!(px[3], 255);
    }
}
