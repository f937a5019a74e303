use super::*;

#[test]
fn normalize_accepts_plain_relative_paths() {
    assert_eq!(normalize_rel_path("pen.png").unwrap(), "pen.png");
    assert_eq!(
        normalize_rel_path("fonts/script.ttf").unwrap(),
        "fonts/script.ttf"
    );
    assert_eq!(normalize_rel_path("./a/./b.png").unwrap(), "a/b.png");
    assert_eq!(normalize_rel_path("a\\b.png").unwrap(), "a/b.png");
}

#[test]
fn normalize_rejects_escapes() {
    assert!(normalize_rel_path("/abs/path.png").is_err());
    assert!(normalize_rel_path("../up.png").is_err());
    assert!(normalize_rel_path("a/../../b.png").is_err());
    assert!(normalize_rel_path("").is_err());
    assert!(normalize_rel_path("./").is_err());
}

#[test]
fn prepare_fails_on_missing_assets() {
    use crate::scene::model::{AssetPathsDef, SignatureDef};
    use crate::scene::signature::Signature;

    let dir = std::env::temp_dir().join(format!("inkscribe_missing_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();

    let sig = Signature::from_def(SignatureDef {
        name: Some("Amy".to_string()),
        canvas: crate::foundation::core::Canvas {
            width: 8,
            height: 8,
        },
        font_size_px: 4.0,
        text_anchor: None,
        pen_size_px: 2,
        seed: None,
        assets: AssetPathsDef {
            reference_video: "missing.mp4".to_string(),
            pen_tip: "missing.png".to_string(),
            silhouette: "missing.png".to_string(),
            font: "missing.ttf".to_string(),
        },
    });

    let err = PreparedAssets::prepare(&sig, &dir).unwrap_err();
    assert!(err.to_string().starts_with("asset error"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn from_parts_wires_fields() {
    use crate::assets::media::ReferenceTiming;
    use crate::foundation::core::Fps;

    let assets = PreparedAssets::from_parts(
        PreparedImage {
            width: 2,
            height: 2,
            rgba8_premul: Arc::new(vec![0u8; 16]),
        },
        PreparedMask {
            width: 4,
            height: 4,
            luma8: Arc::new(vec![0u8; 16]),
        },
        vec![1, 2, 3],
        ReferenceTiming {
            fps: Fps::new(30, 1).unwrap(),
            total_frames: 90,
        },
    );
    assert_eq!(assets.pen_tip.width, 2);
    assert_eq!(assets.silhouette.luma8.len(), 16);
    assert_eq!(assets.font_bytes.as_ref(), &vec![1, 2, 3]);
    assert_eq!(assets.timing.total_frames, 90);
}
