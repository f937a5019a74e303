use super::*;
use crate::foundation::core::Canvas;
use crate::scene::model::AssetPathsDef;

fn base_def() -> SignatureDef {
    SignatureDef {
        name: Some("Amy".to_string()),
        canvas: Canvas {
            width: 1080,
            height: 1920,
        },
        font_size_px: 140.0,
        text_anchor: None,
        pen_size_px: 40,
        seed: None,
        assets: AssetPathsDef {
            reference_video: "reference.mp4".to_string(),
            pen_tip: "pen_tip.png".to_string(),
            silhouette: "silhouette.jpg".to_string(),
            font: "fonts/script.ttf".to_string(),
        },
    }
}

#[test]
fn minimal_json_applies_defaults() {
    let json = r#"{
        "assets": {
            "reference_video": "ref.mp4",
            "pen_tip": "pen.png",
            "silhouette": "sil.png",
            "font": "font.ttf"
        }
    }"#;
    let sig = Signature::from_reader(json.as_bytes()).unwrap();
    let def = sig.def();
    assert_eq!(def.canvas.width, 1080);
    assert_eq!(def.canvas.height, 1920);
    assert_eq!(def.font_size_px, 140.0);
    assert_eq!(def.pen_size_px, 40);
    assert!(def.name.is_none());
    assert!(def.seed.is_none());
}

#[test]
fn malformed_json_is_a_validation_error() {
    let err = Signature::from_reader("{ nope".as_bytes()).unwrap_err();
    assert!(err.to_string().starts_with("validation error"));
}

#[test]
fn valid_def_passes() {
    Signature::from_def(base_def()).validate().unwrap();
}

#[test]
fn name_is_trimmed_and_required() {
    let sig = Signature::from_def(base_def()).with_name("  Amy  ");
    assert_eq!(sig.name().unwrap(), "Amy");
    assert_eq!(sig.char_count().unwrap(), 3);

    for bad in ["", "   ", "\t\n"] {
        let sig = Signature::from_def(base_def()).with_name(bad);
        assert!(sig.validate().is_err());
    }

    let mut def = base_def();
    def.name = None;
    assert!(Signature::from_def(def).validate().is_err());
}

#[test]
fn char_count_counts_chars_not_bytes() {
    let sig = Signature::from_def(base_def()).with_name("é日本");
    assert_eq!(sig.char_count().unwrap(), 3);
}

#[test]
fn canvas_must_be_even_and_nonzero() {
    let mut def = base_def();
    def.canvas = Canvas {
        width: 0,
        height: 1920,
    };
    assert!(Signature::from_def(def.clone()).validate().is_err());

    def.canvas = Canvas {
        width: 1081,
        height: 1920,
    };
    assert!(Signature::from_def(def.clone()).validate().is_err());

    def.canvas = Canvas {
        width: 1080,
        height: 1919,
    };
    assert!(Signature::from_def(def).validate().is_err());
}

#[test]
fn font_and_pen_sizes_are_validated() {
    let mut def = base_def();
    def.font_size_px = 0.0;
    assert!(Signature::from_def(def).validate().is_err());

    let mut def = base_def();
    def.font_size_px = f32::NAN;
    assert!(Signature::from_def(def).validate().is_err());

    let mut def = base_def();
    def.pen_size_px = 0;
    assert!(Signature::from_def(def).validate().is_err());
}

#[test]
fn anchor_defaults_to_left_middle() {
    let sig = Signature::from_def(base_def());
    let anchor = sig.text_anchor();
    assert_eq!((anchor.x, anchor.y), (100.0, 960.0));

    let mut def = base_def();
    def.text_anchor = Some([12.0, 34.0]);
    let anchor = Signature::from_def(def).text_anchor();
    assert_eq!((anchor.x, anchor.y), (12.0, 34.0));
}

#[test]
fn non_finite_anchor_is_rejected() {
    let mut def = base_def();
    def.text_anchor = Some([f64::INFINITY, 0.0]);
    assert!(Signature::from_def(def).validate().is_err());
}

#[test]
fn asset_paths_must_stay_under_the_root() {
    for bad in ["/etc/passwd", "../secret.png", "a/../../b.png", ""] {
        let mut def = base_def();
        def.assets.pen_tip = bad.to_string();
        assert!(
            Signature::from_def(def).validate().is_err(),
            "path {bad:?} should be rejected"
        );
    }
}
