use crate::foundation::core::Canvas;

/// JSON-facing signature definition.
///
/// This is the human-edited deploy-time configuration: canvas geometry, font
/// sizing, and the four fixed asset paths. The name is the sole runtime input
/// and is usually supplied by the caller (CLI flag) rather than the file.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SignatureDef {
    /// Name to write. Usually overridden per render via [`crate::Signature::with_name`].
    #[serde(default)]
    pub name: Option<String>,

    /// Output canvas dimensions. Default 1080x1920 (vertical video).
    #[serde(default = "default_canvas")]
    pub canvas: Canvas,

    /// Font size in pixels. Default 140.
    #[serde(default = "default_font_size")]
    pub font_size_px: f32,

    /// Text anchor `[x, y]` in canvas pixels (top-left of the laid-out text).
    /// `None` anchors at `[100, height / 2]`.
    #[serde(default)]
    pub text_anchor: Option<[f64; 2]>,

    /// Square size the pen tip sprite is rendered at, in pixels. Default 40.
    #[serde(default = "default_pen_size")]
    pub pen_size_px: u32,

    /// Seed for the particle randomness. `None` derives a seed from the name.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Fixed asset paths, relative to the assets root.
    pub assets: AssetPathsDef,
}

/// Paths to the four fixed assets, relative to the assets root.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct AssetPathsDef {
    /// Reference hand-writing video; only its fps and duration are used.
    pub reference_video: String,
    /// Pen tip sprite (any format `image` decodes, alpha respected).
    pub pen_tip: String,
    /// Silhouette mask; decoded to grayscale and resized to the canvas.
    pub silhouette: String,
    /// TrueType/OpenType font used for the signature text.
    pub font: String,
}

fn default_canvas() -> Canvas {
    Canvas {
        width: 1080,
        height: 1920,
    }
}

fn default_font_size() -> f32 {
    140.0
}

fn default_pen_size() -> u32 {
    40
}
