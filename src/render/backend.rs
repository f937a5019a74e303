use crate::assets::store::PreparedAssets;
use crate::foundation::error::InkscribeResult;
use crate::render::frame::FrameScene;

/// A rendered frame as RGBA8 pixels.
///
/// Silhouette-blended output frames are opaque; the `premultiplied` flag is
/// included to make alpha handling explicit at API boundaries.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether `data` is premultiplied alpha.
    pub premultiplied: bool,
}

/// Backend contract for turning a [`FrameScene`] into pixels.
///
/// The session's frame loop owns the animation state; a rasterizer owns fonts
/// and drawing. `text_advance` exposes the one piece of font metrics the loop
/// needs: the caret offset the pen tip tracks.
pub trait Rasterizer {
    /// Advance width in pixels of `text` laid out at `size_px`.
    ///
    /// Empty text must report `0.0` without touching the font.
    fn text_advance(
        &mut self,
        assets: &PreparedAssets,
        text: &str,
        size_px: f32,
    ) -> InkscribeResult<f64>;

    /// Rasterize one frame.
    fn raster_frame(
        &mut self,
        assets: &PreparedAssets,
        scene: &FrameScene,
    ) -> InkscribeResult<FrameRGBA>;
}
