use crate::foundation::core::{Canvas, FrameIndex, Point};

/// Fully-evaluated draw list for one frame.
///
/// Produced by the session's frame loop and handed to a
/// [`crate::render::backend::Rasterizer`]; it carries everything a backend
/// needs so the loop itself stays backend-agnostic and testable.
#[derive(Clone, Debug)]
pub struct FrameScene {
    /// 0-based frame index.
    pub index: FrameIndex,
    /// Output dimensions.
    pub canvas: Canvas,
    /// Revealed prefix of the name for this frame (may be empty).
    pub text: String,
    /// Font size for the revealed text, in pixels.
    pub font_size_px: f32,
    /// Top-left anchor of the laid-out text.
    pub text_anchor: Point,
    /// Pen tip position for this frame.
    pub pen: Point,
    /// Square size the pen tip sprite is drawn at, in pixels.
    pub pen_size_px: u32,
    /// Draw positions of every live ink particle, radius
    /// [`FrameScene::PARTICLE_RADIUS_PX`].
    pub dots: Vec<Point>,
}

impl FrameScene {
    /// Radius of one ink particle dot, in pixels.
    pub const PARTICLE_RADIUS_PX: f64 = 2.0;
}
