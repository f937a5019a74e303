use crate::assets::store::PreparedAssets;
use crate::foundation::error::{InkscribeError, InkscribeResult};
use crate::render::backend::{FrameRGBA, Rasterizer};
use crate::render::composite::grayscale_blend_silhouette;
use crate::render::frame::FrameScene;
use crate::render::text::{TextBrushRgba8, TextLayoutEngine};
use kurbo::Shape;
use std::collections::HashMap;
use std::sync::Arc;

const INK_BRUSH: TextBrushRgba8 = TextBrushRgba8 {
    r: 0,
    g: 0,
    b: 0,
    a: 255,
};

#[derive(Clone)]
struct PenPaint {
    paint: vello_cpu::Image,
    w: u32,
    h: u32,
}

struct FontCache {
    bytes: Arc<Vec<u8>>,
    font: vello_cpu::peniko::FontData,
}

/// CPU rasterizer powered by `vello_cpu` for vector/text drawing and
/// `parley` for shaping.
///
/// Caches are keyed against the prepared asset bytes, so one instance can be
/// reused across every frame of a session without re-shaping text that has
/// already been revealed.
pub struct CpuRasterizer {
    ctx: Option<vello_cpu::RenderContext>,
    text_engine: TextLayoutEngine,
    pen_paint: Option<(Arc<Vec<u8>>, PenPaint)>,
    layout_cache: HashMap<(String, u32), Arc<parley::Layout<TextBrushRgba8>>>,
    font_cache: Option<FontCache>,
}

impl Default for CpuRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl CpuRasterizer {
    /// Construct a rasterizer with empty caches.
    pub fn new() -> Self {
        Self {
            ctx: None,
            text_engine: TextLayoutEngine::new(),
            pen_paint: None,
            layout_cache: HashMap::new(),
            font_cache: None,
        }
    }

    fn with_ctx_mut<R>(
        &mut self,
        width: u16,
        height: u16,
        f: impl FnOnce(&mut Self, &mut vello_cpu::RenderContext) -> InkscribeResult<R>,
    ) -> InkscribeResult<R> {
        let mut ctx = match self.ctx.take() {
            None => vello_cpu::RenderContext::new(width, height),
            Some(ctx) if ctx.width() == width && ctx.height() == height => ctx,
            Some(_) => vello_cpu::RenderContext::new(width, height),
        };
        ctx.reset();
        let out = f(self, &mut ctx)?;
        self.ctx = Some(ctx);
        Ok(out)
    }

    fn font_for(&mut self, assets: &PreparedAssets) -> vello_cpu::peniko::FontData {
        if let Some(cache) = &self.font_cache
            && Arc::ptr_eq(&cache.bytes, &assets.font_bytes)
        {
            return cache.font.clone();
        }
        let font = vello_cpu::peniko::FontData::new(
            vello_cpu::peniko::Blob::from(assets.font_bytes.as_ref().clone()),
            0,
        );
        self.font_cache = Some(FontCache {
            bytes: assets.font_bytes.clone(),
            font: font.clone(),
        });
        font
    }

    fn layout_for(
        &mut self,
        assets: &PreparedAssets,
        text: &str,
        size_px: f32,
    ) -> InkscribeResult<Arc<parley::Layout<TextBrushRgba8>>> {
        let key = (text.to_string(), size_px.to_bits());
        if let Some(layout) = self.layout_cache.get(&key).cloned() {
            return Ok(layout);
        }
        let layout =
            self.text_engine
                .layout_plain(text, &assets.font_bytes, size_px, INK_BRUSH)?;
        let layout = Arc::new(layout);
        self.layout_cache.insert(key, layout.clone());
        Ok(layout)
    }

    fn pen_paint_for(&mut self, assets: &PreparedAssets) -> InkscribeResult<PenPaint> {
        if let Some((bytes, paint)) = &self.pen_paint
            && Arc::ptr_eq(bytes, &assets.pen_tip.rgba8_premul)
        {
            return Ok(paint.clone());
        }
        let pixmap = pixmap_from_premul_bytes(
            &assets.pen_tip.rgba8_premul,
            assets.pen_tip.width,
            assets.pen_tip.height,
        )?;
        let paint = PenPaint {
            paint: vello_cpu::Image {
                image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
                sampler: vello_cpu::peniko::ImageSampler::default(),
            },
            w: assets.pen_tip.width,
            h: assets.pen_tip.height,
        };
        self.pen_paint = Some((assets.pen_tip.rgba8_premul.clone(), paint.clone()));
        Ok(paint)
    }

    fn draw_text(
        &mut self,
        assets: &PreparedAssets,
        scene: &FrameScene,
        ctx: &mut vello_cpu::RenderContext,
    ) -> InkscribeResult<()> {
        if scene.text.is_empty() {
            return Ok(());
        }
        let layout = self.layout_for(assets, &scene.text, scene.font_size_px)?;
        let font = self.font_for(assets);

        ctx.set_transform(affine_to_cpu(kurbo::Affine::translate((
            scene.text_anchor.x,
            scene.text_anchor.y,
        ))));
        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                let brush = run.style().brush;
                ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                    brush.r, brush.g, brush.b, brush.a,
                ));
                let glyphs = run.glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                ctx.glyph_run(&font)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
        Ok(())
    }

    fn draw_pen(
        &mut self,
        assets: &PreparedAssets,
        scene: &FrameScene,
        ctx: &mut vello_cpu::RenderContext,
    ) -> InkscribeResult<()> {
        let pen = self.pen_paint_for(assets)?;
        let half_w = pen.w as f64 / 2.0;
        let half_h = pen.h as f64 / 2.0;
        ctx.set_transform(affine_to_cpu(kurbo::Affine::translate((
            scene.pen.x - half_w,
            scene.pen.y - half_h,
        ))));
        ctx.set_paint(pen.paint);
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            pen.w as f64,
            pen.h as f64,
        ));
        Ok(())
    }

    fn draw_dots(&mut self, scene: &FrameScene, ctx: &mut vello_cpu::RenderContext) {
        if scene.dots.is_empty() {
            return;
        }
        let mut path = vello_cpu::kurbo::BezPath::new();
        for dot in &scene.dots {
            let circle = kurbo::Circle::new((dot.x, dot.y), FrameScene::PARTICLE_RADIUS_PX);
            for el in circle.path_elements(0.1) {
                path.push(bezel_to_cpu(el));
            }
        }
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
            INK_BRUSH.r, INK_BRUSH.g, INK_BRUSH.b, INK_BRUSH.a,
        ));
        ctx.fill_path(&path);
    }
}

impl Rasterizer for CpuRasterizer {
    fn text_advance(
        &mut self,
        assets: &PreparedAssets,
        text: &str,
        size_px: f32,
    ) -> InkscribeResult<f64> {
        if text.is_empty() {
            return Ok(0.0);
        }
        let layout = self.layout_for(assets, text, size_px)?;
        Ok(layout.width() as f64)
    }

    fn raster_frame(
        &mut self,
        assets: &PreparedAssets,
        scene: &FrameScene,
    ) -> InkscribeResult<FrameRGBA> {
        let width: u16 = scene
            .canvas
            .width
            .try_into()
            .map_err(|_| InkscribeError::render("canvas width exceeds u16"))?;
        let height: u16 = scene
            .canvas
            .height
            .try_into()
            .map_err(|_| InkscribeError::render("canvas height exceeds u16"))?;
        if assets.silhouette.width != scene.canvas.width
            || assets.silhouette.height != scene.canvas.height
        {
            return Err(InkscribeError::render(
                "silhouette dimensions do not match canvas",
            ));
        }

        let mut pixmap = vello_cpu::Pixmap::new(width, height);
        self.with_ctx_mut(width, height, |this, ctx| {
            this.draw_text(assets, scene, ctx)?;
            this.draw_pen(assets, scene, ctx)?;
            this.draw_dots(scene, ctx);
            ctx.flush();
            ctx.render_to_pixmap(&mut pixmap);
            Ok(())
        })?;

        let mut out = vec![0u8; scene.canvas.rgba8_len()];
        grayscale_blend_silhouette(
            pixmap.data_as_u8_slice(),
            &assets.silhouette.luma8,
            &mut out,
        )?;

        Ok(FrameRGBA {
            width: scene.canvas.width,
            height: scene.canvas.height,
            data: out,
            premultiplied: true,
        })
    }
}

fn affine_to_cpu(a: kurbo::Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn bezel_to_cpu(el: kurbo::PathEl) -> vello_cpu::kurbo::PathEl {
    use kurbo::PathEl;
    let p = |p: kurbo::Point| vello_cpu::kurbo::Point::new(p.x, p.y);
    match el {
        PathEl::MoveTo(p0) => vello_cpu::kurbo::PathEl::MoveTo(p(p0)),
        PathEl::LineTo(p0) => vello_cpu::kurbo::PathEl::LineTo(p(p0)),
        PathEl::QuadTo(p0, p1) => vello_cpu::kurbo::PathEl::QuadTo(p(p0), p(p1)),
        PathEl::CurveTo(p0, p1, p2) => vello_cpu::kurbo::PathEl::CurveTo(p(p0), p(p1), p(p2)),
        PathEl::ClosePath => vello_cpu::kurbo::PathEl::ClosePath,
    }
}

fn pixmap_from_premul_bytes(
    bytes: &[u8],
    width: u32,
    height: u32,
) -> InkscribeResult<vello_cpu::Pixmap> {
    let w: u16 = width
        .try_into()
        .map_err(|_| InkscribeError::render("pixmap width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| InkscribeError::render("pixmap height exceeds u16"))?;
    if bytes.len()
        != (width as usize)
            .saturating_mul(height as usize)
            .saturating_mul(4)
    {
        return Err(InkscribeError::render("pixmap byte len mismatch"));
    }
    // Pixmap stores PremulRgba8; our bytes are already premultiplied.
    let mut pixels = Vec::<vello_cpu::peniko::color::PremulRgba8>::with_capacity(
        (width as usize) * (height as usize),
    );
    for px in bytes.chunks_exact(4) {
        pixels.push(vello_cpu::peniko::color::PremulRgba8::from_u8_array([
            px[0], px[1], px[2], px[3],
        ]));
    }
    Ok(vello_cpu::Pixmap::from_parts_with_opacity(
        pixels, w, h, true,
    ))
}
