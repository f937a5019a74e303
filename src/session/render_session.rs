use crate::assets::store::PreparedAssets;
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::{Canvas, FrameIndex, FrameRange, Point};
use crate::foundation::error::{InkscribeError, InkscribeResult};
use crate::foundation::rng::seed_from_name;
use crate::render::backend::{FrameRGBA, Rasterizer};
use crate::render::frame::FrameScene;
use crate::render::particles::ParticleSystem;
use crate::scene::signature::Signature;

/// Options controlling `RenderSession` behavior.
#[derive(Clone, Copy, Debug)]
pub struct RenderSessionOpts {
    /// Move the pen tip along with the revealed text's caret. When disabled,
    /// the pen stays pinned at the canvas center.
    pub track_pen: bool,
    /// Override the particle seed. `None` falls back to the definition's
    /// seed, and then to a hash of the name.
    pub seed: Option<u64>,
}

impl Default for RenderSessionOpts {
    fn default() -> Self {
        Self {
            track_pen: true,
            seed: None,
        }
    }
}

/// Range render statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Total frames pushed to the sink.
    pub frames_total: u64,
    /// Particles spawned while simulating, including frames replayed before
    /// the requested range.
    pub particles_spawned: u64,
    /// Largest per-frame particle draw count observed.
    pub peak_particles: usize,
}

/// Session-oriented signature renderer.
///
/// A session resolves the name, seed, and timing once, then provides
/// per-frame execution for single frames and ranges. The underlying
/// simulation is function-local: every render call replays deterministically
/// from frame zero, so a session is immutable and reusable.
pub struct RenderSession {
    sig: Signature,
    assets: PreparedAssets,
    opts: RenderSessionOpts,

    name: String,
    // Byte offset of every char boundary in `name`, including the end.
    char_offsets: Vec<usize>,
    text_anchor: Point,
    seed: u64,
}

impl RenderSession {
    /// Construct a new render session.
    pub fn new(
        sig: Signature,
        assets: PreparedAssets,
        opts: RenderSessionOpts,
    ) -> InkscribeResult<Self> {
        sig.validate()?;
        let name = sig.name()?.to_string();

        let mut char_offsets: Vec<usize> = name.char_indices().map(|(i, _)| i).collect();
        char_offsets.push(name.len());

        let seed = opts
            .seed
            .or(sig.def().seed)
            .unwrap_or_else(|| seed_from_name(&name));

        let text_anchor = sig.text_anchor();
        Ok(Self {
            sig,
            assets,
            opts,
            name,
            char_offsets,
            text_anchor,
            seed,
        })
    }

    /// Output canvas dimensions.
    pub fn canvas(&self) -> Canvas {
        self.sig.def().canvas
    }

    /// Total output frames, fixed by the reference video.
    pub fn total_frames(&self) -> u64 {
        self.assets.timing.total_frames
    }

    /// The full output range `[0, total_frames)`.
    pub fn full_range(&self) -> FrameRange {
        FrameRange {
            start: FrameIndex(0),
            end: FrameIndex(self.total_frames()),
        }
    }

    /// The particle seed in effect for this session.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Render every frame into `sink`.
    pub fn render_all(
        &self,
        rasterizer: &mut dyn Rasterizer,
        sink: &mut dyn FrameSink,
    ) -> InkscribeResult<RenderStats> {
        self.render_range(rasterizer, self.full_range(), sink)
    }

    /// Render a frame range and stream frames into a sink.
    ///
    /// The sink receives frames in strictly increasing frame index order.
    /// Frames before `range.start` are simulated but not rasterized, keeping
    /// sub-range output identical to the same frames of a full render.
    #[tracing::instrument(skip_all, fields(name = %self.name, frames = range.len_frames()))]
    pub fn render_range(
        &self,
        rasterizer: &mut dyn Rasterizer,
        range: FrameRange,
        sink: &mut dyn FrameSink,
    ) -> InkscribeResult<RenderStats> {
        if range.is_empty() {
            return Err(InkscribeError::validation(
                "render_range range must be non-empty",
            ));
        }
        if range.end.0 > self.total_frames() {
            return Err(InkscribeError::validation(
                "render_range range must be within the reference video duration",
            ));
        }

        let canvas = self.canvas();
        sink.begin(SinkConfig {
            width: canvas.width,
            height: canvas.height,
            fps: self.assets.timing.fps,
        })?;

        let mut sim = FrameSim::new(self.char_offsets.len() - 1, self.total_frames(), self.seed);
        let mut stats = RenderStats::default();
        for f in 0..range.end.0 {
            let scene = self.advance_scene(rasterizer, &mut sim, FrameIndex(f))?;
            stats.peak_particles = stats.peak_particles.max(scene.dots.len());
            if !range.contains(FrameIndex(f)) {
                continue;
            }
            let frame = rasterizer.raster_frame(&self.assets, &scene)?;
            sink.push_frame(FrameIndex(f), &frame)?;
            stats.frames_total += 1;
        }
        stats.particles_spawned = sim.particles.spawned_total();

        sink.end()?;
        tracing::debug!(
            frames = stats.frames_total,
            particles = stats.particles_spawned,
            "render range complete"
        );
        Ok(stats)
    }

    /// Render a single frame.
    ///
    /// Replays the simulation from frame zero, so the result is identical to
    /// the same frame of a full render.
    pub fn render_frame(
        &self,
        rasterizer: &mut dyn Rasterizer,
        frame: FrameIndex,
    ) -> InkscribeResult<FrameRGBA> {
        if frame.0 >= self.total_frames() {
            return Err(InkscribeError::validation(
                "render_frame frame must be within the reference video duration",
            ));
        }

        let mut sim = FrameSim::new(self.char_offsets.len() - 1, self.total_frames(), self.seed);
        let mut scene = self.advance_scene(rasterizer, &mut sim, FrameIndex(0))?;
        for f in 1..=frame.0 {
            scene = self.advance_scene(rasterizer, &mut sim, FrameIndex(f))?;
        }
        rasterizer.raster_frame(&self.assets, &scene)
    }

    fn advance_scene(
        &self,
        rasterizer: &mut dyn Rasterizer,
        sim: &mut FrameSim,
        frame: FrameIndex,
    ) -> InkscribeResult<FrameScene> {
        let revealed = sim.step_reveal();
        let text = &self.name[..self.char_offsets[revealed]];

        let def = self.sig.def();
        let pen = if self.opts.track_pen {
            let advance = rasterizer.text_advance(&self.assets, text, def.font_size_px)?;
            Point::new(
                self.text_anchor.x + advance,
                self.text_anchor.y + f64::from(def.font_size_px) / 2.0,
            )
        } else {
            Point::new(
                f64::from(def.canvas.width) / 2.0,
                f64::from(def.canvas.height) / 2.0,
            )
        };

        let dots = sim.particles.emit_and_step(pen);

        Ok(FrameScene {
            index: frame,
            canvas: def.canvas,
            text: text.to_string(),
            font_size_px: def.font_size_px,
            text_anchor: self.text_anchor,
            pen,
            pen_size_px: def.pen_size_px,
            dots,
        })
    }
}

/// Function-local per-render state: reveal progress plus the particle
/// simulation. Rebuilt at frame zero for every render call.
struct FrameSim {
    char_count: usize,
    per_frame: f64,
    progress: f64,
    particles: ParticleSystem,
}

impl FrameSim {
    fn new(char_count: usize, total_frames: u64, seed: u64) -> Self {
        Self {
            char_count,
            per_frame: char_count as f64 / total_frames as f64,
            progress: 0.0,
            particles: ParticleSystem::with_seed(seed),
        }
    }

    // Accumulates fractional progress each frame and reveals whole characters
    // as the running total crosses integer boundaries. Accumulated rounding
    // means a long name over a short clip ends one character short of full,
    // rather than jumping ahead.
    fn step_reveal(&mut self) -> usize {
        self.progress += self.per_frame;
        (self.progress.floor() as usize).min(self.char_count)
    }
}
