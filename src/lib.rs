//! Inkscribe renders a short vertical "signature" video: a user-supplied name
//! is progressively written in ink over a textured silhouette while animated
//! ink particles spray from the pen tip, and the finished frame sequence is
//! encoded to MP4.
//!
//! The public API is session-oriented:
//!
//! - Load and validate a [`Signature`] definition
//! - Prepare its assets into a [`PreparedAssets`] store
//! - Create a [`RenderSession`]
//! - Render single frames or stream the full sequence into a [`FrameSink`]
//!
//! Frame generation is strictly sequential: every frame carries the particle
//! state mutated by the previous one, so frames are produced and delivered to
//! sinks in increasing index order.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod assets;
pub(crate) mod scene;

/// MP4 / in-memory encoding sinks.
pub mod encode;
/// Frame rasterization backends.
pub mod render;
/// Session-oriented rendering API.
pub mod session;

pub use crate::foundation::core::{Affine, Canvas, Fps, FrameIndex, FrameRange, Point, Rect, Vec2};
pub use crate::foundation::error::{InkscribeError, InkscribeResult};
pub use crate::foundation::rng::{SeededRng, seed_from_name};

pub use crate::assets::media::{ReferenceTiming, probe_reference_timing};
pub use crate::assets::store::{PreparedAssets, PreparedImage, PreparedMask};
pub use crate::encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts};
pub use crate::encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use crate::render::backend::{FrameRGBA, Rasterizer};
pub use crate::render::cpu::CpuRasterizer;
pub use crate::render::frame::FrameScene;
pub use crate::render::particles::{MAX_POPULATION, ParticleSystem};
pub use crate::scene::model::{AssetPathsDef, SignatureDef};
pub use crate::scene::signature::Signature;
pub use crate::session::render_session::{RenderSession, RenderSessionOpts, RenderStats};
