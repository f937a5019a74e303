//! Session-oriented rendering.
//!
//! A [`render_session::RenderSession`] front-loads validation and asset
//! preparation, then drives the sequential per-frame loop that reveals the
//! name and advances the ink particle simulation.

/// The signature render session and its options.
pub mod render_session;
