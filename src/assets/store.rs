use std::path::Path;
use std::sync::Arc;

use crate::assets::decode::{decode_luma8_resized, decode_rgba8_premul_resized};
use crate::assets::media::{ReferenceTiming, probe_reference_timing};
use crate::foundation::error::{InkscribeError, InkscribeResult};
use crate::scene::signature::Signature;

/// A decoded, pre-sized RGBA8 premultiplied sprite.
#[derive(Clone, Debug)]
pub struct PreparedImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Premultiplied RGBA8 bytes, tightly packed, row-major.
    pub rgba8_premul: Arc<Vec<u8>>,
}

/// A decoded, canvas-sized single-channel grayscale mask.
#[derive(Clone, Debug)]
pub struct PreparedMask {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Gray bytes, tightly packed, row-major.
    pub luma8: Arc<Vec<u8>>,
}

/// All fixed assets of a signature render, loaded and decoded up front.
///
/// Preparation is all-or-nothing: any missing, unreadable, or corrupt asset
/// fails the whole render before a single frame is generated.
#[derive(Clone, Debug)]
pub struct PreparedAssets {
    /// Pen tip sprite, resized to the configured pen size.
    pub pen_tip: PreparedImage,
    /// Silhouette mask, resized to the canvas.
    pub silhouette: PreparedMask,
    /// Raw font file bytes.
    pub font_bytes: Arc<Vec<u8>>,
    /// Frame rate and frame count probed from the reference video.
    pub timing: ReferenceTiming,
}

impl PreparedAssets {
    /// Load, decode, and probe all assets named by `sig`, relative to
    /// `assets_root`.
    pub fn prepare(sig: &Signature, assets_root: &Path) -> InkscribeResult<Self> {
        let def = sig.def();
        let canvas = def.canvas;

        let pen_bytes = read_asset_bytes(assets_root, &def.assets.pen_tip)?;
        let pen_rgba = decode_rgba8_premul_resized(&pen_bytes, def.pen_size_px, def.pen_size_px)
            .map_err(|e| InkscribeError::asset(format!("pen tip '{}': {e}", def.assets.pen_tip)))?;
        let pen_tip = PreparedImage {
            width: def.pen_size_px,
            height: def.pen_size_px,
            rgba8_premul: Arc::new(pen_rgba),
        };

        let sil_bytes = read_asset_bytes(assets_root, &def.assets.silhouette)?;
        let sil_luma = decode_luma8_resized(&sil_bytes, canvas.width, canvas.height)
            .map_err(|e| {
                InkscribeError::asset(format!("silhouette '{}': {e}", def.assets.silhouette))
            })?;
        let silhouette = PreparedMask {
            width: canvas.width,
            height: canvas.height,
            luma8: Arc::new(sil_luma),
        };

        let font_bytes = read_asset_bytes(assets_root, &def.assets.font)?;
        if font_bytes.is_empty() {
            return Err(InkscribeError::asset(format!(
                "font '{}' is empty",
                def.assets.font
            )));
        }

        let video_rel = normalize_rel_path(&def.assets.reference_video)?;
        let timing = probe_reference_timing(&assets_root.join(Path::new(&video_rel)))?;

        Ok(Self {
            pen_tip,
            silhouette,
            font_bytes: Arc::new(font_bytes),
            timing,
        })
    }

    /// Assemble a store from already-decoded parts. Intended for tests and
    /// callers that bypass disk/ffprobe.
    pub fn from_parts(
        pen_tip: PreparedImage,
        silhouette: PreparedMask,
        font_bytes: Vec<u8>,
        timing: ReferenceTiming,
    ) -> Self {
        Self {
            pen_tip,
            silhouette,
            font_bytes: Arc::new(font_bytes),
            timing,
        }
    }
}

fn read_asset_bytes(assets_root: &Path, rel: &str) -> InkscribeResult<Vec<u8>> {
    let norm = normalize_rel_path(rel)?;
    let p = assets_root.join(Path::new(&norm));
    std::fs::read(&p)
        .map_err(|e| InkscribeError::asset(format!("failed to read asset '{}': {e}", p.display())))
}

/// Normalize and validate assets-root-relative paths.
///
/// The normalized result uses `/` separators, removes `.` segments, and
/// rejects absolute paths or parent traversals (`..`).
pub(crate) fn normalize_rel_path(source: &str) -> InkscribeResult<String> {
    let s = source.replace('\\', "/");
    if s.starts_with('/') {
        return Err(InkscribeError::validation("asset paths must be relative"));
    }
    if s.is_empty() {
        return Err(InkscribeError::validation("asset path must be non-empty"));
    }

    let mut out = Vec::<&str>::new();
    for part in s.split('/') {
        if part.is_empty() || part == "." {
            continue;
        }
        if part == ".." {
            return Err(InkscribeError::validation("asset paths must not contain '..'"));
        }
        out.push(part);
    }

    if out.is_empty() {
        return Err(InkscribeError::validation(
            "asset path must contain a file name",
        ));
    }

    Ok(out.join("/"))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/store.rs"]
mod tests;
