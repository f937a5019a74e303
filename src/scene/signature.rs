use crate::foundation::core::Point;
use crate::foundation::error::{InkscribeError, InkscribeResult};
use crate::scene::model::SignatureDef;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Validated signature boundary object.
///
/// Wraps a [`SignatureDef`] parsed from JSON; [`Signature::validate`] is the
/// single place user input is rejected. Everything past validation treats the
/// definition as trusted.
#[derive(Debug, Clone)]
pub struct Signature {
    def: SignatureDef,
}

impl Signature {
    /// Parse a signature definition from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> InkscribeResult<Self> {
        let def: SignatureDef = serde_json::from_reader(r)
            .map_err(|e| InkscribeError::validation(format!("parse signature JSON: {e}")))?;
        Ok(Self { def })
    }

    /// Parse a signature definition from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> InkscribeResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            InkscribeError::validation(format!("open signature JSON '{}': {e}", path.display()))
        })?;
        let r = BufReader::new(f);
        Self::from_reader(r)
    }

    /// Build a signature directly from a definition.
    pub fn from_def(def: SignatureDef) -> Self {
        Self { def }
    }

    /// Replace the name, e.g. with the value of a CLI flag.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.def.name = Some(name.into());
        self
    }

    /// Validate the definition. Must pass before a session is created.
    pub fn validate(&self) -> InkscribeResult<()> {
        self.name()?;

        let c = self.def.canvas;
        if c.width == 0 || c.height == 0 {
            return Err(InkscribeError::validation("canvas dimensions must be non-zero"));
        }
        if !c.width.is_multiple_of(2) || !c.height.is_multiple_of(2) {
            return Err(InkscribeError::validation(
                "canvas dimensions must be even (required for yuv420p mp4 output)",
            ));
        }
        if c.width > u32::from(u16::MAX) || c.height > u32::from(u16::MAX) {
            return Err(InkscribeError::validation("canvas dimensions exceed u16"));
        }

        if !self.def.font_size_px.is_finite() || self.def.font_size_px <= 0.0 {
            return Err(InkscribeError::validation(
                "font_size_px must be finite and > 0",
            ));
        }
        if self.def.pen_size_px == 0 {
            return Err(InkscribeError::validation("pen_size_px must be > 0"));
        }
        if let Some([x, y]) = self.def.text_anchor
            && (!x.is_finite() || !y.is_finite())
        {
            return Err(InkscribeError::validation("text_anchor must be finite"));
        }

        for (label, rel) in [
            ("reference_video", &self.def.assets.reference_video),
            ("pen_tip", &self.def.assets.pen_tip),
            ("silhouette", &self.def.assets.silhouette),
            ("font", &self.def.assets.font),
        ] {
            crate::assets::store::normalize_rel_path(rel)
                .map_err(|e| InkscribeError::validation(format!("assets.{label}: {e}")))?;
        }

        Ok(())
    }

    /// The trimmed name, rejecting empty or whitespace-only input.
    pub fn name(&self) -> InkscribeResult<&str> {
        let name = self
            .def
            .name
            .as_deref()
            .map(str::trim)
            .unwrap_or_default();
        if name.is_empty() {
            return Err(InkscribeError::validation(
                "name must be non-empty after trimming whitespace",
            ));
        }
        Ok(name)
    }

    /// Number of characters the signature reveals over the video's duration.
    pub fn char_count(&self) -> InkscribeResult<usize> {
        Ok(self.name()?.chars().count())
    }

    /// Text anchor position, applying the `[100, height / 2]` default.
    pub fn text_anchor(&self) -> Point {
        match self.def.text_anchor {
            Some([x, y]) => Point::new(x, y),
            None => Point::new(100.0, f64::from(self.def.canvas.height) / 2.0),
        }
    }

    /// Borrow the underlying definition.
    pub fn def(&self) -> &SignatureDef {
        &self.def
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/signature.rs"]
mod tests;
