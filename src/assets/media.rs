use std::path::Path;

use crate::foundation::core::Fps;
use crate::foundation::error::{InkscribeError, InkscribeResult};

/// Timing extracted from the reference hand-writing video.
///
/// The reference clip contributes nothing visually; it only fixes the output
/// frame rate and frame count, exactly as the output of
/// `fps * duration` rounded down.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReferenceTiming {
    /// Output frame rate.
    pub fps: Fps,
    /// Total output frames, `floor(fps * duration)`.
    pub total_frames: u64,
}

impl ReferenceTiming {
    /// Build timing from an fps and clip duration in seconds.
    pub fn from_fps_and_duration(fps: Fps, duration_secs: f64) -> InkscribeResult<Self> {
        if !duration_secs.is_finite() || duration_secs <= 0.0 {
            return Err(InkscribeError::asset(
                "reference video duration must be finite and > 0",
            ));
        }
        let total_frames = fps.secs_to_frames_floor(duration_secs);
        if total_frames == 0 {
            return Err(InkscribeError::asset(
                "reference video is shorter than one output frame",
            ));
        }
        Ok(Self { fps, total_frames })
    }
}

/// Probe the reference video's frame rate and duration through `ffprobe`.
pub fn probe_reference_timing(source_path: &Path) -> InkscribeResult<ReferenceTiming> {
    #[derive(serde::Deserialize)]
    struct ProbeStream {
        codec_type: Option<String>,
        r_frame_rate: Option<String>,
        duration: Option<String>,
    }
    #[derive(serde::Deserialize)]
    struct ProbeFormat {
        duration: Option<String>,
    }
    #[derive(serde::Deserialize)]
    struct ProbeOut {
        streams: Vec<ProbeStream>,
        format: Option<ProbeFormat>,
    }

    let out = std::process::Command::new("ffprobe")
        .args([
            "-v",
            "error",
            "-print_format",
            "json",
            "-show_streams",
            "-show_format",
        ])
        .arg(source_path)
        .output()
        .map_err(|e| InkscribeError::asset(format!("failed to run ffprobe: {e}")))?;
    if !out.status.success() {
        return Err(InkscribeError::asset(format!(
            "ffprobe failed for '{}': {}",
            source_path.display(),
            String::from_utf8_lossy(&out.stderr).trim()
        )));
    }

    let parsed: ProbeOut = serde_json::from_slice(&out.stdout)
        .map_err(|e| InkscribeError::asset(format!("ffprobe json parse failed: {e}")))?;
    let video_stream = parsed
        .streams
        .iter()
        .find(|s| s.codec_type.as_deref() == Some("video"))
        .ok_or_else(|| InkscribeError::asset("reference video has no video stream"))?;

    let fps = video_stream
        .r_frame_rate
        .as_deref()
        .ok_or_else(|| InkscribeError::asset("missing r_frame_rate from ffprobe"))
        .and_then(parse_rational_fps)?;

    // Stream duration is preferred; some containers only report it at the
    // format level.
    let duration = video_stream
        .duration
        .as_deref()
        .or(parsed.format.as_ref().and_then(|f| f.duration.as_deref()))
        .ok_or_else(|| InkscribeError::asset("missing duration from ffprobe"))?
        .parse::<f64>()
        .map_err(|e| InkscribeError::asset(format!("malformed ffprobe duration: {e}")))?;

    ReferenceTiming::from_fps_and_duration(fps, duration)
}

/// Parse an ffprobe rational frame rate such as `"30/1"` or `"30000/1001"`.
fn parse_rational_fps(raw: &str) -> InkscribeResult<Fps> {
    let (num, den) = match raw.split_once('/') {
        Some((n, d)) => (n, d),
        None => (raw, "1"),
    };
    let num = num
        .trim()
        .parse::<u32>()
        .map_err(|e| InkscribeError::asset(format!("malformed r_frame_rate '{raw}': {e}")))?;
    let den = den
        .trim()
        .parse::<u32>()
        .map_err(|e| InkscribeError::asset(format!("malformed r_frame_rate '{raw}': {e}")))?;
    Fps::new(num, den).map_err(|_| InkscribeError::asset(format!("degenerate r_frame_rate '{raw}'")))
}
