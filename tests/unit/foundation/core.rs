use super::*;

#[test]
fn frame_range_validates_ordering() {
    assert!(FrameRange::new(FrameIndex(5), FrameIndex(3)).is_err());
    let r = FrameRange::new(FrameIndex(3), FrameIndex(5)).unwrap();
    assert_eq!(r.len_frames(), 2);
    assert!(!r.is_empty());
    assert!(r.contains(FrameIndex(3)));
    assert!(r.contains(FrameIndex(4)));
    assert!(!r.contains(FrameIndex(5)));
}

#[test]
fn frame_range_empty() {
    let r = FrameRange::new(FrameIndex(3), FrameIndex(3)).unwrap();
    assert!(r.is_empty());
    assert_eq!(r.len_frames(), 0);
    assert!(!r.contains(FrameIndex(3)));
}

#[test]
fn fps_rejects_zero() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(30, 0).is_err());
}

#[test]
fn fps_conversions() {
    let fps = Fps::new(30, 1).unwrap();
    assert_eq!(fps.as_f64(), 30.0);
    assert_eq!(fps.frame_duration_secs(), 1.0 / 30.0);

    let ntsc = Fps::new(30_000, 1001).unwrap();
    assert!((ntsc.as_f64() - 29.97).abs() < 0.01);
}

#[test]
fn secs_to_frames_floors() {
    let fps = Fps::new(30, 1).unwrap();
    assert_eq!(fps.secs_to_frames_floor(3.0), 90);
    assert_eq!(fps.secs_to_frames_floor(3.02), 90);
    assert_eq!(fps.secs_to_frames_floor(2.999), 89);
    assert_eq!(fps.secs_to_frames_floor(-1.0), 0);
}

#[test]
fn canvas_buffer_lengths() {
    let c = Canvas {
        width: 1080,
        height: 1920,
    };
    assert_eq!(c.rgba8_len(), 1080 * 1920 * 4);
    assert_eq!(c.luma8_len(), 1080 * 1920);
}
