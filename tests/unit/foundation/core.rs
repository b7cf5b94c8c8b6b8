use super::*;

#[test]
fn frame_range_contains_boundaries() {
    let r = FrameRange::new(FrameIndex(2), FrameIndex(5)).unwrap();
    assert!(!r.contains(FrameIndex(1)));
    assert!(r.contains(FrameIndex(2)));
    assert!(r.contains(FrameIndex(4)));
    assert!(!r.contains(FrameIndex(5)));
    assert_eq!(r.len_frames(), 3);
}

#[test]
fn frame_range_rejects_inverted_bounds() {
    assert!(FrameRange::new(FrameIndex(5), FrameIndex(2)).is_err());
    assert!(FrameRange::new(FrameIndex(5), FrameIndex(5)).unwrap().is_empty());
}

#[test]
fn frame_range_shift_saturates_at_zero() {
    let r = FrameRange::with_len(FrameIndex(10), 20);
    assert_eq!(r.shift(5), FrameRange::with_len(FrameIndex(15), 20));
    let r = r.shift(-15);
    assert_eq!(r.start, FrameIndex(0));
    assert_eq!(r.end, FrameIndex(15));
}

#[test]
fn overlap_frames_counts_shared_span() {
    let a = FrameRange::with_len(FrameIndex(0), 130);
    let b = FrameRange::with_len(FrameIndex(115), 180);
    assert_eq!(a.overlap_frames(b), 15);
    assert_eq!(b.overlap_frames(a), 15);

    let c = FrameRange::with_len(FrameIndex(300), 10);
    assert_eq!(a.overlap_frames(c), 0);
}

#[test]
fn fps_rejects_zero_parts() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(30, 0).is_err());
    assert_eq!(Fps::new(30, 1).unwrap(), VIDEO_FPS);
}

#[test]
fn frames_for_secs_is_exact_for_integer_rates() {
    assert_eq!(VIDEO_FPS.frames_for_secs(6), 180);
    assert_eq!(VIDEO_FPS.frames_for_secs(0), 0);
    assert_eq!(Fps::new(60, 1).unwrap().frames_for_secs(7), 420);
    // 29.97: 8 s -> 239.76 frames, floored.
    assert_eq!(Fps::new(30000, 1001).unwrap().frames_for_secs(8), 239);
}

#[test]
fn frames_to_secs_matches_rate() {
    assert!((VIDEO_FPS.frames_to_secs(45) - 1.5).abs() < 1e-12);
    let ntsc = Fps::new(30000, 1001).unwrap();
    assert!((ntsc.as_f64() - 29.97).abs() < 1e-3);
    assert!((ntsc.frames_to_secs(30000) - 1001.0).abs() < 1e-9);
}
