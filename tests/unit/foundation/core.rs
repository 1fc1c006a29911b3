use super::*;

#[test]
fn frame_index_starts_at_one_and_counts_up() {
    let first = FrameIndex::default();
    assert_eq!(first, FrameIndex::FIRST);
    assert_eq!(first.0, 1);
    assert_eq!(first.next(), FrameIndex(2));
    assert_eq!(FrameIndex(42).file_stem(), "42");
}

#[test]
fn fps_rejects_zero_parts() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(30, 0).is_err());
    assert_eq!(Fps::integer(24).unwrap(), Fps { num: 24, den: 1 });
}

#[test]
fn fps_frames_secs_roundtrip_floor() {
    let fps = Fps::new(30000, 1001).unwrap();
    let secs = fps.frames_to_secs(123);
    assert_eq!(fps.secs_to_frames_floor(secs), 123);
}

#[test]
fn secs_to_frames_truncates_toward_zero() {
    let fps = Fps::integer(30).unwrap();
    assert_eq!(fps.secs_to_frames_floor(3.0), 90);
    assert_eq!(fps.secs_to_frames_floor(0.02), 0);
    assert_eq!(fps.secs_to_frames_floor(1.99), 59);
    assert_eq!(fps.secs_to_frames_floor(0.0), 0);
}
