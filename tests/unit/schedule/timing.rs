use super::*;

fn timing(minutes: f64, traversal: f64, hold: f64, fps: u32) -> TimingConfig {
    TimingConfig::new(minutes, traversal, hold, Fps::integer(fps).unwrap()).unwrap()
}

#[test]
fn default_cli_timing_yields_1800_frames() {
    let t = timing(1.0, 3.0, 1.0, 30);
    assert_eq!(t.transition_period_secs(), 4.0);

    let s = compute_schedule(&t);
    assert_eq!(
        s,
        Schedule {
            steps_per_transition: 90,
            hold_frames_per_transition: 30,
            total_transitions: 15,
            total_frames: 1800,
        }
    );
    assert_eq!(s.frames_per_transition(), 120);
    assert_eq!(s.duration_secs(t.fps()), 60.0);
}

#[test]
fn zero_traversal_means_hold_only_transitions() {
    let s = compute_schedule(&timing(1.0, 0.0, 1.0, 30));
    assert_eq!(s.steps_per_transition, 0);
    assert_eq!(s.hold_frames_per_transition, 30);
    assert_eq!(s.total_transitions, 60);
    assert_eq!(s.total_frames, 1800);
}

#[test]
fn zero_static_means_walk_only_transitions() {
    let s = compute_schedule(&timing(0.5, 2.0, 0.0, 10));
    assert_eq!(s.steps_per_transition, 20);
    assert_eq!(s.hold_frames_per_transition, 0);
    assert_eq!(s.total_transitions, 15);
    assert_eq!(s.total_frames, 300);
}

#[test]
fn zero_minutes_yields_empty_schedule() {
    let s = compute_schedule(&timing(0.0, 3.0, 1.0, 30));
    assert_eq!(s.total_transitions, 0);
    assert_eq!(s.total_frames, 0);
    assert_eq!(s.steps_per_transition, 90);
}

#[test]
fn partial_transitions_are_dropped() {
    // 50s / 4s per transition = 12.5 -> 12 transitions.
    let s = compute_schedule(&timing(50.0 / 60.0, 3.0, 1.0, 30));
    assert_eq!(s.total_transitions, 12);
    assert_eq!(s.total_frames, 12 * 120);
}

#[test]
fn fractional_frame_counts_truncate() {
    // 0.25 * 10 = 2.5 hold frames -> 2, but the period is 7.5 frames.
    let s = compute_schedule(&timing(0.25, 0.5, 0.25, 10));
    assert_eq!(s.steps_per_transition, 5);
    assert_eq!(s.hold_frames_per_transition, 2);
    assert_eq!(s.total_transitions, 20);
    assert_eq!(s.total_frames, 150);
    assert_ne!(s.total_frames % s.frames_per_transition(), 0);
}

#[test]
fn tiny_traversal_floors_to_zero_steps() {
    let s = compute_schedule(&timing(1.0, 0.01, 1.0, 30));
    assert_eq!(s.steps_per_transition, 0);
    assert_eq!(s.hold_frames_per_transition, 30);
}

#[test]
fn schedule_counts_never_exceed_real_valued_bounds() {
    for &(m, tr, st, fps) in &[
        (0.0, 0.0, 0.1, 1),
        (0.01, 0.0, 5.0, 60),
        (3.0, 7.5, 0.0, 24),
        (10.0, 0.333, 0.333, 25),
        (0.001, 100.0, 100.0, 120),
    ] {
        let s = compute_schedule(&timing(m, tr, st, fps));
        assert!(s.steps_per_transition as f64 <= tr * f64::from(fps));
        assert!(s.hold_frames_per_transition as f64 <= st * f64::from(fps));
        let fpp = (tr + st) * f64::from(fps);
        assert!((s.total_frames as f64) <= s.total_transitions as f64 * fpp + 1e-9);
    }
}

#[test]
fn invalid_timing_is_rejected() {
    let fps = Fps::integer(30).unwrap();
    assert!(TimingConfig::new(-1.0, 3.0, 1.0, fps).is_err());
    assert!(TimingConfig::new(1.0, -3.0, 1.0, fps).is_err());
    assert!(TimingConfig::new(1.0, 3.0, -1.0, fps).is_err());
    assert!(TimingConfig::new(1.0, 0.0, 0.0, fps).is_err());
    assert!(TimingConfig::new(f64::NAN, 3.0, 1.0, fps).is_err());
    assert!(TimingConfig::new(1.0, f64::INFINITY, 1.0, fps).is_err());
}

#[test]
fn schedule_serializes_field_names() {
    let s = compute_schedule(&timing(1.0, 3.0, 1.0, 30));
    let v = serde_json::to_value(s).unwrap();
    assert_eq!(v["steps_per_transition"], 90);
    assert_eq!(v["hold_frames_per_transition"], 30);
    assert_eq!(v["total_transitions"], 15);
    assert_eq!(v["total_frames"], 1800);
}
