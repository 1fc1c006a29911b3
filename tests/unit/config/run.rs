use super::*;
use crate::schedule::compute_schedule;

#[test]
fn defaults_produce_the_reference_schedule() {
    let cfg = RunConfig::default();
    let s = compute_schedule(&cfg.timing().unwrap());
    assert_eq!(s.total_frames, 1800);
    assert_eq!(s.steps_per_transition, 90);
    assert_eq!(s.hold_frames_per_transition, 30);
    assert_eq!(cfg.walk_opts().unwrap().cutoff, CutoffPolicy::PerFrame);
}

#[test]
fn partial_json_keeps_defaults() {
    let json = r#"{ "fps": 24, "cutoff": "transition-boundary", "out_dir": "frames" }"#;
    let cfg = RunConfig::from_reader(json.as_bytes()).unwrap();
    assert_eq!(cfg.fps, 24);
    assert_eq!(cfg.cutoff, CutoffPolicy::TransitionBoundary);
    assert_eq!(cfg.out_dir, PathBuf::from("frames"));
    assert_eq!(cfg.latent_size, 512);
    assert_eq!(cfg.seed, 3);
}

#[test]
fn unknown_fields_are_rejected() {
    let err = RunConfig::from_reader(r#"{ "fsp": 24 }"#.as_bytes()).unwrap_err();
    assert!(matches!(err, ReelError::Serde(_)));
}

#[test]
fn missing_generator_file_is_a_validation_error() {
    let cfg = RunConfig::default();
    assert!(matches!(
        cfg.require_generator_file(),
        Err(ReelError::Validation(_))
    ));
}

#[test]
fn invalid_timing_surfaces_before_rendering() {
    let cfg = RunConfig {
        fps: 0,
        ..RunConfig::default()
    };
    assert!(cfg.timing().is_err());

    let cfg = RunConfig {
        traversal_time: 0.0,
        static_time: 0.0,
        ..RunConfig::default()
    };
    assert!(cfg.timing().is_err());
}

#[test]
fn missing_config_file_fails() {
    assert!(RunConfig::from_path("target/no_such_config.json").is_err());
}
