use super::*;
use crate::config::model::CameraPath;

fn short_clip() -> ClipSpec {
    ClipSpec {
        fps: Fps::new(24, 1).unwrap(),
        duration_secs: 2.0,
        motion: CameraMotion::RECORDING,
    }
}

#[test]
fn default_clip_is_six_seconds_at_sixty() {
    let clip = ClipSpec::default();
    clip.validate().unwrap();
    assert_eq!(clip.frame_count(), 360);
    assert!(clip.motion.recording);
}

#[test]
fn serial_bake_covers_every_frame_in_order() {
    let cfg = SceneConfig::default();
    let clip = short_clip();
    let baked = bake_clip(&cfg, &clip, &BakeThreading::default()).unwrap();
    assert_eq!(baked.frames.len(), 48);
    assert_eq!(baked.range.len_frames(), 48);
    assert_eq!(baked.config, cfg);
    for (i, frame) in baked.frames.iter().enumerate() {
        let t = clip.fps.frames_to_secs(i as u64);
        let expected = Composer::compose_with_motion(&cfg, t, CameraMotion::RECORDING);
        assert_eq!(frame, &expected);
    }
}

#[test]
fn parallel_bake_matches_serial() {
    let cfg = SceneConfig {
        camera_path: CameraPath::Pan,
        ..SceneConfig::default()
    };
    let serial = bake_clip(&cfg, &short_clip(), &BakeThreading::default()).unwrap();
    let parallel = bake_clip(
        &cfg,
        &short_clip(),
        &BakeThreading {
            parallel: true,
            chunk_size: 5,
            threads: Some(3),
        },
    )
    .unwrap();
    assert_eq!(serial, parallel);
}

#[test]
fn zero_threads_is_rejected() {
    let err = bake_clip(
        &SceneConfig::default(),
        &short_clip(),
        &BakeThreading {
            parallel: true,
            chunk_size: 0,
            threads: Some(0),
        },
    )
    .unwrap_err();
    assert!(err.to_string().contains("threads"));
}

#[test]
fn invalid_clips_and_configs_are_rejected() {
    let cfg = SceneConfig::default();
    for duration_secs in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let clip = ClipSpec {
            duration_secs,
            ..short_clip()
        };
        assert!(bake_clip(&cfg, &clip, &BakeThreading::default()).is_err());
    }

    let bad = SceneConfig {
        fov_deg: 1.0,
        ..cfg
    };
    assert!(bake_clip(&bad, &short_clip(), &BakeThreading::default()).is_err());
}

#[test]
fn fractional_durations_round_up() {
    let clip = ClipSpec {
        duration_secs: 0.5,
        fps: Fps::new(30000, 1001).unwrap(),
        motion: CameraMotion::PREVIEW,
    };
    assert_eq!(clip.frame_count(), 15);
}

#[test]
fn oversized_clips_are_rejected_before_allocating() {
    let cfg = SceneConfig::default();
    for duration_secs in [1e17, 1e12, 3601.0] {
        let clip = ClipSpec {
            duration_secs,
            ..ClipSpec::default()
        };
        let err = bake_clip(&cfg, &clip, &BakeThreading::default()).unwrap_err();
        assert!(matches!(err, BrollError::Validation(_)), "{duration_secs}: {err}");
    }

    let hour = ClipSpec {
        duration_secs: 3600.0,
        ..ClipSpec::default()
    };
    assert_eq!(hour.frame_count(), MAX_CLIP_FRAMES);
    hour.validate().unwrap();
}

#[test]
fn tiny_positive_duration_is_one_frame() {
    let clip = ClipSpec {
        duration_secs: 1e-12,
        ..ClipSpec::default()
    };
    assert_eq!(clip.frame_count(), 1);
    clip.validate().unwrap();
}

#[test]
fn frames_are_looked_up_by_index() {
    let baked = bake_clip(
        &SceneConfig::default(),
        &short_clip(),
        &BakeThreading::default(),
    )
    .unwrap();
    assert_eq!(baked.frame(FrameIndex(0)), baked.frames.first());
    assert_eq!(baked.frame(FrameIndex(47)), baked.frames.last());
    assert!(baked.frame(FrameIndex(48)).is_none());
}
