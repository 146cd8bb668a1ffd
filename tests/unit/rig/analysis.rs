use super::*;
use crate::rig::baked::{BakedRig, BoneTrack};

fn hips_rig(name: &str, step: DVec3, frames: usize) -> BakedRig {
    let positions = (0..frames)
        .map(|t| DVec3::new(0.0, 0.0, 1.0) + step * t as f64)
        .collect();
    let head = BoneTrack {
        name: "Head".to_string(),
        positions: vec![DVec3::new(0.0, 0.0, 1.7)],
    };
    let hips = BoneTrack {
        name: name.to_string(),
        positions,
    };
    BakedRig::new(0, vec![hips, head]).unwrap()
}

#[test]
fn sample_frames_cover_range_endpoints() {
    let frames = motion_sample_frames(0, 100);
    assert_eq!(frames.len(), MAX_MOTION_SAMPLES as usize);
    assert_eq!(frames.first(), Some(&0));
    assert_eq!(frames.last(), Some(&100));
    assert_eq!(frames[1], 5);

    assert_eq!(motion_sample_frames(10, 13), vec![10, 11, 12, 13]);
    assert_eq!(motion_sample_frames(-1, 0), vec![-1, 0]);
    assert!(motion_sample_frames(5, 5).is_empty());
    assert!(motion_sample_frames(9, 2).is_empty());
}

#[test]
fn root_motion_thresholds() {
    let at = |y: f64| DVec3::new(0.0, y, 1.0);
    assert!(!is_root_motion(&[]));
    assert!(!is_root_motion(&[at(5.0)]));
    assert!(!is_root_motion(&[at(0.0), at(0.01), at(0.02)]));
    assert!(is_root_motion(&[at(0.0), at(0.03), at(0.06)]));

    // Back and forth: no net travel, path decides.
    assert!(is_root_motion(&[at(0.0), at(0.04), at(0.0), at(0.04), at(0.0)]));
    assert!(!is_root_motion(&[at(0.0), at(0.04), at(0.0)]));
}

#[test]
fn walking_clip_is_root_motion() {
    let rig = hips_rig("mixamorig:Hips", DVec3::new(0.0, -0.01, 0.0), 101);
    let info = analyze(&rig).unwrap();
    assert!(info.root_motion);
    assert_eq!((info.native_start, info.native_end), (0, 100));
    assert_eq!(info.frame_count, 101);
    assert_eq!(info.fps, None);
}

#[test]
fn in_place_clip_is_not_root_motion() {
    let rig = hips_rig("pelvis", DVec3::new(0.0, 0.0001, 0.0), 101).with_fps(30.0);
    let info = analyze(&rig).unwrap();
    assert!(!info.root_motion);
    assert_eq!(info.fps, Some(30.0));
    assert_eq!(info.suggested_step(DEFAULT_TARGET_FPS), 2);
}

#[test]
fn rig_without_root_counts_as_in_place() {
    let rig = hips_rig("Tail", DVec3::new(1.0, 0.0, 0.0), 10);
    let mapping = resolve_rig(rig.bone_names());
    assert!(!detect_root_motion(&rig, &mapping).unwrap());

    let single = hips_rig("Hips", DVec3::new(1.0, 0.0, 0.0), 1);
    assert!(!analyze(&single).unwrap().root_motion);
}

#[test]
fn frame_step_rounds_rate_ratio() {
    assert_eq!(suggested_frame_step(30.0, 16.0), 2);
    assert_eq!(suggested_frame_step(24.0, 16.0), 2);
    assert_eq!(suggested_frame_step(40.0, 16.0), 2);
    assert_eq!(suggested_frame_step(60.0, 16.0), 4);
    assert_eq!(suggested_frame_step(8.0, 16.0), 1);
    assert_eq!(suggested_frame_step(0.0, 16.0), 1);
    assert_eq!(suggested_frame_step(30.0, f64::NAN), 1);

    let info = ClipInfo {
        native_start: 0,
        native_end: 10,
        frame_count: 11,
        fps: None,
        root_motion: false,
    };
    assert_eq!(info.suggested_step(16.0), 1);
}
