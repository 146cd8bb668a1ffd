use super::*;
use crate::foundation::core::DVec3;
use crate::foundation::error::RigposeError;
use crate::rig::baked::{BakedRig, BoneTrack};
use crate::sampling::frames::FrameSampleSpec;

fn rig(frames: usize) -> BakedRig {
    let pose = [
        ("Hips", [0.0, 0.0, 1.0]),
        ("Neck", [0.0, 0.0, 1.5]),
        ("Head", [0.0, 0.0, 1.65]),
        ("LeftShoulder", [0.2, 0.0, 1.45]),
        ("RightShoulder", [-0.2, 0.0, 1.45]),
        ("LeftForeArm", [0.45, 0.0, 1.45]),
        ("RightForeArm", [-0.45, 0.0, 1.45]),
        ("LeftHand", [0.7, 0.0, 1.45]),
        ("RightHand", [-0.7, 0.0, 1.45]),
        ("LeftUpLeg", [0.1, 0.0, 0.95]),
        ("RightUpLeg", [-0.1, 0.0, 0.95]),
        ("LeftLeg", [0.1, 0.0, 0.5]),
        ("RightLeg", [-0.1, 0.0, 0.5]),
        ("LeftFoot", [0.1, 0.0, 0.08]),
        ("RightFoot", [-0.1, 0.0, 0.08]),
    ];
    let bones = pose
        .iter()
        .map(|&(name, p)| BoneTrack {
            name: name.to_string(),
            positions: (0..frames)
                .map(|t| DVec3::from_array(p) + DVec3::X * (0.05 * t as f64))
                .collect(),
        })
        .collect();
    BakedRig::new(0, bones).unwrap()
}

fn config(count: u32) -> PoseConfig {
    PoseConfig {
        frames: FrameSampleSpec {
            requested_count: count,
            ..FrameSampleSpec::default()
        },
        canvas: Canvas {
            width: 256,
            height: 256,
        },
        ..PoseConfig::default()
    }
}

#[test]
fn runs_the_whole_pipeline() {
    let session = PoseSession::new(config(6)).unwrap();
    let out = session.run(rig(20), None).unwrap();

    assert_eq!(out.frames.len(), 6);
    let d = &out.diagnostics;
    assert_eq!(d.output_frames, 6);
    assert_eq!(d.frame_indices.len(), 6);
    assert_eq!((d.native_start, d.native_end), (0, 19));
    assert_eq!(d.resolved.get("hips").map(String::as_str), Some("Hips"));
    assert!(d.unresolved.iter().any(|j| j == "left_thumb_tip"));
    assert!(!d.unresolved.iter().any(|j| j == "head"));
    assert_eq!(d.coverage, None);
    assert_eq!(d.clip_yaw, None);
    // Every bone drifts 0.05 along X per frame.
    assert!(d.root_motion);

    // Everything lands on the canvas.
    for frame in &out.frames {
        let b = frame.bounds().unwrap();
        assert!(b.x0 >= 0.0 && b.y0 >= 0.0 && b.x1 <= 256.0 && b.y1 <= 256.0, "{b:?}");
        assert!(frame.contains("nose"));
    }
}

#[test]
fn reference_alignment_is_reported() {
    let mut cfg = config(3);
    cfg.alignment = AlignmentMode::UpperBodyHeadHips;
    let reference = ReferenceBBox {
        min_x: 50.0,
        max_x: 200.0,
        min_y: 20.0,
        max_y: 180.0,
        canvas_width: 256.0,
        canvas_height: 256.0,
    };
    let out = PoseSession::new(cfg).unwrap().run(rig(5), Some(&reference)).unwrap();

    assert_eq!(out.diagnostics.coverage, Some(Coverage::Upper));
    assert_eq!(out.diagnostics.reference, Some(reference));
    for frame in &out.frames {
        assert!(!frame.contains("left_knee") && !frame.contains("right_ankle"));
        assert!(frame.values().all(|p| p.y <= reference.max_y));
    }
}

#[test]
fn auto_face_camera_reports_yaw() {
    let cfg = PoseConfig {
        view: ViewMode::AutoFaceCamera,
        ..config(2)
    };
    let out = PoseSession::new(cfg).unwrap().run(rig(2), None).unwrap();
    // Left shoulder on +X already faces the camera.
    assert!(out.diagnostics.clip_yaw.unwrap().abs() < 1e-9);
}

#[test]
fn invalid_config_is_rejected_up_front() {
    let err = PoseSession::new(PoseConfig {
        canvas: Canvas {
            width: 0,
            height: 0,
        },
        ..PoseConfig::default()
    })
    .unwrap_err();
    assert!(matches!(err, RigposeError::Validation(_)));
}

#[test]
fn output_serializes_to_json() {
    let out = PoseSession::new(config(2)).unwrap().run(rig(3), None).unwrap();
    let json = serde_json::to_value(&out).unwrap();
    assert!(json["frames"][0]["hips"]["x"].is_number());
    assert_eq!(json["diagnostics"]["view"], "front");
    assert_eq!(json["diagnostics"]["frame_mode"], "spread_total_animation");

    let back: PoseOutput = serde_json::from_value(json).unwrap();
    assert_eq!(back.frames.len(), 2);
}

#[test]
fn single_frame_clip_is_in_place() {
    let session = PoseSession::new(config(3)).unwrap();
    let out = session.run(rig(1), None).unwrap();
    assert!(!out.diagnostics.root_motion);
    assert_eq!(out.frames.len(), 3);
}
